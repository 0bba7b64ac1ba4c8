use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub professor_id: Option<i32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseDto {
    #[validate(length(min = 1, message = "name must not be blank"))]
    pub name: String,
    #[validate(length(min = 1, message = "code must not be blank"))]
    pub code: String,
    pub professor_id: Option<i32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCourseDto {
    #[validate(length(min = 1, message = "name must not be blank"))]
    pub name: String,
    #[validate(length(min = 1, message = "code must not be blank"))]
    pub code: String,
    pub professor_id: Option<i32>,
}
