use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Professor {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProfessorDto {
    #[validate(length(min = 1, message = "name must not be blank"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "department must not be blank"))]
    pub department: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfessorDto {
    #[validate(length(min = 1, message = "name must not be blank"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "department must not be blank"))]
    pub department: String,
}
