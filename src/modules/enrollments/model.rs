use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub id: i32,
    pub student_id: i32,
    pub course_id: i32,
    pub enrolled_on: NaiveDate,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEnrollmentDto {
    #[validate(range(min = 1, message = "student_id must be positive"))]
    pub student_id: i32,
    #[validate(range(min = 1, message = "course_id must be positive"))]
    pub course_id: i32,
    /// Defaults to the current date when omitted.
    pub enrolled_on: Option<NaiveDate>,
}
