use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A student record.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub email: String,
    pub birth_date: NaiveDate,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateStudentDto {
    #[validate(length(min = 1, message = "name must not be blank"))]
    pub name: String,
    #[validate(range(min = 0, message = "age must not be negative"))]
    pub age: i32,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub birth_date: NaiveDate,
}

/// Full-replace update: every field is written.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStudentDto {
    #[validate(length(min = 1, message = "name must not be blank"))]
    pub name: String,
    #[validate(range(min = 0, message = "age must not be negative"))]
    pub age: i32,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub birth_date: NaiveDate,
}
