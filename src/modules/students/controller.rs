use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateStudentDto, Student, UpdateStudentDto};
use super::service::StudentService;

#[instrument(skip(state, dto))]
pub async fn create_student(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateStudentDto>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let student = StudentService::create_student(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// List students, optionally filtered. Each query-string pair is an
/// independent field search; results are unioned and id-ordered. No
/// filters means the full listing.
#[instrument(skip(state))]
pub async fn get_students(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Query(filters): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Student>>, AppError> {
    let students = StudentService::search_students(&state.db, &filters).await?;
    Ok(Json(students))
}

#[instrument(skip(state))]
pub async fn get_student(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::get_student_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;

    Ok(Json(student))
}

#[instrument(skip(state, dto))]
pub async fn update_student(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateStudentDto>,
) -> Result<Json<Student>, AppError> {
    let affected = StudentService::update_student(&state.db, id, dto).await?;
    if affected == 0 {
        return Err(AppError::not_found(anyhow::anyhow!("Student not found")));
    }

    let student = StudentService::get_student_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;

    Ok(Json(student))
}

#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let affected = StudentService::delete_student(&state.db, id).await?;
    if affected == 0 {
        return Err(AppError::not_found(anyhow::anyhow!("Student not found")));
    }

    Ok(Json(json!({"message": "Student deleted successfully"})))
}
