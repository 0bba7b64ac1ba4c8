use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{Course, CreateCourseDto, UpdateCourseDto};
use super::service::CourseService;

#[instrument(skip(state, dto))]
pub async fn create_course(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateCourseDto>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    let course = CourseService::create_course(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

#[instrument(skip(state))]
pub async fn get_courses(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<Course>>, AppError> {
    let courses = CourseService::list_courses(&state.db).await?;
    Ok(Json(courses))
}

#[instrument(skip(state))]
pub async fn get_course(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<Course>, AppError> {
    let course = CourseService::get_course_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Course not found")))?;

    Ok(Json(course))
}

#[instrument(skip(state, dto))]
pub async fn update_course(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateCourseDto>,
) -> Result<Json<Course>, AppError> {
    let affected = CourseService::update_course(&state.db, id, dto).await?;
    if affected == 0 {
        return Err(AppError::not_found(anyhow::anyhow!("Course not found")));
    }

    let course = CourseService::get_course_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Course not found")))?;

    Ok(Json(course))
}

#[instrument(skip(state))]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let affected = CourseService::delete_course(&state.db, id).await?;
    if affected == 0 {
        return Err(AppError::not_found(anyhow::anyhow!("Course not found")));
    }

    Ok(Json(json!({"message": "Course deleted successfully"})))
}
