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

use super::model::{CreateEnrollmentDto, Enrollment};
use super::service::EnrollmentService;

#[instrument(skip(state, dto))]
pub async fn create_enrollment(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateEnrollmentDto>,
) -> Result<(StatusCode, Json<Enrollment>), AppError> {
    let enrollment = EnrollmentService::create_enrollment(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(enrollment)))
}

#[instrument(skip(state))]
pub async fn get_enrollments(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<Enrollment>>, AppError> {
    let enrollments = EnrollmentService::list_enrollments(&state.db).await?;
    Ok(Json(enrollments))
}

#[instrument(skip(state))]
pub async fn get_enrollment(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<Enrollment>, AppError> {
    let enrollment = EnrollmentService::get_enrollment_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Enrollment not found")))?;

    Ok(Json(enrollment))
}

#[instrument(skip(state))]
pub async fn delete_enrollment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let affected = EnrollmentService::delete_enrollment(&state.db, id).await?;
    if affected == 0 {
        return Err(AppError::not_found(anyhow::anyhow!("Enrollment not found")));
    }

    Ok(Json(json!({"message": "Enrollment deleted successfully"})))
}
