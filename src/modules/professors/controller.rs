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

use super::model::{CreateProfessorDto, Professor, UpdateProfessorDto};
use super::service::ProfessorService;

#[instrument(skip(state, dto))]
pub async fn create_professor(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateProfessorDto>,
) -> Result<(StatusCode, Json<Professor>), AppError> {
    let professor = ProfessorService::create_professor(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(professor)))
}

#[instrument(skip(state))]
pub async fn get_professors(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<Professor>>, AppError> {
    let professors = ProfessorService::list_professors(&state.db).await?;
    Ok(Json(professors))
}

#[instrument(skip(state))]
pub async fn get_professor(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<Professor>, AppError> {
    let professor = ProfessorService::get_professor_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Professor not found")))?;

    Ok(Json(professor))
}

#[instrument(skip(state, dto))]
pub async fn update_professor(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateProfessorDto>,
) -> Result<Json<Professor>, AppError> {
    let affected = ProfessorService::update_professor(&state.db, id, dto).await?;
    if affected == 0 {
        return Err(AppError::not_found(anyhow::anyhow!("Professor not found")));
    }

    let professor = ProfessorService::get_professor_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Professor not found")))?;

    Ok(Json(professor))
}

#[instrument(skip(state))]
pub async fn delete_professor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let affected = ProfessorService::delete_professor(&state.db, id).await?;
    if affected == 0 {
        return Err(AppError::not_found(anyhow::anyhow!("Professor not found")));
    }

    Ok(Json(json!({"message": "Professor deleted successfully"})))
}
