use sqlx::PgPool;
use tracing::instrument;

use crate::utils::errors::AppError;

use super::model::{CreateProfessorDto, Professor, UpdateProfessorDto};

pub struct ProfessorService;

impl ProfessorService {
    pub async fn ensure_schema(db: &PgPool) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS professors (
                id SERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                department TEXT NOT NULL
            )
            "#,
        )
        .execute(db)
        .await
        .map_err(AppError::database)?;

        Ok(())
    }

    #[instrument(skip(db, dto))]
    pub async fn create_professor(
        db: &PgPool,
        dto: CreateProfessorDto,
    ) -> Result<Professor, AppError> {
        sqlx::query_as::<_, Professor>(
            "INSERT INTO professors (name, email, department)
             VALUES ($1, $2, $3)
             RETURNING id, name, email, department",
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.department)
        .fetch_one(db)
        .await
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn list_professors(db: &PgPool) -> Result<Vec<Professor>, AppError> {
        sqlx::query_as::<_, Professor>(
            "SELECT id, name, email, department FROM professors ORDER BY id",
        )
        .fetch_all(db)
        .await
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn get_professor_by_id(db: &PgPool, id: i32) -> Result<Option<Professor>, AppError> {
        sqlx::query_as::<_, Professor>(
            "SELECT id, name, email, department FROM professors WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_professor(
        db: &PgPool,
        id: i32,
        dto: UpdateProfessorDto,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE professors SET name = $1, email = $2, department = $3 WHERE id = $4",
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.department)
        .bind(id)
        .execute(db)
        .await
        .map_err(AppError::database)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(db))]
    pub async fn delete_professor(db: &PgPool, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM professors WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        Ok(result.rows_affected())
    }
}
