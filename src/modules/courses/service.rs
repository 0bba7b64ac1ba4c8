use sqlx::PgPool;
use tracing::instrument;

use crate::modules::professors::service::ProfessorService;
use crate::utils::errors::AppError;

use super::model::{Course, CreateCourseDto, UpdateCourseDto};

pub struct CourseService;

impl CourseService {
    pub async fn ensure_schema(db: &PgPool) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS courses (
                id SERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                code TEXT NOT NULL,
                professor_id INTEGER
            )
            "#,
        )
        .execute(db)
        .await
        .map_err(AppError::database)?;

        Ok(())
    }

    /// A referenced professor must exist at creation time; there is no
    /// cascade tying the rows together afterwards.
    #[instrument(skip(db, dto))]
    pub async fn create_course(db: &PgPool, dto: CreateCourseDto) -> Result<Course, AppError> {
        if let Some(professor_id) = dto.professor_id {
            Self::check_professor_exists(db, professor_id).await?;
        }

        sqlx::query_as::<_, Course>(
            "INSERT INTO courses (name, code, professor_id)
             VALUES ($1, $2, $3)
             RETURNING id, name, code, professor_id",
        )
        .bind(&dto.name)
        .bind(&dto.code)
        .bind(dto.professor_id)
        .fetch_one(db)
        .await
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn list_courses(db: &PgPool) -> Result<Vec<Course>, AppError> {
        sqlx::query_as::<_, Course>("SELECT id, name, code, professor_id FROM courses ORDER BY id")
            .fetch_all(db)
            .await
            .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn get_course_by_id(db: &PgPool, id: i32) -> Result<Option<Course>, AppError> {
        sqlx::query_as::<_, Course>("SELECT id, name, code, professor_id FROM courses WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_course(db: &PgPool, id: i32, dto: UpdateCourseDto) -> Result<u64, AppError> {
        if let Some(professor_id) = dto.professor_id {
            Self::check_professor_exists(db, professor_id).await?;
        }

        let result =
            sqlx::query("UPDATE courses SET name = $1, code = $2, professor_id = $3 WHERE id = $4")
                .bind(&dto.name)
                .bind(&dto.code)
                .bind(dto.professor_id)
                .bind(id)
                .execute(db)
                .await
                .map_err(AppError::database)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(db))]
    pub async fn delete_course(db: &PgPool, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        Ok(result.rows_affected())
    }

    async fn check_professor_exists(db: &PgPool, professor_id: i32) -> Result<(), AppError> {
        ProfessorService::get_professor_by_id(db, professor_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| {
                AppError::bad_request(anyhow::anyhow!(
                    "Professor {} does not exist",
                    professor_id
                ))
            })
    }
}
