use sqlx::PgPool;
use tracing::instrument;

use crate::modules::courses::service::CourseService;
use crate::modules::students::service::StudentService;
use crate::utils::errors::AppError;

use super::model::{CreateEnrollmentDto, Enrollment};

pub struct EnrollmentService;

impl EnrollmentService {
    pub async fn ensure_schema(db: &PgPool) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS enrollments (
                id SERIAL PRIMARY KEY,
                student_id INTEGER NOT NULL,
                course_id INTEGER NOT NULL,
                enrolled_on DATE NOT NULL DEFAULT CURRENT_DATE
            )
            "#,
        )
        .execute(db)
        .await
        .map_err(AppError::database)?;

        Ok(())
    }

    /// Both sides of the enrollment must exist at creation time; the rows
    /// are not tied together by cascades afterwards.
    #[instrument(skip(db, dto))]
    pub async fn create_enrollment(
        db: &PgPool,
        dto: CreateEnrollmentDto,
    ) -> Result<Enrollment, AppError> {
        StudentService::get_student_by_id(db, dto.student_id)
            .await?
            .ok_or_else(|| {
                AppError::bad_request(anyhow::anyhow!("Student {} does not exist", dto.student_id))
            })?;

        CourseService::get_course_by_id(db, dto.course_id)
            .await?
            .ok_or_else(|| {
                AppError::bad_request(anyhow::anyhow!("Course {} does not exist", dto.course_id))
            })?;

        sqlx::query_as::<_, Enrollment>(
            "INSERT INTO enrollments (student_id, course_id, enrolled_on)
             VALUES ($1, $2, COALESCE($3, CURRENT_DATE))
             RETURNING id, student_id, course_id, enrolled_on",
        )
        .bind(dto.student_id)
        .bind(dto.course_id)
        .bind(dto.enrolled_on)
        .fetch_one(db)
        .await
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn list_enrollments(db: &PgPool) -> Result<Vec<Enrollment>, AppError> {
        sqlx::query_as::<_, Enrollment>(
            "SELECT id, student_id, course_id, enrolled_on FROM enrollments ORDER BY id",
        )
        .fetch_all(db)
        .await
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn get_enrollment_by_id(db: &PgPool, id: i32) -> Result<Option<Enrollment>, AppError> {
        sqlx::query_as::<_, Enrollment>(
            "SELECT id, student_id, course_id, enrolled_on FROM enrollments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn delete_enrollment(db: &PgPool, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM enrollments WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        Ok(result.rows_affected())
    }
}
