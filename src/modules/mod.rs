use sqlx::PgPool;

use crate::utils::errors::AppError;

pub mod auth;
pub mod courses;
pub mod enrollments;
pub mod professors;
pub mod students;
pub mod users;

/// Bootstrap every table this service owns. Each step is idempotent, so
/// this is safe to run on every start.
pub async fn ensure_schema(db: &PgPool) -> Result<(), AppError> {
    users::service::UserService::ensure_schema(db).await?;
    students::service::StudentService::ensure_schema(db).await?;
    professors::service::ProfessorService::ensure_schema(db).await?;
    courses::service::CourseService::ensure_schema(db).await?;
    enrollments::service::EnrollmentService::ensure_schema(db).await?;

    Ok(())
}
