use sqlx::PgPool;
use tracing::instrument;

use crate::middleware::role::UserRole;
use crate::utils::errors::AppError;

use super::model::{User, UserWithPassword};

pub struct UserService;

impl UserService {
    /// Idempotent bootstrap of the credential table. The unique index on
    /// `lower(email)` is what makes [`Self::create`] an atomic
    /// insert-if-absent: duplicate detection and insertion are one
    /// statement, so two concurrent registrations cannot both succeed.
    pub async fn ensure_schema(db: &PgPool) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id SERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                password TEXT NOT NULL,
                role TEXT NOT NULL DEFAULT 'user'
            )
            "#,
        )
        .execute(db)
        .await
        .map_err(AppError::database)?;

        sqlx::query(
            "CREATE UNIQUE INDEX IF NOT EXISTS users_email_lower_idx ON users ((lower(email)))",
        )
        .execute(db)
        .await
        .map_err(AppError::database)?;

        Ok(())
    }

    /// Case-insensitive exact match. The same `lower()` normalization backs
    /// the unique index, so lookup and uniqueness can never disagree.
    #[instrument(skip(db))]
    pub async fn find_by_email(
        db: &PgPool,
        email: &str,
    ) -> Result<Option<UserWithPassword>, AppError> {
        sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, name, email, password, role FROM users WHERE lower(email) = lower($1)",
        )
        .bind(email)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn find_by_id(db: &PgPool, id: i32) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT id, name, email, role FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)
    }

    #[instrument(skip(db, password_hash))]
    pub async fn create(
        db: &PgPool,
        name: &str,
        email: &str,
        password_hash: &str,
        role: UserRole,
    ) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password, role)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, email, role",
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(role.as_str())
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::conflict(anyhow::anyhow!(
                        "Email {} is already registered",
                        email
                    ));
                }
            }
            AppError::database(anyhow::Error::from(e))
        })
    }
}
