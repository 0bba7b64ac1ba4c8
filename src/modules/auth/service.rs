use sqlx::PgPool;
use tracing::instrument;

use crate::config::jwt::JwtConfig;
use crate::middleware::role::UserRole;
use crate::modules::users::model::User;
use crate::modules::users::service::UserService;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::{hash_password, verify_password};

use super::model::{LoginRequest, LoginResponse, RegisterRequest};

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto))]
    pub async fn register(db: &PgPool, dto: RegisterRequest) -> Result<User, AppError> {
        let hashed_password = hash_password(&dto.password)?;

        UserService::create(db, &dto.name, &dto.email, &hashed_password, UserRole::User).await
    }

    /// A missing account and a wrong password produce the same rejection,
    /// so the response never reveals which addresses are registered.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let stored = UserService::find_by_email(db, &dto.email)
            .await?
            .ok_or_else(Self::invalid_credentials)?;

        if !verify_password(&dto.password, &stored.password)? {
            return Err(Self::invalid_credentials());
        }

        let user = User {
            id: stored.id,
            name: stored.name,
            email: stored.email,
            role: stored.role,
        };

        let (access_token, expires_at) = create_access_token(&user, jwt_config)?;

        Ok(LoginResponse {
            access_token,
            expires_at,
        })
    }

    fn invalid_credentials() -> AppError {
        AppError::unauthorized(anyhow::anyhow!("Invalid email or password"))
    }
}
