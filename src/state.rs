use sqlx::PgPool;

use crate::config::database::init_db_pool;
use crate::config::jwt::JwtConfig;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
}

/// Fails when the database is unreachable or a required configuration value
/// is missing, so a misconfigured process never starts serving.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    Ok(AppState {
        db: init_db_pool().await?,
        jwt_config: JwtConfig::from_env()?,
    })
}
