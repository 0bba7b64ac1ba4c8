use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::Claims;
use crate::modules::users::model::User;
use crate::utils::errors::AppError;

/// Clock drift tolerated between token issuer and verifier, in seconds.
const VALIDATION_LEEWAY_SECS: u64 = 15;

/// Build a signed access token for a verified user. Returns the serialized
/// token together with its absolute expiry.
pub fn create_access_token(
    user: &User,
    jwt_config: &JwtConfig,
) -> Result<(String, DateTime<Utc>), AppError> {
    let now = Utc::now();
    let expires_at = now + Duration::minutes(jwt_config.expiry_minutes);

    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        name: user.name.clone(),
        role: user.role.clone(),
        iss: jwt_config.issuer.clone(),
        aud: jwt_config.audience.clone(),
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))?;

    Ok((token, expires_at))
}

/// Check signature, issuer, audience and expiry, and hand back the claim
/// set. Every failure collapses into a single unauthenticated rejection.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::default();
    validation.set_issuer(&[&jwt_config.issuer]);
    validation.set_audience(&[&jwt_config.audience]);
    validation.leeway = VALIDATION_LEEWAY_SECS;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(anyhow::anyhow!("Invalid or expired token")))
}
