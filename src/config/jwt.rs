use std::env;

use anyhow::Context;

/// Token signing and validation settings.
///
/// Issuer, audience and secret have no safe defaults: a process missing any
/// of them must fail at startup rather than issue tokens nobody can verify.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub expiry_minutes: i64,
}

impl JwtConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            issuer: env::var("JWT_ISSUER").context("JWT_ISSUER must be set")?,
            audience: env::var("JWT_AUDIENCE").context("JWT_AUDIENCE must be set")?,
            expiry_minutes: env::var("JWT_EXPIRY_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
        })
    }
}
