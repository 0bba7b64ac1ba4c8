//! Role-based authorization for protected routes.
//!
//! Roles form a closed set: a token claim is parsed into [`UserRole`]
//! before any comparison, so a typo in a stored role string can never
//! satisfy a permission check.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    pub fn parse(role: &str) -> Option<Self> {
        match role {
            "user" => Some(Self::User),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// Route-level permission decision. An operation without a role requirement
/// admits any authenticated caller; one with a requirement admits exactly
/// that role.
pub fn permits(role: UserRole, required: Option<UserRole>) -> bool {
    match required {
        None => true,
        Some(required) => role == required,
    }
}

async fn require_role(
    state: AppState,
    req: Request,
    next: Next,
    required: UserRole,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;

    // The token verified, so the caller is authenticated; a role outside
    // the closed set still cannot match any requirement.
    let role = UserRole::parse(&auth_user.0.role)
        .ok_or_else(|| AppError::forbidden(anyhow::anyhow!("Unknown role in token")))?;

    if !permits(role, Some(required)) {
        return Err(AppError::forbidden(anyhow::anyhow!(
            "Access denied. Required role: {}",
            required.as_str()
        )));
    }

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Layer for routes only administrators may reach.
///
/// ```rust,ignore
/// let admin_routes = Router::new()
///     .route("/{id}", delete(delete_student))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));
/// ```
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_role(state, req, next, UserRole::Admin).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permits_without_requirement() {
        assert!(permits(UserRole::User, None));
        assert!(permits(UserRole::Admin, None));
    }

    #[test]
    fn test_permits_with_requirement() {
        assert!(permits(UserRole::Admin, Some(UserRole::Admin)));
        assert!(!permits(UserRole::User, Some(UserRole::Admin)));
        assert!(permits(UserRole::User, Some(UserRole::User)));
        assert!(!permits(UserRole::Admin, Some(UserRole::User)));
    }

    #[test]
    fn test_parse_role() {
        assert_eq!(UserRole::parse("user"), Some(UserRole::User));
        assert_eq!(UserRole::parse("admin"), Some(UserRole::Admin));
        assert_eq!(UserRole::parse("administrator"), None);
        assert_eq!(UserRole::parse("Admin"), None);
        assert_eq!(UserRole::parse(""), None);
    }

    #[test]
    fn test_role_round_trip() {
        for role in [UserRole::User, UserRole::Admin] {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
    }
}
