use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A credential record as exposed to the rest of the application.
///
/// `role` holds one of the values of
/// [`UserRole`](crate::middleware::role::UserRole); every write site goes
/// through the enum.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Credential record including the password hash. Only the login path
/// reads this shape; it is never serialized into a response.
#[derive(FromRow, Debug, Clone)]
pub struct UserWithPassword {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}
