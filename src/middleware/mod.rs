//! Request middleware and extractors.
//!
//! - [`auth`]: bearer-token validation ([`auth::AuthUser`] extractor)
//! - [`role`]: role gate applied on top of an authenticated request
//!
//! A request to a protected route is first authenticated (signature,
//! issuer, audience, expiry), then authorized (role claim against the
//! route's requirement). The two failures stay distinct: 401 for the
//! former, 403 for the latter.

pub mod auth;
pub mod role;
