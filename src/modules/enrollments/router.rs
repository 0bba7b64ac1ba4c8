use axum::{
    Router, middleware,
    routing::{delete, get},
};

use crate::middleware::role::require_admin;
use crate::state::AppState;

use super::controller::{create_enrollment, delete_enrollment, get_enrollment, get_enrollments};

pub fn init_enrollments_router(state: &AppState) -> Router<AppState> {
    let admin_routes = Router::new()
        .route("/{id}", delete(delete_enrollment))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .route("/", get(get_enrollments).post(create_enrollment))
        .route("/{id}", get(get_enrollment))
        .merge(admin_routes)
}
