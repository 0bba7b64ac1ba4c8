use axum::{
    Router, middleware,
    routing::{delete, get},
};

use crate::middleware::role::require_admin;
use crate::state::AppState;

use super::controller::{
    create_professor, delete_professor, get_professor, get_professors, update_professor,
};

pub fn init_professors_router(state: &AppState) -> Router<AppState> {
    let admin_routes = Router::new()
        .route("/{id}", delete(delete_professor))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .route("/", get(get_professors).post(create_professor))
        .route("/{id}", get(get_professor).put(update_professor))
        .merge(admin_routes)
}
