use axum::{
    Router, middleware,
    routing::{delete, get},
};

use crate::middleware::role::require_admin;
use crate::state::AppState;

use super::controller::{create_course, delete_course, get_course, get_courses, update_course};

pub fn init_courses_router(state: &AppState) -> Router<AppState> {
    let admin_routes = Router::new()
        .route("/{id}", delete(delete_course))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .route("/", get(get_courses).post(create_course))
        .route("/{id}", get(get_course).put(update_course))
        .merge(admin_routes)
}
