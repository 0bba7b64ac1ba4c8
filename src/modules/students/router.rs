use axum::{
    Router, middleware,
    routing::{delete, get},
};

use crate::middleware::role::require_admin;
use crate::state::AppState;

use super::controller::{
    create_student, delete_student, get_student, get_students, update_student,
};

pub fn init_students_router(state: &AppState) -> Router<AppState> {
    let admin_routes = Router::new()
        .route("/{id}", delete(delete_student))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .route("/", get(get_students).post(create_student))
        .route("/{id}", get(get_student).put(update_student))
        .merge(admin_routes)
}
