use axum::{Router, middleware};

use crate::logging::logging_middleware;
use crate::modules::auth::router::init_auth_router;
use crate::modules::courses::router::init_courses_router;
use crate::modules::enrollments::router::init_enrollments_router;
use crate::modules::professors::router::init_professors_router;
use crate::modules::students::router::init_students_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .nest(
            "/api",
            Router::new()
                .nest("/auth", init_auth_router())
                .nest("/students", init_students_router(&state))
                .nest("/professors", init_professors_router(&state))
                .nest("/courses", init_courses_router(&state))
                .nest("/enrollments", init_enrollments_router(&state)),
        )
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
}
