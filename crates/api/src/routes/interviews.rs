use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/interviews",
            get(handlers::interviews::list_interviews).post(handlers::interviews::create_interview),
        )
        .route(
            "/api/interviews/:id",
            get(handlers::interviews::get_interview).delete(handlers::interviews::delete_interview),
        )
        .route(
            "/api/interviews/:id/book",
            post(handlers::interviews::book_slot),
        )
        .route(
            "/api/interviews/:id/status",
            put(handlers::interviews::update_interview_status),
        )
}
