use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/recruiters", get(handlers::directory::list_recruiters))
        .route("/api/candidates", get(handlers::directory::list_candidates))
        .route(
            "/api/candidates/:id/interviews",
            get(handlers::directory::candidate_interviews),
        )
}
