pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::features::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resumes/parse", post(handlers::handle_parse_resume))
        .route(
            "/api/v1/features/classify",
            post(handlers::handle_classify_text),
        )
        .route("/api/v1/features/review", post(handlers::handle_review))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
