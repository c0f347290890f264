pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn method_not_allowed() -> Result<(), AppError> {
    Err(AppError::MethodNotAllowed)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/analyze",
            post(handlers::handle_analyze).fallback(method_not_allowed),
        )
        .with_state(state)
}
