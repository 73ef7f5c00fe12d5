pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::generation::handlers as generation;
use crate::profile::handlers as profile;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile API
        .route("/api/v1/vocabulary", get(profile::handle_vocabulary))
        .route("/api/v1/profile/defaults", get(profile::handle_defaults))
        .route("/api/v1/profile/validate", post(profile::handle_validate))
        // Generation API
        .route("/api/v1/plan", post(generation::handle_plan))
        .route("/api/v1/plan/strategy", post(generation::handle_strategy))
        .route("/api/v1/plan/calendar", post(generation::handle_calendar))
        .route("/api/v1/plan/insights", post(generation::handle_insights))
        .fallback(not_found)
        .with_state(state)
}
