use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and the date the
/// calendar would currently anchor on.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "planner-api",
        "today": state.clock.today(),
        "utcOffsetMinutes": state.config.utc_offset_minutes
    }))
}
