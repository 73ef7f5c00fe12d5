//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{AppError, AppJson};
use crate::generation::calendar::schedule;
use crate::generation::generator::{generate_plan, validate_with_anchor};
use crate::generation::insights::insights;
use crate::generation::models::{CalendarEntry, GeneratedPlan, StrategyRecommendation};
use crate::generation::strategy::compose;
use crate::profile::models::{BrandProfile, BrandProfileInput};
use crate::profile::validation::validate_profile;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub profile: BrandProfileInput,
    /// First calendar day. Defaults to today in the configured offset.
    pub anchor_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarResponse {
    pub anchor_date: NaiveDate,
    pub entries: Vec<CalendarEntry>,
}

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub insights: Vec<String>,
}

fn validated(request: &PlanRequest) -> Result<BrandProfile, AppError> {
    Ok(validate_profile(&request.profile)?)
}

fn anchor_for(state: &AppState, request: &PlanRequest) -> NaiveDate {
    request.anchor_date.unwrap_or_else(|| state.clock.today())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/plan
///
/// Full pipeline: validate → strategy + calendar + insights.
pub async fn handle_plan(
    State(state): State<AppState>,
    AppJson(request): AppJson<PlanRequest>,
) -> Result<Json<GeneratedPlan>, AppError> {
    let anchor = anchor_for(&state, &request);
    Ok(Json(generate_plan(&request.profile, anchor)?))
}

/// POST /api/v1/plan/strategy
pub async fn handle_strategy(
    AppJson(request): AppJson<PlanRequest>,
) -> Result<Json<StrategyRecommendation>, AppError> {
    let profile = validated(&request)?;
    info!("Composing strategy for '{}'", profile.brand_name());
    Ok(Json(compose(&profile)))
}

/// POST /api/v1/plan/calendar
pub async fn handle_calendar(
    State(state): State<AppState>,
    AppJson(request): AppJson<PlanRequest>,
) -> Result<Json<CalendarResponse>, AppError> {
    let anchor_date = anchor_for(&state, &request);
    let profile = validate_with_anchor(&request.profile, anchor_date)?;
    info!("Scheduling calendar for '{}' from {anchor_date}", profile.brand_name());
    Ok(Json(CalendarResponse {
        anchor_date,
        entries: schedule(&profile, anchor_date),
    }))
}

/// POST /api/v1/plan/insights
pub async fn handle_insights(
    AppJson(request): AppJson<PlanRequest>,
) -> Result<Json<InsightsResponse>, AppError> {
    let profile = validated(&request)?;
    Ok(Json(InsightsResponse {
        insights: insights(&profile),
    }))
}
