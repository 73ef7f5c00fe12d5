//! Axum route handlers for the Profile API.

use axum::Json;
use serde::Serialize;

use crate::errors::{AppError, AppJson};
use crate::profile::models::{BrandProfile, BrandProfileInput};
use crate::profile::validation::{validate_profile, MIN_PILLARS};
use crate::profile::vocabulary::{ContentFormat, GoalId, Pillar, Tone};

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct VocabularyItem {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyResponse {
    pub tones: Vec<VocabularyItem>,
    pub pillars: Vec<VocabularyItem>,
    pub goals: Vec<VocabularyItem>,
    pub formats: Vec<&'static str>,
    pub min_pillars: usize,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub profile: BrandProfile,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/vocabulary
///
/// The closed value sets the form may submit.
pub async fn handle_vocabulary() -> Json<VocabularyResponse> {
    Json(VocabularyResponse {
        tones: Tone::ALL
            .into_iter()
            .map(|t| VocabularyItem {
                id: t.slug(),
                label: t.label(),
            })
            .collect(),
        pillars: Pillar::ALL
            .into_iter()
            .map(|p| VocabularyItem {
                id: p.slug(),
                label: p.label(),
            })
            .collect(),
        goals: GoalId::ALL
            .into_iter()
            .map(|g| VocabularyItem {
                id: g.as_str(),
                label: g.default_label(),
            })
            .collect(),
        formats: ContentFormat::ALL.into_iter().map(ContentFormat::label).collect(),
        min_pillars: MIN_PILLARS,
    })
}

/// GET /api/v1/profile/defaults
///
/// Initial form state for a new brand.
pub async fn handle_defaults() -> Json<BrandProfileInput> {
    Json(BrandProfileInput::form_defaults())
}

/// POST /api/v1/profile/validate
///
/// Returns the normalized profile, or 422 with per-field messages.
pub async fn handle_validate(
    AppJson(input): AppJson<BrandProfileInput>,
) -> Result<Json<ValidateResponse>, AppError> {
    let profile = validate_profile(&input)?;
    Ok(Json(ValidateResponse {
        valid: true,
        profile,
    }))
}
