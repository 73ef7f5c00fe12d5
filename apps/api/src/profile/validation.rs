//! Brand profile validation.
//!
//! Every field is checked independently and the first violated rule of each
//! field is reported, so a client can annotate all broken inputs at once.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::profile::models::{BrandProfile, BrandProfileInput, Goal, GoalInput};
use crate::profile::vocabulary::{GoalId, Pillar, Tone};

/// Minimum number of distinct content pillars.
pub const MIN_PILLARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationErrorKind {
    EmptyRequiredField,
    InvalidTone,
    NoGoalSelected,
    InvalidGoal,
    InsufficientPillars,
    AnchorOutOfRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub kind: ValidationErrorKind,
    pub message: String,
}

/// All field failures of one validation pass, in field order.
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("request failed validation on {} field(s)", .errors.len())]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    /// Field name → message, the shape the form uses to annotate inputs.
    pub fn fields(&self) -> BTreeMap<&'static str, &str> {
        self.errors
            .iter()
            .map(|e| (e.field, e.message.as_str()))
            .collect()
    }

    #[cfg(test)]
    pub fn kind_of(&self, field: &str) -> Option<ValidationErrorKind> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.kind)
    }
}

/// Validates and normalizes a raw profile.
pub fn validate_profile(input: &BrandProfileInput) -> Result<BrandProfile, ValidationReport> {
    let mut errors = Vec::new();

    let brand_name = required_text("brandName", "نام برند", &input.brand_name, &mut errors);
    let industry = required_text("industry", "حوزه فعالیت", &input.industry, &mut errors);
    let audience = required_text("audience", "مخاطب هدف", &input.audience, &mut errors);
    let tone = record(validate_tone(&input.tone), &mut errors);
    let goals = record(validate_goals(&input.goals), &mut errors);
    let content_pillars = record(validate_pillars(&input.content_pillars), &mut errors);

    match (brand_name, industry, audience, tone, goals, content_pillars) {
        (
            Some(brand_name),
            Some(industry),
            Some(audience),
            Some(tone),
            Some(goals),
            Some(content_pillars),
        ) => Ok(BrandProfile {
            brand_name,
            industry,
            audience,
            tone,
            goals,
            content_pillars,
            strengths: optional_text(input.strengths.as_deref()),
            weaknesses: optional_text(input.weaknesses.as_deref()),
        }),
        _ => {
            debug!("Profile rejected: {:?}", errors);
            Err(ValidationReport { errors })
        }
    }
}

fn record<T>(result: Result<T, FieldError>, errors: &mut Vec<FieldError>) -> Option<T> {
    result.map_err(|e| errors.push(e)).ok()
}

fn required_text(
    field: &'static str,
    display: &str,
    value: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError {
            field,
            kind: ValidationErrorKind::EmptyRequiredField,
            message: format!("{display} نمی\u{200c}تواند خالی باشد"),
        });
        return None;
    }
    Some(trimmed.to_string())
}

fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn validate_tone(value: &str) -> Result<Tone, FieldError> {
    Tone::parse(value).ok_or_else(|| FieldError {
        field: "tone",
        kind: ValidationErrorKind::InvalidTone,
        message: format!("لحن «{}» در فهرست لحن\u{200c}های مجاز نیست", value.trim()),
    })
}

fn validate_goals(goals: &[GoalInput]) -> Result<Vec<Goal>, FieldError> {
    let invalid = |message: String| FieldError {
        field: "goals",
        kind: ValidationErrorKind::InvalidGoal,
        message,
    };

    let mut seen = HashSet::new();
    let mut parsed = Vec::with_capacity(goals.len());
    for goal in goals {
        let id = GoalId::parse(&goal.id)
            .ok_or_else(|| invalid(format!("هدف «{}» شناخته\u{200c}شده نیست", goal.id.trim())))?;
        if !seen.insert(id) {
            return Err(invalid(format!("هدف «{}» تکراری است", id.as_str())));
        }
        let label = match goal.label.trim() {
            "" => id.default_label().to_string(),
            label => label.to_string(),
        };
        parsed.push(Goal {
            id,
            label,
            selected: goal.selected,
        });
    }

    if !parsed.iter().any(|g| g.selected) {
        return Err(FieldError {
            field: "goals",
            kind: ValidationErrorKind::NoGoalSelected,
            message: "حداقل یک هدف باید انتخاب شود".to_string(),
        });
    }
    Ok(parsed)
}

fn validate_pillars(pillars: &[String]) -> Result<Vec<Pillar>, FieldError> {
    let insufficient = |message: String| FieldError {
        field: "contentPillars",
        kind: ValidationErrorKind::InsufficientPillars,
        message,
    };

    let mut distinct: Vec<Pillar> = Vec::with_capacity(pillars.len());
    for raw in pillars {
        let pillar = Pillar::parse(raw)
            .ok_or_else(|| insufficient(format!("ستون محتوایی «{}» معتبر نیست", raw.trim())))?;
        if !distinct.contains(&pillar) {
            distinct.push(pillar);
        }
    }

    if distinct.len() < MIN_PILLARS {
        return Err(insufficient(format!(
            "حداقل {MIN_PILLARS} ستون محتوایی متفاوت لازم است"
        )));
    }
    Ok(distinct)
}
