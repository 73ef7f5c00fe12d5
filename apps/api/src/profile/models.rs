#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use crate::profile::vocabulary::{GoalId, Pillar, Tone};

// ────────────────────────────────────────────────────────────────────────────
// Raw input (as collected by the form)
// ────────────────────────────────────────────────────────────────────────────

/// A goal toggle as submitted by the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoalInput {
    pub id: String,
    pub label: String,
    pub selected: bool,
}

/// Unvalidated brand profile. Every field is optional on the wire so that a
/// half-filled form still deserializes and gets a per-field report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandProfileInput {
    pub brand_name: String,
    pub industry: String,
    pub audience: String,
    pub tone: String,
    pub goals: Vec<GoalInput>,
    pub content_pillars: Vec<String>,
    pub strengths: Option<String>,
    pub weaknesses: Option<String>,
}

impl BrandProfileInput {
    /// Initial form state: professional tone, only brand awareness selected,
    /// educational + inspirational pillars.
    pub fn form_defaults() -> Self {
        Self {
            brand_name: String::new(),
            industry: String::new(),
            audience: String::new(),
            tone: Tone::Professional.label().to_string(),
            goals: GoalId::ALL
                .into_iter()
                .map(|id| GoalInput {
                    id: id.as_str().to_string(),
                    label: id.default_label().to_string(),
                    selected: id == GoalId::BrandAwareness,
                })
                .collect(),
            content_pillars: vec![
                Pillar::Educational.label().to_string(),
                Pillar::Inspirational.label().to_string(),
            ],
            strengths: Some(String::new()),
            weaknesses: Some(String::new()),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Validated profile
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Goal {
    pub id: GoalId,
    pub label: String,
    pub selected: bool,
}

/// A brand profile that passed validation.
///
/// Fields are only writable from the `profile` module, so holding a value of
/// this type means: text fields are trimmed and non-empty, at least one goal is
/// selected, goal ids are unique, and there are two or more distinct pillars.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandProfile {
    pub(super) brand_name: String,
    pub(super) industry: String,
    pub(super) audience: String,
    pub(super) tone: Tone,
    pub(super) goals: Vec<Goal>,
    pub(super) content_pillars: Vec<Pillar>,
    pub(super) strengths: Option<String>,
    pub(super) weaknesses: Option<String>,
}

/// Separators accepted between strengths in the free-text field.
const STRENGTH_SEPARATORS: &[char] = &['\n', ',', '،', ';', '؛'];

impl BrandProfile {
    pub fn brand_name(&self) -> &str {
        &self.brand_name
    }

    pub fn industry(&self) -> &str {
        &self.industry
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Selected goal ids in input order.
    pub fn selected_goals(&self) -> Vec<GoalId> {
        self.goals
            .iter()
            .filter(|g| g.selected)
            .map(|g| g.id)
            .collect()
    }

    pub fn content_pillars(&self) -> &[Pillar] {
        &self.content_pillars
    }

    pub fn strengths(&self) -> Option<&str> {
        self.strengths.as_deref()
    }

    pub fn weaknesses(&self) -> Option<&str> {
        self.weaknesses.as_deref()
    }

    /// First listed strength, if any.
    pub fn top_strength(&self) -> Option<&str> {
        self.strengths
            .as_deref()?
            .split(STRENGTH_SEPARATORS)
            .map(str::trim)
            .find(|s| !s.is_empty())
    }
}
