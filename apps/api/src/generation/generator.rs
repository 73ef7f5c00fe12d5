//! Plan generation — orchestrates the full pipeline.
//!
//! Flow: validate_profile + check_anchor → (compose, schedule, insights).
//! The three generators read the same validated profile and never see each
//! other's output. A rejected profile produces no partial plan.

use chrono::NaiveDate;
use tracing::info;

use crate::generation::calendar::{check_anchor, schedule};
use crate::generation::insights::insights;
use crate::generation::models::GeneratedPlan;
use crate::generation::strategy::compose;
use crate::profile::models::{BrandProfile, BrandProfileInput};
use crate::profile::validation::{validate_profile, ValidationReport};

/// Validates `input` and, if it passes, generates every output.
pub fn generate_plan(
    input: &BrandProfileInput,
    anchor: NaiveDate,
) -> Result<GeneratedPlan, ValidationReport> {
    let profile = validate_with_anchor(input, anchor)?;
    Ok(build_plan(&profile, anchor))
}

/// Validates the profile and the calendar anchor together, so one report
/// carries every broken field.
pub fn validate_with_anchor(
    input: &BrandProfileInput,
    anchor: NaiveDate,
) -> Result<BrandProfile, ValidationReport> {
    match (validate_profile(input), check_anchor(anchor)) {
        (Ok(profile), Ok(_)) => Ok(profile),
        (Ok(_), Err(anchor_error)) => Err(ValidationReport {
            errors: vec![anchor_error],
        }),
        (Err(mut report), anchor) => {
            report.errors.extend(anchor.err());
            Err(report)
        }
    }
}

/// Runs the three generators over an already-validated profile.
fn build_plan(profile: &BrandProfile, anchor: NaiveDate) -> GeneratedPlan {
    info!(
        "Generating plan for '{}' ({} pillars, {} goals, anchor {anchor})",
        profile.brand_name(),
        profile.content_pillars().len(),
        profile.selected_goals().len(),
    );

    GeneratedPlan {
        anchor_date: anchor,
        strategy: compose(profile),
        calendar: schedule(profile, anchor),
        insights: insights(profile),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::models::GoalInput;
    use crate::profile::validation::ValidationErrorKind;
    use crate::profile::vocabulary::{GoalId, Pillar};

    fn scenario_input() -> BrandProfileInput {
        BrandProfileInput {
            brand_name: "Acme".to_string(),
            industry: "Fitness".to_string(),
            audience: "Women 25-34".to_string(),
            tone: "حرفه\u{200c}ای".to_string(),
            goals: vec![
                GoalInput {
                    id: "brandAwareness".to_string(),
                    label: "آگاهی از برند".to_string(),
                    selected: true,
                },
                GoalInput {
                    id: "leadGeneration".to_string(),
                    label: "لیدگیری".to_string(),
                    selected: false,
                },
                GoalInput {
                    id: "sales".to_string(),
                    label: "افزایش فروش".to_string(),
                    selected: false,
                },
                GoalInput {
                    id: "community".to_string(),
                    label: "ساخت جامعه وفادار".to_string(),
                    selected: false,
                },
            ],
            content_pillars: vec!["آموزشی".to_string(), "الهام\u{200c}بخش".to_string()],
            strengths: None,
            weaknesses: None,
        }
    }

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_acme_scenario() {
        let plan = generate_plan(&scenario_input(), anchor()).unwrap();

        assert_eq!(plan.calendar.len(), 14);
        for entry in &plan.calendar {
            let expected = if entry.day_index % 2 == 0 {
                Pillar::Educational
            } else {
                Pillar::Inspirational
            };
            assert_eq!(entry.pillar, expected);
        }

        let goal_keys: Vec<_> = plan.strategy.goals_plan.keys().copied().collect();
        assert_eq!(goal_keys, vec![GoalId::BrandAwareness]);

        let pillar_keys: Vec<_> = plan.strategy.pillar_suggestions.keys().copied().collect();
        assert_eq!(pillar_keys, vec![Pillar::Educational, Pillar::Inspirational]);
    }

    #[test]
    fn test_acme_scenario_json_shape() {
        let plan = generate_plan(&scenario_input(), anchor()).unwrap();
        let json = serde_json::to_value(&plan).unwrap();

        assert_eq!(json["anchorDate"], "2024-06-01");
        assert_eq!(json["calendar"][0]["date"], "2024-06-01");
        assert_eq!(json["calendar"][1]["pillar"], "الهام\u{200c}بخش");
        let goals = json["strategy"]["goalsPlan"].as_object().unwrap();
        assert_eq!(goals.len(), 1);
        assert!(goals.contains_key("brandAwareness"));
        assert_eq!(json["strategy"]["pillarSuggestions"]["آموزشی"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_invalid_profile_yields_no_plan() {
        let mut input = scenario_input();
        input.content_pillars.truncate(1);
        let report = generate_plan(&input, anchor()).unwrap_err();
        assert_eq!(
            report.kind_of("contentPillars"),
            Some(ValidationErrorKind::InsufficientPillars)
        );
    }

    #[test]
    fn test_anchor_without_full_window_yields_no_plan() {
        let report = generate_plan(&scenario_input(), NaiveDate::MAX).unwrap_err();
        assert_eq!(
            report.kind_of("anchorDate"),
            Some(ValidationErrorKind::AnchorOutOfRange)
        );
    }

    #[test]
    fn test_anchor_and_profile_errors_reported_together() {
        let mut input = scenario_input();
        input.brand_name.clear();
        let report = validate_with_anchor(&input, NaiveDate::MAX).unwrap_err();
        assert_eq!(
            report.kind_of("brandName"),
            Some(ValidationErrorKind::EmptyRequiredField)
        );
        assert_eq!(
            report.kind_of("anchorDate"),
            Some(ValidationErrorKind::AnchorOutOfRange)
        );
    }

    #[test]
    fn test_generation_is_idempotent() {
        let input = scenario_input();
        assert_eq!(
            generate_plan(&input, anchor()).unwrap(),
            generate_plan(&input, anchor()).unwrap()
        );
    }
}
