//! Strategy Composer — positioning, audience insights, tone guidance,
//! pillar ideas, campaigns and per-goal action plans.
//!
//! Total over validated profiles: every branch is a lookup keyed by a closed
//! vocabulary, so there is no failure path.

use crate::generation::models::{OrderedMap, StrategyRecommendation};
use crate::generation::templates::{
    fill, generic_pillar_ideas, goal_campaign, goal_steps, positioning_template,
    tailored_pillar_ideas, tone_guidelines, AUDIENCE_INSIGHTS, AUDIENCE_VALUES_INSIGHT,
    AUDIENCE_WEAKNESS_INSIGHT, GENERIC_CAMPAIGNS, STRENGTH_FALLBACK,
};
use crate::profile::models::BrandProfile;
use crate::profile::vocabulary::{GoalId, IndustryKind, Pillar};

/// Bounds on the campaign list length.
const MIN_CAMPAIGNS: usize = 3;
const MAX_CAMPAIGNS: usize = 4;

pub fn compose(profile: &BrandProfile) -> StrategyRecommendation {
    let industry_kind = IndustryKind::classify(profile.industry());

    StrategyRecommendation {
        positioning: positioning(profile),
        audience_insights: audience_insights(profile),
        tone_guidelines: tone_guidelines(profile.tone()).to_string(),
        pillar_suggestions: profile
            .content_pillars()
            .iter()
            .map(|&pillar| (pillar, pillar_ideas(pillar, industry_kind, profile)))
            .collect(),
        campaign_ideas: campaign_ideas(profile),
        goals_plan: goals_plan(profile),
    }
}

fn positioning(profile: &BrandProfile) -> String {
    fill(
        positioning_template(profile.tone()),
        &[
            ("brand", profile.brand_name()),
            ("audience", profile.audience()),
            ("industry", profile.industry()),
            ("strength", profile.top_strength().unwrap_or(STRENGTH_FALLBACK)),
        ],
    )
}

/// Three insights; the last one counters the stated weakness when present.
fn audience_insights(profile: &BrandProfile) -> Vec<String> {
    let closing = match profile.weaknesses() {
        Some(_) => AUDIENCE_WEAKNESS_INSIGHT,
        None => AUDIENCE_VALUES_INSIGHT,
    };
    let slots = [
        ("audience", profile.audience()),
        ("industry", profile.industry()),
        ("weakness", profile.weaknesses().unwrap_or_default()),
    ];

    AUDIENCE_INSIGHTS
        .iter()
        .chain(std::iter::once(&closing))
        .map(|template| fill(template, &slots))
        .collect()
}

fn pillar_ideas(pillar: Pillar, industry_kind: IndustryKind, profile: &BrandProfile) -> Vec<String> {
    let pool = tailored_pillar_ideas(pillar, industry_kind)
        .unwrap_or_else(|| generic_pillar_ideas(pillar));
    pool.iter()
        .map(|template| {
            fill(
                template,
                &[
                    ("industry", profile.industry()),
                    ("audience", profile.audience()),
                ],
            )
        })
        .collect()
}

/// Goal-unlocked campaigns first (input order), padded from the generic pool
/// to at least three and capped at four.
fn campaign_ideas(profile: &BrandProfile) -> Vec<String> {
    let slots = [
        ("brand", profile.brand_name()),
        ("industry", profile.industry()),
        ("audience", profile.audience()),
    ];

    let mut templates: Vec<&str> = profile
        .selected_goals()
        .into_iter()
        .map(goal_campaign)
        .collect();
    for generic in GENERIC_CAMPAIGNS {
        if templates.len() >= MIN_CAMPAIGNS {
            break;
        }
        templates.push(generic);
    }
    templates.truncate(MAX_CAMPAIGNS);

    templates
        .into_iter()
        .map(|template| fill(template, &slots))
        .collect()
}

fn goals_plan(profile: &BrandProfile) -> OrderedMap<GoalId, Vec<String>> {
    // Profiles always carry at least two pillars.
    let lead_pillar = profile
        .content_pillars()
        .first()
        .map(|p| p.label())
        .unwrap_or_default();
    let slots = [
        ("industry", profile.industry()),
        ("audience", profile.audience()),
        ("pillar", lead_pillar),
    ];

    profile
        .selected_goals()
        .into_iter()
        .map(|goal| {
            let steps = goal_steps(goal)
                .iter()
                .map(|template| fill(template, &slots))
                .collect();
            (goal, steps)
        })
        .collect()
}
