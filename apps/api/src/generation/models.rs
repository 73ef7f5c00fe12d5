//! Output records of the three generators.
#![allow(dead_code)]

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::profile::vocabulary::{ContentFormat, GoalId, Pillar};

// ────────────────────────────────────────────────────────────────────────────
// Ordered mapping
// ────────────────────────────────────────────────────────────────────────────

/// Insertion-ordered mapping. Serializes as a JSON object whose keys appear in
/// insertion order, so clients render pillars and goals in the order the user
/// entered them.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<K, V>(Vec<(K, V)>);

impl<K: PartialEq, V> OrderedMap<K, V> {
    pub fn get(&self, key: &K) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}

impl<K, V> OrderedMap<K, V> {
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.0.iter().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.0.iter().map(|(k, v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        OrderedMap(iter.into_iter().collect())
    }
}

impl<K: Serialize, V: Serialize> Serialize for OrderedMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Strategy
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyRecommendation {
    pub positioning: String,
    pub audience_insights: Vec<String>,
    pub tone_guidelines: String,
    /// Exactly the profile's pillars, in input order, three ideas each.
    pub pillar_suggestions: OrderedMap<Pillar, Vec<String>>,
    pub campaign_ideas: Vec<String>,
    /// Exactly the selected goals, in input order.
    pub goals_plan: OrderedMap<GoalId, Vec<String>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Calendar
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    pub date: NaiveDate,
    pub day_index: usize,
    pub weekday: &'static str,
    pub pillar: Pillar,
    pub theme: String,
    pub hook: String,
    pub cta: String,
    pub hashtags: Vec<String>,
    pub format: ContentFormat,
}

// ────────────────────────────────────────────────────────────────────────────
// Full plan
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlan {
    pub anchor_date: NaiveDate,
    pub strategy: StrategyRecommendation,
    pub calendar: Vec<CalendarEntry>,
    pub insights: Vec<String>,
}
