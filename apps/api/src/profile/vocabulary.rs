//! Closed vocabularies shared by validation and every generator.
//!
//! Each template pool downstream is a `match` over these enums, so adding a
//! variant fails to compile until every pool covers it.

use serde::{Deserialize, Serialize};

/// Zero-width non-joiner. Persian labels use it inside compound words and
/// clients frequently drop or double it.
pub const ZWNJ: char = '\u{200c}';

/// Compares a user-supplied value with a Persian label, ignoring ZWNJ
/// placement and surrounding whitespace.
fn label_matches(label: &str, value: &str) -> bool {
    let strip = |s: &str| -> String { s.trim().chars().filter(|c| *c != ZWNJ).collect() };
    strip(label) == strip(value)
}

// ────────────────────────────────────────────────────────────────────────────
// Tone
// ────────────────────────────────────────────────────────────────────────────

/// Communication tone of the brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    #[serde(rename = "حرفه\u{200c}ای")]
    Professional,
    #[serde(rename = "صمیمی")]
    Friendly,
    #[serde(rename = "رسمی")]
    Formal,
    #[serde(rename = "الهام\u{200c}بخش")]
    Inspirational,
}

impl Tone {
    pub const ALL: [Tone; 4] = [
        Tone::Professional,
        Tone::Friendly,
        Tone::Formal,
        Tone::Inspirational,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tone::Professional => "حرفه\u{200c}ای",
            Tone::Friendly => "صمیمی",
            Tone::Formal => "رسمی",
            Tone::Inspirational => "الهام\u{200c}بخش",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Friendly => "friendly",
            Tone::Formal => "formal",
            Tone::Inspirational => "inspirational",
        }
    }

    /// Accepts either the Persian label or the ASCII slug.
    pub fn parse(value: &str) -> Option<Tone> {
        Tone::ALL.into_iter().find(|tone| {
            label_matches(tone.label(), value) || tone.slug().eq_ignore_ascii_case(value.trim())
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Content pillars
// ────────────────────────────────────────────────────────────────────────────

/// A named content category used to bucket ideas and calendar slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pillar {
    #[serde(rename = "آموزشی")]
    Educational,
    #[serde(rename = "الهام\u{200c}بخش")]
    Inspirational,
    #[serde(rename = "پشت صحنه")]
    BehindTheScenes,
    #[serde(rename = "اثبات اجتماعی")]
    SocialProof,
    #[serde(rename = "راهبردی")]
    Strategic,
}

impl Pillar {
    pub const ALL: [Pillar; 5] = [
        Pillar::Educational,
        Pillar::Inspirational,
        Pillar::BehindTheScenes,
        Pillar::SocialProof,
        Pillar::Strategic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Pillar::Educational => "آموزشی",
            Pillar::Inspirational => "الهام\u{200c}بخش",
            Pillar::BehindTheScenes => "پشت صحنه",
            Pillar::SocialProof => "اثبات اجتماعی",
            Pillar::Strategic => "راهبردی",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Pillar::Educational => "educational",
            Pillar::Inspirational => "inspirational",
            Pillar::BehindTheScenes => "behind_the_scenes",
            Pillar::SocialProof => "social_proof",
            Pillar::Strategic => "strategic",
        }
    }

    /// Accepts either the Persian label or the ASCII slug.
    pub fn parse(value: &str) -> Option<Pillar> {
        Pillar::ALL.into_iter().find(|pillar| {
            label_matches(pillar.label(), value)
                || pillar.slug().eq_ignore_ascii_case(value.trim())
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Goals
// ────────────────────────────────────────────────────────────────────────────

/// Strategic objective a brand can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalId {
    BrandAwareness,
    LeadGeneration,
    Sales,
    Community,
}

impl GoalId {
    pub const ALL: [GoalId; 4] = [
        GoalId::BrandAwareness,
        GoalId::LeadGeneration,
        GoalId::Sales,
        GoalId::Community,
    ];

    /// Wire identifier, e.g. `brandAwareness`.
    pub fn as_str(self) -> &'static str {
        match self {
            GoalId::BrandAwareness => "brandAwareness",
            GoalId::LeadGeneration => "leadGeneration",
            GoalId::Sales => "sales",
            GoalId::Community => "community",
        }
    }

    pub fn default_label(self) -> &'static str {
        match self {
            GoalId::BrandAwareness => "آگاهی از برند",
            GoalId::LeadGeneration => "لیدگیری",
            GoalId::Sales => "افزایش فروش",
            GoalId::Community => "ساخت جامعه وفادار",
        }
    }

    pub fn parse(value: &str) -> Option<GoalId> {
        GoalId::ALL
            .into_iter()
            .find(|goal| goal.as_str() == value.trim())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Calendar formats
// ────────────────────────────────────────────────────────────────────────────

/// Publishing format of a calendar slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentFormat {
    #[serde(rename = "ریلز")]
    Reel,
    #[serde(rename = "کاروسل")]
    Carousel,
    #[serde(rename = "استوری")]
    Story,
    #[serde(rename = "پست آموزشی")]
    EducationalPost,
    #[serde(rename = "لایو")]
    Live,
}

impl ContentFormat {
    pub const ALL: [ContentFormat; 5] = [
        ContentFormat::Reel,
        ContentFormat::Carousel,
        ContentFormat::Story,
        ContentFormat::EducationalPost,
        ContentFormat::Live,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContentFormat::Reel => "ریلز",
            ContentFormat::Carousel => "کاروسل",
            ContentFormat::Story => "استوری",
            ContentFormat::EducationalPost => "پست آموزشی",
            ContentFormat::Live => "لایو",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Industry classification
// ────────────────────────────────────────────────────────────────────────────

/// Coarse industry bucket derived from the free-text industry field.
/// Only used to pick tailored idea pools; never part of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndustryKind {
    Fitness,
    Fashion,
    Food,
    Beauty,
    Technology,
    Education,
    General,
}

/// Checked in order; the first bucket with a matching keyword wins.
const INDUSTRY_KEYWORDS: &[(IndustryKind, &[&str])] = &[
    (
        IndustryKind::Fitness,
        &["fitness", "gym", "sport", "workout", "ورزش", "فیتنس", "باشگاه", "تناسب اندام"],
    ),
    (
        IndustryKind::Fashion,
        &["fashion", "apparel", "clothing", "پوشاک", "لباس", "فشن"],
    ),
    (
        IndustryKind::Food,
        &["food", "restaurant", "cafe", "coffee", "bakery", "غذا", "رستوران", "کافه", "قهوه", "شیرینی"],
    ),
    (
        IndustryKind::Beauty,
        &["beauty", "cosmetic", "skincare", "salon", "زیبایی", "آرایش", "پوست", "سالن"],
    ),
    (
        IndustryKind::Technology,
        &["tech", "software", "saas", "startup", "فناوری", "تکنولوژی", "نرم\u{200c}افزار", "نرم افزار"],
    ),
    (
        IndustryKind::Education,
        &["education", "course", "academy", "school", "tutor", "آموزش", "آکادمی", "مدرسه", "دوره"],
    ),
];

impl IndustryKind {
    /// Latin keywords must start a word ("sportswear" matches, "transport"
    /// does not). Persian keywords match anywhere, since Persian attaches
    /// suffixes and plural markers to the stem.
    pub fn classify(industry: &str) -> IndustryKind {
        let lowered = industry.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();
        let matches = |kw: &&str| {
            if kw.is_ascii() {
                words.iter().any(|w| w.starts_with(*kw))
            } else {
                lowered.contains(*kw)
            }
        };

        INDUSTRY_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(matches))
            .map(|(kind, _)| *kind)
            .unwrap_or(IndustryKind::General)
    }
}
