//! The match profile: keyword tables, point values and the inclusion threshold.
//!
//! Built once at startup and handed to the scorer explicitly. All terms are
//! lowercase; the scorer lowercases posting text, not the tables.

use crate::models::source::Source;

pub const KEYWORD_POINTS: u32 = 3;
pub const LOCATION_POINTS: u32 = 2;
pub const INCLUSION_THRESHOLD: u32 = 3;

const KEYWORDS: &[&str] = &[
    "aerospace",
    "uav",
    "drone",
    "unmanned",
    "air mobility",
    "robotics",
    "embedded",
    "firmware",
    "autonomy",
    "autonomous",
    "flight test",
    "guidance",
    "navigation",
    "control",
    "px4",
    "ros",
    "ros2",
    "rtos",
    "can",
    "can bus",
    "bvlos",
    "environmental",
    "climate",
    "reforestation",
    "sustainability",
    "hardware",
    "mechanical",
    "electrical",
];

const PREFERRED_LOCATIONS: &[&str] = &["montreal", "quebec", "canada", "remote", "hybrid"];

const SOURCES: &[(&str, &str)] = &[
    ("Verkada", "verkada"),
    ("Sourcegraph", "sourcegraph"),
    ("Scale AI", "scaleai"),
    ("Anduril", "andurilindustries"),
    ("Shield AI", "shieldai"),
    ("Zipline", "zipline"),
];

/// A set of phrases worth `points` once if any one of them appears.
#[derive(Debug, Clone)]
pub struct PhraseGroup {
    pub phrases: Vec<String>,
    pub points: u32,
}

impl PhraseGroup {
    pub fn new(phrases: &[&str], points: u32) -> Self {
        Self {
            phrases: to_owned(phrases),
            points,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScoringWeights {
    /// Per distinct keyword found.
    pub keyword: u32,
    /// Per distinct preferred location found.
    pub location: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            keyword: KEYWORD_POINTS,
            location: LOCATION_POINTS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchProfile {
    pub keywords: Vec<String>,
    pub preferred_locations: Vec<String>,
    pub phrase_groups: Vec<PhraseGroup>,
    pub weights: ScoringWeights,
    /// Postings scoring below this are dropped.
    pub threshold: u32,
}

impl Default for MatchProfile {
    fn default() -> Self {
        Self {
            keywords: to_owned(KEYWORDS),
            preferred_locations: to_owned(PREFERRED_LOCATIONS),
            phrase_groups: vec![
                PhraseGroup::new(&["startup", "fast-paced"], 2),
                PhraseGroup::new(&["r&d", "research", "prototype"], 2),
                PhraseGroup::new(&["climate", "sustainab", "reforest"], 3),
            ],
            weights: ScoringWeights::default(),
            threshold: INCLUSION_THRESHOLD,
        }
    }
}

/// The employers whose Greenhouse boards are polled on every request.
pub fn default_sources() -> Vec<Source> {
    SOURCES
        .iter()
        .map(|(name, token)| Source::new(*name, *token))
        .collect()
}

fn to_owned(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}
