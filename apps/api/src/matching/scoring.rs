//! Relevance scoring: additive substring matching against a `MatchProfile`.
//!
//! Algorithm, over the lowercased `title location description` text:
//! 1. +`weights.keyword` for each keyword contained (containment, not count)
//! 2. +`weights.location` for each preferred location contained
//! 3. +`group.points` once per phrase group with at least one phrase contained
//!
//! Scores are unbounded above and never negative.

use crate::matching::profile::MatchProfile;
use crate::models::posting::{Posting, ScoredPosting};

pub fn score_posting(posting: &Posting, profile: &MatchProfile) -> u32 {
    let text = format!(
        "{} {} {}",
        posting.title, posting.location, posting.description
    )
    .to_lowercase();

    let keyword_hits = count_contained(&text, &profile.keywords);
    let location_hits = count_contained(&text, &profile.preferred_locations);

    let phrase_points: u32 = profile
        .phrase_groups
        .iter()
        .filter(|group| group.phrases.iter().any(|p| text.contains(p.as_str())))
        .map(|group| group.points)
        .sum();

    keyword_hits * profile.weights.keyword
        + location_hits * profile.weights.location
        + phrase_points
}

/// Scores every posting, keeps those at or above the profile threshold and
/// orders them by descending score. Ties keep their input order.
pub fn rank_postings(postings: Vec<Posting>, profile: &MatchProfile) -> Vec<ScoredPosting> {
    let mut scored: Vec<ScoredPosting> = postings
        .into_iter()
        .map(|posting| {
            let score = score_posting(&posting, profile);
            ScoredPosting { posting, score }
        })
        .filter(|s| s.score >= profile.threshold)
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

fn count_contained(text: &str, terms: &[String]) -> u32 {
    terms.iter().filter(|t| text.contains(t.as_str())).count() as u32
}
