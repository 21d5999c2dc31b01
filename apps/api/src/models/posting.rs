use serde::{Deserialize, Serialize};

/// A job listing normalized from an upstream board feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Posting {
    pub title: String,
    pub location: String,
    pub url: String,
    pub description: String,
    /// Display name of the source the posting came from.
    pub company_slug: String,
    /// Feed format tag, e.g. "greenhouse".
    pub board: String,
}

/// A posting paired with its relevance score. Serialized flat, with `score`
/// alongside the posting fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredPosting {
    #[serde(flatten)]
    pub posting: Posting,
    pub score: u32,
}
