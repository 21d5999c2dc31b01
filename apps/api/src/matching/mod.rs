// Matching pipeline: fetch every source, score, filter, sort.
// Fetching goes through `boards::JobBoard`; scoring reads only the `MatchProfile`.

pub mod aggregator;
pub mod handlers;
pub mod profile;
pub mod scoring;
