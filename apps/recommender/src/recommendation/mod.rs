// Recommendation pipeline: score the candidate pool against a vacancy's
// weighted skill set, keep the top slice, attach per-skill breakdowns.
// Pure computation lives in scoring/top_k; handler owns the reads.

pub mod handler;
pub mod scoring;
pub mod top_k;

// Re-export the public API consumed by the API layer.
pub use handler::{GetRecommendationsHandler, RecommendationResult, ScoredCandidate};
pub use scoring::score_candidate;
pub use top_k::select_top_k;
