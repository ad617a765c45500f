use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// CV owner contact details surfaced with a recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub email: Option<String>,
}

/// Projection of a CV as consumed by the recommendation pipeline.
/// Built fresh from query results per request; never persisted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: Uuid,
    pub title: String,
    pub is_visible: bool,
    pub salary_from: Option<i64>,
    pub salary_to: Option<i64>,
    pub primary_skills: Vec<String>,
    /// `None` when the CV lists no additional skills (distinct from empty).
    pub additional_skills: Option<Vec<String>>,
    pub author: Author,
    pub about_me: Option<String>,
    pub cv_file: Option<String>,
}
