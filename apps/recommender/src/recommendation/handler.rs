use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::cv::CandidateProfile;
use crate::models::vacancy::SkillWeight;
use crate::readers::VacancyReader;
use crate::recommendation::scoring::score_candidate;
use crate::recommendation::top_k::select_top_k;

/// A recommended CV with its score and per-skill weight breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub profile: CandidateProfile,
    pub score: f64,
    /// Every primary skill paired with its weight. Unweighted skills
    /// carry an explicit 0.0 here, unlike scoring, which excludes them.
    pub skill_breakdown: Vec<SkillWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_skill_breakdown: Option<Vec<SkillWeight>>,
}

/// Ranked recommendations for a vacancy, descending by score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub weights: Vec<SkillWeight>,
    pub recommendations: Vec<ScoredCandidate>,
}

/// Query handler: ranks the CVs matching a vacancy's required skills.
///
/// Read-only. Any collaborator failure aborts the pipeline; there are no
/// partial results and no retries at this level.
pub struct GetRecommendationsHandler {
    reader: Arc<dyn VacancyReader>,
    limit: usize,
}

impl GetRecommendationsHandler {
    /// `limit` comes from `Config::recommendation_limit` (default 10).
    pub fn new(reader: Arc<dyn VacancyReader>, limit: usize) -> Self {
        Self { reader, limit }
    }

    pub async fn execute(&self, vacancy_id: Uuid) -> Result<RecommendationResult, AppError> {
        let vacancy = self.reader.get_vacancy_by_id(vacancy_id).await?;
        let skill_ids: Vec<Uuid> = vacancy.skills.iter().map(|s| s.id).collect();

        // Weights and the candidate pool both depend only on the skill
        // set, so the two reads fan out together.
        let (weights, candidates) = tokio::try_join!(
            self.reader.get_weights(&skill_ids),
            self.reader.get_cvs(&skill_ids),
        )?;

        debug!(
            vacancy_id = %vacancy_id,
            pool = candidates.len(),
            "Scoring candidate pool"
        );

        let weight_map: HashMap<String, f64> = weights
            .iter()
            .map(|w| (w.name.clone(), w.weight))
            .collect();

        let top = select_top_k(candidates, self.limit, |cv| score_candidate(cv, &weight_map));

        let recommendations = top
            .into_iter()
            .map(|profile| {
                let score = score_candidate(&profile, &weight_map);
                let skill_breakdown = breakdown(&profile.primary_skills, &weight_map);
                let additional_skill_breakdown = profile
                    .additional_skills
                    .as_ref()
                    .map(|skills| breakdown(skills, &weight_map));
                ScoredCandidate {
                    profile,
                    score,
                    skill_breakdown,
                    additional_skill_breakdown,
                }
            })
            .collect();

        Ok(RecommendationResult {
            weights,
            recommendations,
        })
    }
}

/// Pairs each skill name with its weight, defaulting to 0.0 for skills
/// the weight map does not cover.
fn breakdown(skills: &[String], weights: &HashMap<String, f64>) -> Vec<SkillWeight> {
    skills
        .iter()
        .map(|name| SkillWeight {
            name: name.clone(),
            weight: weights.get(name).copied().unwrap_or(0.0),
        })
        .collect()
}
