pub mod pg;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::cv::CandidateProfile;
use crate::models::vacancy::{DetailedVacancy, SkillWeight};

pub use pg::PgVacancyReader;

/// Read-side collaborator for the recommendation pipeline.
///
/// Handlers hold this as `Arc<dyn VacancyReader>`, so storage backends
/// can be swapped without touching handler code.
#[async_trait]
pub trait VacancyReader: Send + Sync {
    /// Fetches a vacancy with its skills, schedules and employment
    /// formats. Fails with `AppError::VacancyNotFound` when absent.
    async fn get_vacancy_by_id(&self, vacancy_id: Uuid) -> Result<DetailedVacancy, AppError>;

    /// Returns a weight per skill. Skills unknown to the backend are
    /// simply missing from the result, not an error.
    async fn get_weights(&self, skill_ids: &[Uuid]) -> Result<Vec<SkillWeight>, AppError>;

    /// Returns visible CVs holding at least one of the given skills,
    /// ordered by CV id.
    async fn get_cvs(&self, include_skills: &[Uuid]) -> Result<Vec<CandidateProfile>, AppError>;
}
