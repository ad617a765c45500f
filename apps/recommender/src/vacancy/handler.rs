use std::sync::Arc;

use uuid::Uuid;

use crate::errors::AppError;
use crate::models::vacancy::DetailedVacancy;
use crate::readers::VacancyReader;

/// Query handler: vacancy detail with skills, schedules and formats.
pub struct GetVacancyHandler {
    reader: Arc<dyn VacancyReader>,
}

impl GetVacancyHandler {
    pub fn new(reader: Arc<dyn VacancyReader>) -> Self {
        Self { reader }
    }

    pub async fn execute(&self, vacancy_id: Uuid) -> Result<DetailedVacancy, AppError> {
        self.reader.get_vacancy_by_id(vacancy_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cv::CandidateProfile;
    use crate::models::vacancy::{Skill, SkillWeight};
    use async_trait::async_trait;
    use chrono::Utc;

    struct StubReader {
        vacancy: Option<DetailedVacancy>,
    }

    #[async_trait]
    impl VacancyReader for StubReader {
        async fn get_vacancy_by_id(&self, vacancy_id: Uuid) -> Result<DetailedVacancy, AppError> {
            self.vacancy
                .clone()
                .ok_or(AppError::VacancyNotFound(vacancy_id))
        }

        async fn get_weights(&self, _skill_ids: &[Uuid]) -> Result<Vec<SkillWeight>, AppError> {
            Ok(vec![])
        }

        async fn get_cvs(
            &self,
            _include_skills: &[Uuid],
        ) -> Result<Vec<CandidateProfile>, AppError> {
            Ok(vec![])
        }
    }

    fn make_vacancy() -> DetailedVacancy {
        DetailedVacancy {
            id: Uuid::new_v4(),
            title: "Data Engineer".to_string(),
            description: Some("Pipelines and warehousing".to_string()),
            salary_from: None,
            salary_to: None,
            skills: vec![Skill {
                id: Uuid::new_v4(),
                name: "SQL".to_string(),
            }],
            schedules: vec!["full_time".to_string()],
            employment_formats: vec!["hybrid".to_string()],
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_returns_vacancy_detail() {
        let vacancy = make_vacancy();
        let h = GetVacancyHandler::new(Arc::new(StubReader {
            vacancy: Some(vacancy.clone()),
        }));
        let found = h.execute(vacancy.id).await.unwrap();
        assert_eq!(found.id, vacancy.id);
        assert_eq!(found.skills.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_vacancy_is_not_found() {
        let h = GetVacancyHandler::new(Arc::new(StubReader { vacancy: None }));
        let id = Uuid::new_v4();
        match h.execute(id).await {
            Err(AppError::VacancyNotFound(missing)) => assert_eq!(missing, id),
            other => panic!("Expected VacancyNotFound, got {other:?}"),
        }
    }
}
