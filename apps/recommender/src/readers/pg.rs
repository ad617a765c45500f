use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::cv::{Author, CandidateProfile};
use crate::models::vacancy::{DetailedVacancy, Skill, SkillWeight};
use crate::readers::VacancyReader;

/// PostgreSQL-backed `VacancyReader`.
///
/// Candidate filtering by skill happens here, in SQL, so the scoring
/// pipeline never sees CVs with no overlap with the vacancy.
pub struct PgVacancyReader {
    pool: PgPool,
}

impl PgVacancyReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_skills(&self, vacancy_id: Uuid) -> Result<Vec<Skill>, AppError> {
        let skills = sqlx::query_as::<_, Skill>(
            r#"
            SELECT s.id, s.name
            FROM skills s
            JOIN vacancy_skills vs ON vs.skill_id = s.id
            WHERE vs.vacancy_id = $1
            ORDER BY s.name
            "#,
        )
        .bind(vacancy_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(skills)
    }

    async fn fetch_schedules(&self, vacancy_id: Uuid) -> Result<Vec<String>, AppError> {
        let schedules = sqlx::query_scalar(
            "SELECT name FROM vacancy_schedules WHERE vacancy_id = $1 ORDER BY name",
        )
        .bind(vacancy_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(schedules)
    }

    async fn fetch_employment_formats(&self, vacancy_id: Uuid) -> Result<Vec<String>, AppError> {
        let formats = sqlx::query_scalar(
            "SELECT name FROM vacancy_employment_formats WHERE vacancy_id = $1 ORDER BY name",
        )
        .bind(vacancy_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(formats)
    }
}

#[derive(FromRow)]
struct VacancyRow {
    id: Uuid,
    title: String,
    description: Option<String>,
    salary_from: Option<i64>,
    salary_to: Option<i64>,
    created_at: DateTime<Utc>,
}

#[derive(FromRow)]
struct CvRow {
    id: Uuid,
    title: String,
    is_visible: bool,
    salary_from: Option<i64>,
    salary_to: Option<i64>,
    about_me: Option<String>,
    cv_file: Option<String>,
    author_name: String,
    author_email: Option<String>,
    primary_skills: Vec<String>,
    additional_skills: Option<Vec<String>>,
}

impl From<CvRow> for CandidateProfile {
    fn from(row: CvRow) -> Self {
        CandidateProfile {
            id: row.id,
            title: row.title,
            is_visible: row.is_visible,
            salary_from: row.salary_from,
            salary_to: row.salary_to,
            primary_skills: row.primary_skills,
            additional_skills: row.additional_skills,
            author: Author {
                name: row.author_name,
                email: row.author_email,
            },
            about_me: row.about_me,
            cv_file: row.cv_file,
        }
    }
}

#[async_trait]
impl VacancyReader for PgVacancyReader {
    async fn get_vacancy_by_id(&self, vacancy_id: Uuid) -> Result<DetailedVacancy, AppError> {
        let row: Option<VacancyRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, salary_from, salary_to, created_at
            FROM vacancies
            WHERE id = $1
            "#,
        )
        .bind(vacancy_id)
        .fetch_optional(&self.pool)
        .await?;

        let row = row.ok_or(AppError::VacancyNotFound(vacancy_id))?;

        // The three collection sub-fetches only depend on the vacancy id.
        let (skills, schedules, employment_formats) = tokio::try_join!(
            self.fetch_skills(vacancy_id),
            self.fetch_schedules(vacancy_id),
            self.fetch_employment_formats(vacancy_id),
        )?;

        Ok(DetailedVacancy {
            id: row.id,
            title: row.title,
            description: row.description,
            salary_from: row.salary_from,
            salary_to: row.salary_to,
            skills,
            schedules,
            employment_formats,
            created_at: row.created_at,
        })
    }

    async fn get_weights(&self, skill_ids: &[Uuid]) -> Result<Vec<SkillWeight>, AppError> {
        if skill_ids.is_empty() {
            return Ok(Vec::new());
        }

        // A skill's weight is its relative frequency across visible
        // vacancies. GREATEST guards the empty-board case.
        let weights = sqlx::query_as::<_, SkillWeight>(
            r#"
            SELECT s.name,
                   COUNT(vs.vacancy_id)::float8
                       / GREATEST(
                             (SELECT COUNT(*) FROM vacancies WHERE is_visible = TRUE),
                             1
                         )::float8 AS weight
            FROM skills s
            LEFT JOIN vacancy_skills vs
                ON vs.skill_id = s.id
               AND vs.vacancy_id IN (SELECT id FROM vacancies WHERE is_visible = TRUE)
            WHERE s.id = ANY($1)
            GROUP BY s.id, s.name
            ORDER BY weight DESC, s.name
            "#,
        )
        .bind(skill_ids)
        .fetch_all(&self.pool)
        .await?;

        debug!(skills = weights.len(), "Fetched skill weights");
        Ok(weights)
    }

    async fn get_cvs(&self, include_skills: &[Uuid]) -> Result<Vec<CandidateProfile>, AppError> {
        if include_skills.is_empty() {
            return Ok(Vec::new());
        }

        let rows: Vec<CvRow> = sqlx::query_as(
            r#"
            SELECT c.id, c.title, c.is_visible, c.salary_from, c.salary_to,
                   c.about_me, c.cv_file,
                   u.name AS author_name, u.email AS author_email,
                   ARRAY(
                       SELECT s.name FROM skills s
                       JOIN cv_primary_skills ps ON ps.skill_id = s.id
                       WHERE ps.cv_id = c.id
                       ORDER BY s.name
                   ) AS primary_skills,
                   (
                       SELECT array_agg(s.name ORDER BY s.name) FROM skills s
                       JOIN cv_additional_skills xs ON xs.skill_id = s.id
                       WHERE xs.cv_id = c.id
                   ) AS additional_skills
            FROM cvs c
            JOIN users u ON u.id = c.user_id
            WHERE c.is_visible = TRUE
              AND EXISTS (
                  SELECT 1 FROM (
                      SELECT cv_id, skill_id FROM cv_primary_skills
                      UNION ALL
                      SELECT cv_id, skill_id FROM cv_additional_skills
                  ) cs
                  WHERE cs.cv_id = c.id AND cs.skill_id = ANY($1)
              )
            ORDER BY c.id
            "#,
        )
        .bind(include_skills)
        .fetch_all(&self.pool)
        .await?;

        debug!(candidates = rows.len(), "Fetched candidate pool");
        Ok(rows.into_iter().map(CandidateProfile::from).collect())
    }
}
