use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A named skill referenced by vacancies and CVs.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
}

/// Importance of a named skill in the context of a vacancy's requirements.
/// Produced by the data layer; consumed read-only by scoring.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillWeight {
    pub name: String,
    pub weight: f64,
}

/// A vacancy with its required skills and schedule/format metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedVacancy {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub salary_from: Option<i64>,
    pub salary_to: Option<i64>,
    pub skills: Vec<Skill>,
    pub schedules: Vec<String>,
    pub employment_formats: Vec<String>,
    pub created_at: DateTime<Utc>,
}
