use thiserror::Error;
use uuid::Uuid;

/// Application-level error type shared by all query handlers.
///
/// Transport mapping (HTTP status codes) is owned by the API layer; this
/// crate only distinguishes the not-found class from infrastructure
/// failures. Empty query results are never errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Vacancy {0} not found")]
    VacancyNotFound(Uuid),

    #[error("CV {0} not found")]
    CvNotFound(Uuid),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
