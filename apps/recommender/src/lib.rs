// Recommendation core of the recruitment backend.
// The HTTP API layer constructs `Config`, the pool, and a `VacancyReader`
// at startup, then invokes the query handlers in `recommendation` and
// `vacancy`. Nothing in this crate owns a route or a response status.

pub mod config;
pub mod db;
pub mod errors;
pub mod logging;
pub mod models;
pub mod readers;
pub mod recommendation;
pub mod vacancy;
