pub mod handler;

pub use handler::GetVacancyHandler;
