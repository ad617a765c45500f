pub mod cv;
pub mod vacancy;
