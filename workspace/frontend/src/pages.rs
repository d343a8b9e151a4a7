pub mod dashboard;
pub mod donate;
pub mod history;
