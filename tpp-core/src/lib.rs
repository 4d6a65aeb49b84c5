pub mod error;
pub mod intervention;
pub mod metrics;
pub mod news;
pub mod observation;
pub mod predictive;
pub mod report;
pub mod upload;
