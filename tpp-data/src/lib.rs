//! Data processing for the trafficking prevention dashboard.
//!
//! This crate owns the bundled static dataset and turns it, or files
//! uploaded by the user, into the figures and series the dashboard shows.

pub mod dataset;
pub mod ingest;
pub mod metrics;
pub mod report;
pub mod series;
