//! Upload ingestion: turn user supplied JSON documents into analysis results.
//!
//! A batch is parsed concurrently, one blocking task per document, and is
//! all-or-nothing: the first failing document fails the batch and no
//! partial results are returned. [`analyze_uploads_detailed`] offers the
//! per-document outcomes instead for callers that want to report every
//! failure.
//!
//! # Document format
//!
//! ```text
//! { "year": 2023,
//!   "regions": [ { "incidents": 412, "monthlyTrends": [ {"month": "Jan", "count": 52} ] },
//!                { "incidents": 301 } ],
//!   "preventionMetrics": { "successfulInterventions": 187, "potentialVictimsSaved": 342,
//!                          "networksDisrupted": 23, "awarenessReach": 125000 } }
//! ```

use futures::future::{join_all, try_join_all};
use log::{info, warn};
use std::path::{Path, PathBuf};
use tpp_core::{
    error::{Result, TppError},
    upload::{UploadDocument, UploadedAnalysisResult},
};

/// A file selected for analysis: a display name plus its raw bytes.
#[derive(Debug, Clone)]
pub struct Upload {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Upload {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Parse one document and map it into its normalized summary.
pub fn parse_upload(name: &str, bytes: &[u8]) -> Result<UploadedAnalysisResult> {
    let text = std::str::from_utf8(bytes).map_err(|e| TppError::malformed(name, e))?;
    let document: UploadDocument =
        serde_json::from_str(text).map_err(|e| TppError::malformed(name, e))?;

    let first_region = document
        .regions
        .first()
        .ok_or_else(|| TppError::malformed(name, "`regions` must not be empty"))?;
    let trends = first_region.monthly_trends.clone().unwrap_or_default();
    let total_incidents = document
        .regions
        .iter()
        .try_fold(0u64, |acc, r| acc.checked_add(r.incidents))
        .ok_or_else(|| TppError::malformed(name, "total incidents overflow"))?;

    Ok(UploadedAnalysisResult {
        year: document.year,
        total_incidents,
        prevention_metrics: document.prevention_metrics,
        trends,
    })
}

async fn parse_in_background(upload: Upload) -> Result<UploadedAnalysisResult> {
    let name = upload.name.clone();
    tokio::task::spawn_blocking(move || parse_upload(&upload.name, &upload.bytes))
        .await
        .map_err(|e| TppError::unreadable(name, e))?
}

/// Analyze a batch of uploads concurrently.
///
/// Results are returned in input order. If any document fails, the whole
/// batch fails with that document's error.
pub async fn analyze_uploads(uploads: Vec<Upload>) -> Result<Vec<UploadedAnalysisResult>> {
    let count = uploads.len();
    let results = try_join_all(uploads.into_iter().map(parse_in_background)).await?;
    info!("Analyzed {} uploaded file(s)", count);
    Ok(results)
}

/// Analyze a batch of uploads concurrently, keeping every document's outcome.
pub async fn analyze_uploads_detailed(
    uploads: Vec<Upload>,
) -> Vec<Result<UploadedAnalysisResult>> {
    join_all(uploads.into_iter().map(parse_in_background)).await
}

async fn read_upload(path: PathBuf) -> Result<Upload> {
    let name = path.display().to_string();
    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        warn!("{} does not have a .json extension; validating contents anyway", name);
    }
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| TppError::unreadable(name.clone(), e))?;
    Ok(Upload { name, bytes })
}

/// Read and analyze files from disk as one all-or-nothing batch.
///
/// Each file is read and parsed independently of the others; a file that
/// cannot be read fails the batch with `UnreadableFile`.
pub async fn analyze_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<UploadedAnalysisResult>> {
    let results = try_join_all(paths.iter().map(|p| {
        let path = p.as_ref().to_path_buf();
        async move { parse_in_background(read_upload(path).await?).await }
    }))
    .await?;
    info!("Analyzed {} file(s) from disk", results.len());
    Ok(results)
}

/// Read and analyze files from disk, keeping every file's outcome.
pub async fn analyze_paths_detailed<P: AsRef<Path>>(
    paths: &[P],
) -> Vec<Result<UploadedAnalysisResult>> {
    join_all(paths.iter().map(|p| {
        let path = p.as_ref().to_path_buf();
        async move { parse_in_background(read_upload(path).await?).await }
    }))
    .await
}
