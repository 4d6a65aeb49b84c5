//! Simulated report submission.
//!
//! There is no transport behind this; a submission waits for a fixed
//! acknowledgment delay and returns a receipt.

use chrono::Local;
use log::info;
use std::time::Duration;
use tpp_core::{
    error::{Result, TppError},
    report::{ReportDraft, ReportReceipt, ReportStatus},
};

/// Acknowledgment delay used by the dashboard.
pub const DEFAULT_ACK_DELAY: Duration = Duration::from_millis(1500);

/// Validate a draft, wait for the simulated acknowledgment and return a receipt.
pub async fn submit_report(draft: ReportDraft, ack_delay: Duration) -> Result<ReportReceipt> {
    let description = draft.description.trim();
    if description.is_empty() {
        return Err(TppError::EmptyDescription);
    }

    info!(
        "Submitting {} report with {} priority",
        draft.report_type, draft.priority
    );
    tokio::time::sleep(ack_delay).await;

    let timestamp = Local::now();
    let receipt = ReportReceipt {
        id: format!("RPT-{}", timestamp.format("%Y%m%d%H%M%S%3f")),
        report_type: draft.report_type,
        priority: draft.priority,
        description: description.to_string(),
        status: ReportStatus::Pending,
        timestamp,
    };
    info!("Report {} acknowledged", receipt.id);
    Ok(receipt)
}
