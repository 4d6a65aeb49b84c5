use log::info;
use std::time::Duration;
use tpp_core::report::{Priority, ReportDraft, ReportType};
use tpp_data::report::submit_report;
use tpp_utils::dates::format_timestamp;

/// Submit a report through the simulated acknowledgment flow and print the receipt.
pub async fn run_report(
    report_type: ReportType,
    priority: Priority,
    description: String,
    delay_ms: u64,
) -> anyhow::Result<()> {
    let draft = ReportDraft {
        report_type,
        priority,
        description,
    };
    info!("Submitting report...");
    let receipt = submit_report(draft, Duration::from_millis(delay_ms)).await?;
    println!("Report submitted successfully!");
    println!(
        "  {} | {} | {} priority | status {:?} | {}",
        receipt.id,
        receipt.report_type,
        receipt.priority,
        receipt.status,
        format_timestamp(&receipt.timestamp)
    );
    Ok(())
}
