//! Command implementations for the TPP CLI.
//!
//! Provides subcommands for viewing the monitoring dashboard, analyzing
//! uploaded data files, submitting reports and exporting chart series.

use clap::{Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tpp_core::news::NewsCategory;
use tpp_core::report::{Priority, ReportType};
use tpp_data::dataset::Dataset;

pub mod analyze;
pub mod dashboard;
pub mod export;
pub mod news;
pub mod report;

/// Chart series available for export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Chart {
    /// Monthly incidents and prevention score
    Trend,
    /// Current versus predicted counts per category
    Predictive,
    /// Report share per platform
    Platforms,
    /// Risk factor totals across all months
    RiskFactors,
    /// Incident totals per region across all months
    Locations,
}

/// Output encoding for exported series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the monitoring dashboard: headline metrics, report status, news and trends
    Dashboard {
        /// Directory holding dataset JSON files to use instead of the bundled data
        #[arg(short = 'd', long)]
        data: Option<PathBuf>,

        /// Print the headline metrics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Analyze uploaded trafficking data JSON files as one batch
    Analyze {
        /// Files to analyze
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Report the outcome of every file instead of failing the whole batch
        #[arg(long)]
        per_file: bool,
    },

    /// Submit a trafficking activity report
    Report {
        /// suspicious_activity, potential_victim or trafficking_network
        #[arg(short = 't', long = "type", default_value = "suspicious_activity")]
        report_type: ReportType,

        /// low, medium or high
        #[arg(short, long, default_value = "medium")]
        priority: Priority,

        /// Detailed information about the incident
        #[arg(short = 'm', long)]
        description: String,

        /// Simulated acknowledgment delay in milliseconds
        #[arg(long, default_value_t = 1500)]
        delay_ms: u64,
    },

    /// Export a chart series as JSON or CSV
    Export {
        #[arg(short, long, value_enum)]
        chart: Chart,

        #[arg(short, long, value_enum, default_value = "json")]
        format: Format,

        /// Write to this path instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory holding dataset JSON files to use instead of the bundled data
        #[arg(short = 'd', long)]
        data: Option<PathBuf>,
    },

    /// List news items, newest first
    News {
        /// Only show alert, success or info items
        #[arg(short, long)]
        category: Option<NewsCategory>,

        /// Only show items published on or after this date (YYYY-MM-DD)
        #[arg(short, long)]
        since: Option<String>,

        /// Directory holding dataset JSON files to use instead of the bundled data
        #[arg(short = 'd', long)]
        data: Option<PathBuf>,
    },
}

/// Load the dataset from `dir` when given, otherwise the bundled copy.
pub fn load_dataset(dir: Option<&Path>) -> anyhow::Result<Dataset> {
    let dataset = match dir {
        Some(dir) => Dataset::from_dir(dir)?,
        None => Dataset::bundled()?,
    };
    Ok(dataset)
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Dashboard { data, json } => dashboard::run_dashboard(data.as_deref(), json),
        Command::Analyze {
            files,
            json,
            per_file,
        } => analyze::run_analyze(&files, json, per_file).await,
        Command::Report {
            report_type,
            priority,
            description,
            delay_ms,
        } => report::run_report(report_type, priority, description, delay_ms).await,
        Command::Export {
            chart,
            format,
            output,
            data,
        } => export::run_export(chart, format, output.as_deref(), data.as_deref()),
        Command::News {
            category,
            since,
            data,
        } => news::run_news(category, since.as_deref(), data.as_deref()),
    }
}
