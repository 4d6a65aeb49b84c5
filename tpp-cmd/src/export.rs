//! Export of chart series for external rendering.

use crate::{Chart, Format};
use log::info;
use serde::Serialize;
use std::path::Path;
use tpp_data::{dataset::Dataset, series};

fn encode<T: Serialize>(rows: &[T], format: Format) -> anyhow::Result<String> {
    let body = match format {
        Format::Json => serde_json::to_string_pretty(rows)? + "\n",
        Format::Csv => series::to_csv(rows)?,
    };
    Ok(body)
}

/// Encode the requested chart series.
pub fn render_chart(dataset: &Dataset, chart: Chart, format: Format) -> anyhow::Result<String> {
    match chart {
        Chart::Trend => encode(&series::monthly_trend(&dataset.observations), format),
        Chart::Predictive => encode(
            &series::predictive_comparison(&dataset.predictive_metrics),
            format,
        ),
        Chart::Platforms => encode(
            &series::platform_shares(&dataset.intervention_stats.platform_breakdown),
            format,
        ),
        Chart::RiskFactors => encode(&series::risk_factor_totals(&dataset.observations), format),
        Chart::Locations => encode(&series::location_totals(&dataset.observations), format),
    }
}

pub fn run_export(
    chart: Chart,
    format: Format,
    output: Option<&Path>,
    data: Option<&Path>,
) -> anyhow::Result<()> {
    let dataset = crate::load_dataset(data)?;
    let body = render_chart(&dataset, chart, format)?;
    match output {
        Some(path) => {
            std::fs::write(path, &body)?;
            info!("Wrote {:?} series to {}", chart, path.display());
        }
        None => print!("{}", body),
    }
    Ok(())
}
