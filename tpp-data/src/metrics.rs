//! Derivation of the dashboard's headline figures from monthly observations.

use log::debug;
use tpp_core::{
    error::{Result, TppError},
    metrics::{DashboardSummary, DerivedMetrics, RiskLevel},
    observation::MonthlyObservation,
};

/// Signed change from `first` to `last` relative to `first`, in percent.
///
/// Positive values mean the count went down.
pub fn relative_change_pct(first: u32, last: u32) -> Result<f64> {
    if first == 0 {
        return Err(TppError::DivisionByZero);
    }
    Ok((f64::from(first) - f64::from(last)) / f64::from(first) * 100.0)
}

fn endpoints(
    observations: &[MonthlyObservation],
) -> Result<(&MonthlyObservation, &MonthlyObservation)> {
    match (observations.first(), observations.last()) {
        (Some(first), Some(last)) => Ok((first, last)),
        _ => Err(TppError::EmptyObservationSet),
    }
}

/// Compute the summary metrics for a chronological observation sequence.
///
/// Fails with `EmptyObservationSet` when there are no observations and
/// with `DivisionByZero` when the first period recorded no incidents.
pub fn derive_metrics(observations: &[MonthlyObservation]) -> Result<DerivedMetrics> {
    let (first, last) = endpoints(observations)?;

    let active_cases = last.incidents;
    let predicted_reduction_pct = relative_change_pct(first.incidents, last.incidents)?.abs();
    let metrics = DerivedMetrics {
        active_cases,
        risk_level: RiskLevel::from_incidents(active_cases),
        prevention_score: last.prevention_score,
        predicted_reduction_pct,
    };
    debug!(
        "Derived metrics over {} observations: {:?}",
        observations.len(),
        metrics
    );
    Ok(metrics)
}

/// Derived metrics plus the secondary figures printed under each card.
pub fn summarize(observations: &[MonthlyObservation]) -> Result<DashboardSummary> {
    let metrics = derive_metrics(observations)?;
    let (first, last) = endpoints(observations)?;
    Ok(DashboardSummary {
        change_from_first_pct: relative_change_pct(first.incidents, metrics.active_cases)?,
        prevention_improvement: i64::from(last.prevention_score)
            - i64::from(first.prevention_score),
        latest_month: last.month.clone(),
        metrics,
    })
}
