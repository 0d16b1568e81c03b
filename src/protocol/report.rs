//! Distribution report rendering.
//!
//! Only windows that received tickets are listed; empty windows still
//! count toward the makespan.

use serde::Serialize;

use crate::balancer::BalanceKpi;
use crate::error::Result;
use crate::models::Distribution;

#[derive(Debug, Serialize)]
struct WindowReport<'a> {
    window: usize,
    load: u64,
    tickets: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
struct DistributionReport<'a> {
    windows: Vec<WindowReport<'a>>,
    makespan: u64,
}

/// Renders the text report, one entry per output line.
///
/// ```text
/// Window 1 (10 min): T003, T004
/// Window 2 (8 min): T001, T002
/// Max processing time: 10 min
/// ```
pub fn render_text(distribution: &Distribution, kpi: Option<&BalanceKpi>) -> Vec<String> {
    let mut lines: Vec<String> = distribution
        .non_empty_windows()
        .map(|w| format!("Window {} ({} min): {}", w.number(), w.load, w.labels().join(", ")))
        .collect();
    lines.push(format!(
        "Max processing time: {} min",
        distribution.makespan()
    ));
    if let Some(kpi) = kpi {
        let optimal = if kpi.is_provably_optimal() {
            ", optimal"
        } else {
            ""
        };
        lines.push(format!(
            "Lower bound: {} min (ratio {:.2}{optimal}, utilization {:.0}%, idle windows {})",
            kpi.lower_bound,
            kpi.bound_ratio,
            kpi.avg_utilization * 100.0,
            kpi.idle_windows
        ));
    }
    lines
}

/// Renders the report as a single JSON object.
pub fn render_json(distribution: &Distribution) -> Result<String> {
    let report = DistributionReport {
        windows: distribution
            .non_empty_windows()
            .map(|w| WindowReport {
                window: w.number(),
                load: w.load,
                tickets: w.labels(),
            })
            .collect(),
        makespan: distribution.makespan(),
    };
    Ok(serde_json::to_string(&report)?)
}
