//! Distribution quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Largest window load |
//! | Lower Bound | max(ceil(total / m), longest ticket) |
//! | Bound Ratio | makespan / lower bound |
//! | Avg Utilization | total / (m * makespan) |
//! | Idle Windows | Windows with no tickets |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 5.1: Parallel Machines, Makespan

use crate::models::Distribution;

/// Distribution performance indicators.
///
/// All time values are in minutes.
#[derive(Debug, Clone)]
pub struct BalanceKpi {
    /// Makespan: largest window load.
    pub makespan: u64,
    /// Sum of all window loads.
    pub total_load: u64,
    /// Trivial lower bound on the optimal makespan.
    pub lower_bound: u64,
    /// makespan / lower_bound (1.0 when both are zero).
    pub bound_ratio: f64,
    /// Mean window utilization against the makespan (0.0..1.0).
    pub avg_utilization: f64,
    /// Windows that received no tickets.
    pub idle_windows: usize,
}

impl BalanceKpi {
    /// Computes KPIs from a completed distribution.
    pub fn calculate(distribution: &Distribution) -> Self {
        let makespan = distribution.makespan();
        let total_load = distribution.total_load();
        let window_count = distribution.window_count() as u64;

        let longest = distribution
            .tickets()
            .map(|t| t.load())
            .max()
            .unwrap_or(0);
        let average_bound = if window_count == 0 {
            0
        } else {
            total_load.div_ceil(window_count)
        };
        let lower_bound = average_bound.max(longest);

        let bound_ratio = if lower_bound == 0 {
            1.0
        } else {
            makespan as f64 / lower_bound as f64
        };

        let avg_utilization = if makespan == 0 || window_count == 0 {
            0.0
        } else {
            total_load as f64 / (window_count * makespan) as f64
        };

        let idle_windows = distribution.windows.iter().filter(|w| w.is_empty()).count();

        Self {
            makespan,
            total_load,
            lower_bound,
            bound_ratio,
            avg_utilization,
            idle_windows,
        }
    }

    /// Whether the makespan provably equals the optimum.
    pub fn is_provably_optimal(&self) -> bool {
        self.makespan == self.lower_bound
    }
}
