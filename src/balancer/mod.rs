//! Greedy window balancing and KPI evaluation.
//!
//! Partitions a ticket batch across parallel service windows to
//! approximately minimize the makespan.
//!
//! # Algorithm
//!
//! `WindowBalancer` uses longest-processing-time-first list scheduling:
//! tickets sorted by descending duration, each assigned to the currently
//! least-loaded window taken from a `LoadHeap`. Ties on load go to the
//! lower window index.
//!
//! # KPI
//!
//! `BalanceKpi` reports makespan, a lower bound on the optimum, and
//! per-window utilization.
//!
//! # References
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5

mod heap;
mod kpi;
mod lpt;
mod policy;

pub use heap::{LoadHeap, WindowLoad};
pub use kpi::BalanceKpi;
pub use lpt::{WindowBalancer, MAX_WINDOWS};
pub use policy::OrderingPolicy;
