//! Ticket ordering policies applied before greedy assignment.
//!
//! # Score Convention
//! Policies produce a total order over ticket indices. Ties are always
//! broken by arrival, so the order is deterministic for a given intake.
//!
//! # References
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Pinedo (2016), "Scheduling", Ch. 5.1: LPT on parallel machines

use std::cmp::Reverse;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::Ticket;

/// How tickets are ordered before list scheduling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OrderingPolicy {
    /// Longest Processing Time first.
    ///
    /// Bounds the makespan by (4/3 - 1/(3m)) of the optimum.
    #[default]
    LongestFirst,
    /// Arrival order (plain list scheduling).
    ///
    /// Bounded only by (2 - 1/m) of the optimum.
    ArrivalOrder,
}

impl OrderingPolicy {
    /// Policy name (e.g., "LPT").
    pub fn name(&self) -> &'static str {
        match self {
            Self::LongestFirst => "LPT",
            Self::ArrivalOrder => "FIFO",
        }
    }

    /// Returns indices into `tickets` in assignment order.
    pub fn sort_indices(&self, tickets: &[Ticket]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..tickets.len()).collect();
        match self {
            Self::LongestFirst => {
                indices.sort_by_key(|&i| (Reverse(tickets[i].duration), tickets[i].arrival));
            }
            Self::ArrivalOrder => {
                indices.sort_by_key(|&i| tickets[i].arrival);
            }
        }
        indices
    }
}
