//! Distribution (solution) model.
//!
//! A distribution is the result of one balancing pass: every window in
//! index order with its assigned tickets, plus the makespan.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5 (Parallel Machines)

use serde::{Deserialize, Serialize};

use super::{Ticket, Window};

/// A complete ticket-to-window assignment.
///
/// Empty windows are kept so that indices line up with window numbers;
/// report rendering decides whether to show them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    /// All windows, indexed by window index.
    pub windows: Vec<Window>,
    /// Maximum load across windows (minutes).
    pub makespan: u64,
}

impl Distribution {
    /// Builds a distribution from balanced windows, deriving the makespan.
    pub fn from_windows(windows: Vec<Window>) -> Self {
        let makespan = windows.iter().map(|w| w.load).max().unwrap_or(0);
        Self { windows, makespan }
    }

    /// Makespan: largest window load (minutes).
    #[inline]
    pub fn makespan(&self) -> u64 {
        self.makespan
    }

    /// Number of windows (including empty ones).
    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Window by zero-based index.
    pub fn window(&self, index: usize) -> Option<&Window> {
        self.windows.get(index)
    }

    /// Loads of all windows, by index.
    pub fn loads(&self) -> Vec<u64> {
        self.windows.iter().map(|w| w.load).collect()
    }

    /// Sum of all window loads.
    pub fn total_load(&self) -> u64 {
        self.windows.iter().map(|w| w.load).sum()
    }

    /// Number of assigned tickets.
    pub fn ticket_count(&self) -> usize {
        self.windows.iter().map(|w| w.tickets.len()).sum()
    }

    /// Windows with at least one ticket, in index order.
    pub fn non_empty_windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.iter().filter(|w| !w.is_empty())
    }

    /// Index of the window a ticket was assigned to.
    pub fn window_of(&self, label: &str) -> Option<usize> {
        self.windows
            .iter()
            .find(|w| w.tickets.iter().any(|t| t.label == label))
            .map(|w| w.index)
    }

    /// All assigned tickets, window by window.
    pub fn tickets(&self) -> impl Iterator<Item = &Ticket> {
        self.windows.iter().flat_map(|w| w.tickets.iter())
    }
}
