//! Ticket (service request) model.
//!
//! A ticket is one request waiting for a service window, carrying the
//! estimated processing duration in minutes.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1

use serde::{Deserialize, Serialize};

/// A service request waiting to be assigned to a window.
///
/// Tickets are immutable once issued by the intake. `arrival` is the
/// zero-based position in the intake sequence and is the stable
/// tie-breaker whenever two tickets have equal duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Session-unique label (e.g., "T001").
    pub label: String,
    /// Estimated processing duration (minutes, > 0).
    pub duration: u32,
    /// Position in the intake sequence.
    pub arrival: usize,
}

impl Ticket {
    /// Creates a new ticket.
    pub fn new(label: impl Into<String>, duration: u32, arrival: usize) -> Self {
        Self {
            label: label.into(),
            duration,
            arrival,
        }
    }

    /// Duration widened to the load accumulator type.
    #[inline]
    pub fn load(&self) -> u64 {
        u64::from(self.duration)
    }
}
