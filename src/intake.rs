//! Ticket intake.
//!
//! Issues labels and collects tickets in arrival order until the batch is
//! handed to the balancer.

use tracing::debug;

use crate::error::{QueueError, Result};
use crate::models::Ticket;

/// Deterministic label source.
///
/// Labels are `prefix` followed by a counter zero-padded to three digits
/// (`T001`, `T002`, ..., `T999`, `T1000`). The counter never repeats within
/// one generator, so labels are unique per session.
#[derive(Debug, Clone)]
pub struct LabelGenerator {
    prefix: String,
    next: u64,
}

impl LabelGenerator {
    /// Creates a generator starting at 1.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    /// Returns the next label.
    pub fn next_label(&mut self) -> String {
        let label = format!("{}{:03}", self.prefix, self.next);
        self.next += 1;
        label
    }
}

impl Default for LabelGenerator {
    fn default() -> Self {
        Self::new("T")
    }
}

/// Collects tickets in arrival order.
#[derive(Debug, Clone, Default)]
pub struct TicketIntake {
    labels: LabelGenerator,
    tickets: Vec<Ticket>,
}

impl TicketIntake {
    /// Creates an empty intake with the given label prefix.
    pub fn new(label_prefix: impl Into<String>) -> Self {
        Self {
            labels: LabelGenerator::new(label_prefix),
            tickets: Vec::new(),
        }
    }

    /// Issues a ticket for a request of `duration` minutes.
    ///
    /// Rejects a zero duration without consuming a label.
    pub fn enqueue(&mut self, duration: u32) -> Result<&Ticket> {
        if duration == 0 {
            return Err(QueueError::MalformedInput(
                "Duration must be a positive integer".into(),
            ));
        }

        let ticket = Ticket::new(self.labels.next_label(), duration, self.tickets.len());
        debug!(label = %ticket.label, duration, "ticket enqueued");
        self.tickets.push(ticket);
        Ok(&self.tickets[self.tickets.len() - 1])
    }

    /// Tickets in arrival order.
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Number of tickets issued.
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Whether no ticket was issued yet.
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Sum of all ticket durations (minutes).
    pub fn total_duration(&self) -> u64 {
        self.tickets.iter().map(Ticket::load).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_label_sequence() {
        let mut labels_gen = LabelGenerator::default();
        assert_eq!(labels_gen.next_label(), "T001");
        assert_eq!(labels_gen.next_label(), "T002");
    }

    #[test]
    fn test_label_widens_past_999() {
        let mut labels_gen = LabelGenerator::new("Q");
        let labels: Vec<String> = (0..1000).map(|_| labels_gen.next_label()).collect();
        assert_eq!(labels[998], "Q999");
        assert_eq!(labels[999], "Q1000");
        let unique: HashSet<&String> = labels.iter().collect();
        assert_eq!(unique.len(), 1000);
    }

    #[test]
    fn test_enqueue() {
        let mut intake = TicketIntake::new("T");
        let first = intake.enqueue(5).unwrap().clone();
        assert_eq!(first, Ticket::new("T001", 5, 0));
        let second = intake.enqueue(3).unwrap().clone();
        assert_eq!(second, Ticket::new("T002", 3, 1));
        assert_eq!(intake.len(), 2);
        assert_eq!(intake.total_duration(), 8);
    }

    #[test]
    fn test_enqueue_zero_rejected() {
        let mut intake = TicketIntake::new("T");
        assert!(matches!(
            intake.enqueue(0),
            Err(QueueError::MalformedInput(_))
        ));
        assert!(intake.is_empty());
        // Rejected request does not consume a label
        assert_eq!(intake.enqueue(1).unwrap().label, "T001");
    }
}
