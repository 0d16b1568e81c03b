//! Service window model.
//!
//! A window is one parallel service channel (a machine, in classical
//! scheduling terms). It holds the tickets assigned to it and the
//! cumulative load they represent.

use serde::{Deserialize, Serialize};

use super::Ticket;

/// A service window and its assigned tickets.
///
/// `load` is kept in step with `tickets` by [`Window::assign`]; it always
/// equals the sum of assigned durations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    /// Zero-based window index.
    pub index: usize,
    /// Assigned tickets, in assignment order.
    pub tickets: Vec<Ticket>,
    /// Total assigned duration (minutes).
    pub load: u64,
}

impl Window {
    /// Creates an empty window.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            tickets: Vec::new(),
            load: 0,
        }
    }

    /// Assigns a ticket and returns the updated load.
    pub fn assign(&mut self, ticket: Ticket) -> u64 {
        self.load += ticket.load();
        self.tickets.push(ticket);
        self.load
    }

    /// One-based number used in reports.
    #[inline]
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// Whether any ticket was assigned.
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Labels of assigned tickets, in assignment order.
    pub fn labels(&self) -> Vec<&str> {
        self.tickets.iter().map(|t| t.label.as_str()).collect()
    }

    /// Recomputes the load from the ticket list.
    pub fn recomputed_load(&self) -> u64 {
        self.tickets.iter().map(Ticket::load).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_assign() {
        let mut w = Window::new(1);
        assert!(w.is_empty());
        assert_eq!(w.assign(Ticket::new("T001", 5, 0)), 5);
        assert_eq!(w.assign(Ticket::new("T002", 3, 1)), 8);
        assert_eq!(w.load, 8);
        assert_eq!(w.recomputed_load(), 8);
        assert_eq!(w.labels(), vec!["T001", "T002"]);
        assert_eq!(w.number(), 2);
    }
}
