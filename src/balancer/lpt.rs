//! Greedy window balancer.
//!
//! # Algorithm
//!
//! 1. Order tickets by the configured policy (LPT by default).
//! 2. Start every window at load zero in a min-heap keyed by (load, index).
//! 3. For each ticket, pop the least-loaded window, assign the ticket,
//!    and push the window back with its new load.
//! 4. Makespan is the largest resulting load.
//!
//! # Complexity
//! O(n log n + n log m) where n=tickets, m=windows.
//!
//! # Reference
//! Graham (1969), "Bounds on Multiprocessing Timing Anomalies"

use tracing::{debug, info};

use super::{LoadHeap, OrderingPolicy, WindowLoad};
use crate::error::{QueueError, Result};
use crate::models::{Distribution, Ticket, Window};
use crate::validation::validate_batch;

/// Largest accepted window count.
///
/// Every window is materialized up front, so the count bounds allocation.
pub const MAX_WINDOWS: usize = 10_000;

/// Partitions tickets across a fixed number of parallel windows.
///
/// # Example
///
/// ```
/// use u_queue::balancer::WindowBalancer;
/// use u_queue::models::Ticket;
///
/// let tickets = vec![
///     Ticket::new("T001", 5, 0),
///     Ticket::new("T002", 3, 1),
///     Ticket::new("T003", 8, 2),
///     Ticket::new("T004", 2, 3),
/// ];
/// let balancer = WindowBalancer::new(2).unwrap();
/// let distribution = balancer.distribute(&tickets).unwrap();
/// assert_eq!(distribution.loads(), vec![10, 8]);
/// assert_eq!(distribution.makespan(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct WindowBalancer {
    window_count: usize,
    policy: OrderingPolicy,
}

impl WindowBalancer {
    /// Creates an LPT balancer over `window_count` windows.
    ///
    /// Fails with [`QueueError::InvalidConfiguration`] if `window_count` is zero
    /// or above [`MAX_WINDOWS`].
    pub fn new(window_count: usize) -> Result<Self> {
        if window_count == 0 {
            return Err(QueueError::InvalidConfiguration(
                "window count must be at least 1".into(),
            ));
        }
        if window_count > MAX_WINDOWS {
            return Err(QueueError::InvalidConfiguration(format!(
                "window count must not exceed {MAX_WINDOWS}, got {window_count}"
            )));
        }
        Ok(Self {
            window_count,
            policy: OrderingPolicy::LongestFirst,
        })
    }

    /// Sets the ordering policy.
    pub fn with_policy(mut self, policy: OrderingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Number of windows.
    pub fn window_count(&self) -> usize {
        self.window_count
    }

    /// Assigns every ticket to exactly one window.
    pub fn distribute(&self, tickets: &[Ticket]) -> Result<Distribution> {
        validate_batch(tickets, self.window_count).map_err(QueueError::InvalidBatch)?;

        let mut windows: Vec<Window> = (0..self.window_count).map(Window::new).collect();
        let mut heap = LoadHeap::with_windows(self.window_count);

        for idx in self.policy.sort_indices(tickets) {
            let ticket = &tickets[idx];
            let slot = heap.pop_min().ok_or_else(|| {
                QueueError::InvalidConfiguration("no window available for assignment".into())
            })?;
            let load = windows[slot.window].assign(ticket.clone());
            debug!(
                label = %ticket.label,
                duration = ticket.duration,
                window = slot.window + 1,
                load,
                "ticket assigned"
            );
            heap.push(WindowLoad::new(slot.window, load));
        }

        let distribution = Distribution::from_windows(windows);
        info!(
            policy = self.policy.name(),
            windows = self.window_count,
            tickets = tickets.len(),
            makespan = distribution.makespan(),
            "tickets distributed"
        );
        Ok(distribution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    fn batch(durations: &[u32]) -> Vec<Ticket> {
        durations
            .iter()
            .enumerate()
            .map(|(i, &d)| Ticket::new(format!("T{:03}", i + 1), d, i))
            .collect()
    }

    fn durations_of(window: &Window) -> Vec<u32> {
        window.tickets.iter().map(|t| t.duration).collect()
    }

    /// Exhaustive optimum over all m^n assignments.
    fn brute_force_makespan(durations: &[u32], windows: usize) -> u64 {
        let n = durations.len();
        let total = windows.pow(n as u32);
        let mut best = u64::MAX;
        for code in 0..total {
            let mut loads = vec![0u64; windows];
            let mut c = code;
            for &d in durations {
                loads[c % windows] += u64::from(d);
                c /= windows;
            }
            best = best.min(loads.into_iter().max().unwrap_or(0));
        }
        best
    }

    #[test]
    fn test_reference_scenario() {
        let tickets = batch(&[5, 3, 8, 2]);
        let d = WindowBalancer::new(2).unwrap().distribute(&tickets).unwrap();

        assert_eq!(durations_of(&d.windows[0]), vec![8, 2]);
        assert_eq!(durations_of(&d.windows[1]), vec![5, 3]);
        assert_eq!(d.windows[0].labels(), vec!["T003", "T004"]);
        assert_eq!(d.windows[1].labels(), vec!["T001", "T002"]);
        assert_eq!(d.loads(), vec![10, 8]);
        assert_eq!(d.makespan(), 10);
    }

    #[test]
    fn test_single_window() {
        let tickets = batch(&[4, 9, 1, 6]);
        let d = WindowBalancer::new(1).unwrap().distribute(&tickets).unwrap();
        assert_eq!(d.window_count(), 1);
        assert_eq!(durations_of(&d.windows[0]), vec![9, 6, 4, 1]);
        assert_eq!(d.makespan(), 20);
    }

    #[test]
    fn test_empty_batch() {
        let d = WindowBalancer::new(3).unwrap().distribute(&[]).unwrap();
        assert_eq!(d.window_count(), 3);
        assert_eq!(d.makespan(), 0);
        assert_eq!(d.loads(), vec![0, 0, 0]);
        assert_eq!(d.non_empty_windows().count(), 0);
    }

    #[test]
    fn test_more_windows_than_tickets() {
        let tickets = batch(&[3, 7]);
        let d = WindowBalancer::new(4).unwrap().distribute(&tickets).unwrap();
        assert_eq!(d.loads(), vec![7, 3, 0, 0]);
        assert_eq!(d.makespan(), 7);
    }

    #[test]
    fn test_zero_windows_rejected() {
        assert!(matches!(
            WindowBalancer::new(0),
            Err(QueueError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_window_ceiling() {
        assert!(WindowBalancer::new(MAX_WINDOWS).is_ok());
        assert!(matches!(
            WindowBalancer::new(MAX_WINDOWS + 1),
            Err(QueueError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            WindowBalancer::new(usize::MAX),
            Err(QueueError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_many_tickets_few_windows_all_assigned() {
        let durations: Vec<u32> = (1..=500).map(|i| i % 17 + 1).collect();
        let tickets = batch(&durations);
        let d = WindowBalancer::new(2).unwrap().distribute(&tickets).unwrap();
        assert_eq!(d.ticket_count(), 500);
        assert_eq!(d.total_load(), durations.iter().map(|&x| u64::from(x)).sum::<u64>());
    }

    #[test]
    fn test_invalid_batch_rejected() {
        let tickets = vec![Ticket::new("T001", 2, 0), Ticket::new("T001", 3, 1)];
        let result = WindowBalancer::new(2).unwrap().distribute(&tickets);
        assert!(matches!(result, Err(QueueError::InvalidBatch(_))));
    }

    #[test]
    fn test_arrival_order_policy() {
        // FIFO: 5→W1, 3→W2, 8→W2 (load 3 < 5), 2→W1
        let tickets = batch(&[5, 3, 8, 2]);
        let d = WindowBalancer::new(2)
            .unwrap()
            .with_policy(OrderingPolicy::ArrivalOrder)
            .distribute(&tickets)
            .unwrap();
        assert_eq!(durations_of(&d.windows[0]), vec![5, 2]);
        assert_eq!(durations_of(&d.windows[1]), vec![3, 8]);
        assert_eq!(d.makespan(), 11);
    }

    #[test]
    fn test_every_ticket_assigned_once() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let n = rng.random_range(1..=40);
            let m = rng.random_range(1..=6);
            let durations: Vec<u32> = (0..n).map(|_| rng.random_range(1..=60)).collect();
            let tickets = batch(&durations);
            let d = WindowBalancer::new(m).unwrap().distribute(&tickets).unwrap();

            let labels: Vec<&str> = d.tickets().map(|t| t.label.as_str()).collect();
            let unique: HashSet<&str> = labels.iter().copied().collect();
            assert_eq!(labels.len(), tickets.len());
            assert_eq!(unique.len(), tickets.len());
            assert!(tickets.iter().all(|t| unique.contains(t.label.as_str())));

            for w in &d.windows {
                assert_eq!(w.load, w.recomputed_load());
            }
            assert_eq!(d.makespan(), d.loads().into_iter().max().unwrap_or(0));
            assert_eq!(d.total_load(), durations.iter().map(|&x| u64::from(x)).sum::<u64>());
        }
    }

    #[test]
    fn test_lpt_within_graham_bound() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let n = rng.random_range(1..=8);
            let m = rng.random_range(1..=3);
            let durations: Vec<u32> = (0..n).map(|_| rng.random_range(1..=20)).collect();
            let d = WindowBalancer::new(m)
                .unwrap()
                .distribute(&batch(&durations))
                .unwrap();
            let opt = brute_force_makespan(&durations, m);

            // makespan <= (4/3 - 1/(3m)) * opt
            let m = m as u64;
            assert!(
                3 * m * d.makespan() <= (4 * m - 1) * opt,
                "durations={durations:?} m={m} lpt={} opt={opt}",
                d.makespan()
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let tickets = batch(&[6, 6, 6, 2, 9, 4, 4, 1, 6]);
        let balancer = WindowBalancer::new(3).unwrap();
        let first = balancer.distribute(&tickets).unwrap();
        for _ in 0..10 {
            assert_eq!(balancer.distribute(&tickets).unwrap(), first);
        }
    }

    #[test]
    fn test_equal_durations_round_robin() {
        let tickets = batch(&[5, 5, 5, 5, 5, 5]);
        let d = WindowBalancer::new(3).unwrap().distribute(&tickets).unwrap();
        assert_eq!(d.windows[0].labels(), vec!["T001", "T004"]);
        assert_eq!(d.windows[1].labels(), vec!["T002", "T005"]);
        assert_eq!(d.windows[2].labels(), vec!["T003", "T006"]);
    }
}
