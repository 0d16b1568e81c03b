//! A single intake-then-distribute session.
//!
//! The session accepts tickets while open. Distributing the batch closes
//! it; every later call fails with [`QueueError::SessionClosed`].

use tracing::info;

use crate::balancer::WindowBalancer;
use crate::config::SessionConfig;
use crate::error::{QueueError, Result};
use crate::intake::TicketIntake;
use crate::models::{Distribution, Ticket};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Open,
    Closed,
}

/// Owns the intake and balancer for one run.
///
/// # Example
///
/// ```
/// use u_queue::config::SessionConfig;
/// use u_queue::session::QueueSession;
///
/// let mut session = QueueSession::new(2, &SessionConfig::default()).unwrap();
/// assert_eq!(session.enqueue(5).unwrap().label, "T001");
/// let distribution = session.distribute().unwrap();
/// assert_eq!(distribution.makespan(), 5);
/// assert!(session.enqueue(1).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct QueueSession {
    intake: TicketIntake,
    balancer: WindowBalancer,
    state: SessionState,
}

impl QueueSession {
    /// Starts a session over `window_count` windows.
    pub fn new(window_count: usize, config: &SessionConfig) -> Result<Self> {
        let balancer = WindowBalancer::new(window_count)?.with_policy(config.policy);
        info!(
            windows = window_count,
            policy = config.policy.name(),
            "session started"
        );
        Ok(Self {
            intake: TicketIntake::new(config.label_prefix.clone()),
            balancer,
            state: SessionState::Open,
        })
    }

    /// Issues a ticket for a request of `duration` minutes.
    pub fn enqueue(&mut self, duration: u32) -> Result<&Ticket> {
        self.ensure_open()?;
        self.intake.enqueue(duration)
    }

    /// Distributes all pending tickets and closes the session.
    pub fn distribute(&mut self) -> Result<Distribution> {
        self.ensure_open()?;
        info!(
            tickets = self.intake.len(),
            total_minutes = self.intake.total_duration(),
            "distributing batch"
        );
        let distribution = self.balancer.distribute(self.intake.tickets())?;
        self.state = SessionState::Closed;
        Ok(distribution)
    }

    /// Whether the batch was already distributed.
    pub fn is_closed(&self) -> bool {
        self.state == SessionState::Closed
    }

    /// Tickets issued so far.
    pub fn pending(&self) -> &[Ticket] {
        self.intake.tickets()
    }

    /// Number of windows.
    pub fn window_count(&self) -> usize {
        self.balancer.window_count()
    }

    fn ensure_open(&self) -> Result<()> {
        match self.state {
            SessionState::Open => Ok(()),
            SessionState::Closed => Err(QueueError::SessionClosed),
        }
    }
}
