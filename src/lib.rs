//! Ticket-to-window load balancing.
//!
//! Collects service tickets with estimated durations and partitions them
//! across a fixed number of parallel service windows, approximately
//! minimizing the makespan with longest-processing-time-first list
//! scheduling.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Ticket`, `Window`, `Distribution`
//! - **`intake`**: Label generation and the arrival-ordered ticket batch
//! - **`balancer`**: `LoadHeap`, `WindowBalancer`, `OrderingPolicy`, `BalanceKpi`
//! - **`validation`**: Batch integrity checks (window count, durations, labels)
//! - **`session`**: One open-then-closed intake and distribution run
//! - **`protocol`**: Command grammar and report rendering
//! - **`repl`**: The command dispatcher over input/output streams
//!
//! # Example
//!
//! ```
//! use u_queue::config::SessionConfig;
//! use u_queue::session::QueueSession;
//!
//! let mut session = QueueSession::new(2, &SessionConfig::default()).unwrap();
//! for duration in [5, 3, 8, 2] {
//!     session.enqueue(duration).unwrap();
//! }
//! let distribution = session.distribute().unwrap();
//! assert_eq!(distribution.loads(), vec![10, 8]);
//! ```
//!
//! # References
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod balancer;
pub mod config;
pub mod error;
pub mod intake;
pub mod models;
pub mod protocol;
pub mod repl;
pub mod session;
pub mod validation;

pub use error::{QueueError, Result};
