//! Ticket distribution domain models.
//!
//! Provides the data types for a batch of service requests and its
//! assignment to parallel service windows.
//!
//! # Domain Mappings
//!
//! | u-queue | Scheduling theory | Service desk |
//! |---------|-------------------|--------------|
//! | Ticket | Job | Customer request |
//! | Window | Identical parallel machine | Service counter |
//! | Distribution | P \|\| C_max schedule | Counter roster |

mod distribution;
mod ticket;
mod window;

pub use distribution::Distribution;
pub use ticket::Ticket;
pub use window::Window;
