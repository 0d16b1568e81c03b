//! Input validation for ticket batches.
//!
//! Checks structural integrity of a batch before balancing. Detects:
//! - Zero window count
//! - Tickets with zero duration
//! - Duplicate ticket labels

use crate::models::Ticket;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No windows to assign tickets to.
    ZeroWindows,
    /// A ticket carries no processing time.
    ZeroDuration,
    /// Two tickets share the same label.
    DuplicateLabel,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a ticket batch against a window count.
///
/// Checks:
/// 1. At least one window
/// 2. Every ticket has a positive duration
/// 3. No duplicate labels
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_batch(tickets: &[Ticket], window_count: usize) -> ValidationResult {
    let mut errors = Vec::new();

    if window_count == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroWindows,
            "Window count must be at least 1",
        ));
    }

    let mut labels = HashSet::new();
    for ticket in tickets {
        if ticket.duration == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroDuration,
                format!("Ticket '{}' has zero duration", ticket.label),
            ));
        }
        if !labels.insert(ticket.label.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateLabel,
                format!("Duplicate ticket label: {}", ticket.label),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
