//! Command grammar.
//!
//! One command per line, fields separated by whitespace, command names
//! case-insensitive:
//!
//! ```text
//! ENQUEUE <duration>
//! DISTRIBUTE
//! ```

use std::num::IntErrorKind;

use crate::balancer::MAX_WINDOWS;
use crate::error::{QueueError, Result};

/// A parsed command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Issue a ticket with the given duration (minutes).
    Enqueue(u32),
    /// Distribute all tickets and end the session.
    Distribute,
}

impl Command {
    /// Parses a non-blank command line.
    pub fn parse(line: &str) -> Result<Self> {
        let mut fields = line.split_whitespace();
        let Some(name) = fields.next() else {
            return Err(QueueError::MalformedInput("Empty command".into()));
        };
        let args: Vec<&str> = fields.collect();

        match name.to_ascii_uppercase().as_str() {
            "ENQUEUE" => match args.as_slice() {
                [duration] => parse_duration(duration).map(Self::Enqueue),
                _ => Err(QueueError::MalformedInput(
                    "Usage: ENQUEUE <duration>".into(),
                )),
            },
            "DISTRIBUTE" if args.is_empty() => Ok(Self::Distribute),
            "DISTRIBUTE" => Err(QueueError::MalformedInput(
                "DISTRIBUTE takes no arguments".into(),
            )),
            _ => Err(QueueError::UnknownCommand(name.to_string())),
        }
    }
}

fn parse_duration(field: &str) -> Result<u32> {
    match field.parse::<u32>() {
        Ok(duration) if duration > 0 => Ok(duration),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => Err(QueueError::MalformedInput(
            format!("Duration exceeds {} minutes, got '{field}'", u32::MAX),
        )),
        _ => Err(QueueError::MalformedInput(format!(
            "Duration must be a positive integer, got '{field}'"
        ))),
    }
}

/// Parses the startup line carrying the window count.
///
/// Accepts `1..=MAX_WINDOWS`.
pub fn parse_window_count(line: &str) -> Result<usize> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    match fields.as_slice() {
        [field] => match field.parse::<usize>() {
            Ok(count) if count > MAX_WINDOWS => Err(QueueError::InvalidConfiguration(format!(
                "window count must not exceed {MAX_WINDOWS}, got '{field}'"
            ))),
            Ok(count) if count > 0 => Ok(count),
            Err(err) if *err.kind() == IntErrorKind::PosOverflow => {
                Err(QueueError::InvalidConfiguration(format!(
                    "window count must not exceed {MAX_WINDOWS}, got '{field}'"
                )))
            }
            _ => Err(QueueError::InvalidConfiguration(format!(
                "window count must be a positive integer, got '{field}'"
            ))),
        },
        _ => Err(QueueError::InvalidConfiguration(format!(
            "expected a single window count, got '{}'",
            line.trim()
        ))),
    }
}
