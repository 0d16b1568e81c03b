//! Session configuration.
//!
//! Controls report format, interactive prompts, ticket labels, and the
//! ordering policy. Built from command-line arguments by the binary;
//! library users construct it directly.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::balancer::OrderingPolicy;

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per non-empty window plus a makespan line.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

/// Per-session settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Distribution report format.
    pub format: OutputFormat,
    /// Emit `<<< ` / `>>> ` interactive markers and the startup banner.
    pub prompts: bool,
    /// Prefix for generated ticket labels.
    pub label_prefix: String,
    /// Ticket ordering before assignment.
    pub policy: OrderingPolicy,
    /// Append a KPI line to text reports.
    pub show_kpi: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            prompts: false,
            label_prefix: "T".into(),
            policy: OrderingPolicy::LongestFirst,
            show_kpi: false,
        }
    }
}

impl SessionConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the report format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Enables or disables interactive prompts.
    pub fn with_prompts(mut self, prompts: bool) -> Self {
        self.prompts = prompts;
        self
    }

    /// Sets the label prefix.
    pub fn with_label_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.label_prefix = prefix.into();
        self
    }

    /// Sets the ordering policy.
    pub fn with_policy(mut self, policy: OrderingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Enables or disables the KPI line.
    pub fn with_kpi(mut self, show_kpi: bool) -> Self {
        self.show_kpi = show_kpi;
        self
    }
}
