use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{prelude::*, EnvFilter};
use u_queue::balancer::OrderingPolicy;
use u_queue::config::{OutputFormat, SessionConfig};
use u_queue::error::QueueError;
use u_queue::repl::{self, Outcome};

/// Distribute service tickets across parallel windows.
///
/// Reads the window count from the first input line, then ENQUEUE <duration>
/// commands until DISTRIBUTE.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Report format for DISTRIBUTE.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print interactive prompts.
    #[arg(long)]
    prompt: bool,

    /// Prefix for generated ticket labels.
    #[arg(long, default_value = "T")]
    label_prefix: String,

    /// Ticket ordering before assignment.
    #[arg(long, value_enum, default_value_t = OrderingPolicy::LongestFirst)]
    policy: OrderingPolicy,

    /// Append the lower bound and bound ratio to the text report.
    #[arg(long)]
    kpi: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    let config = SessionConfig::new()
        .with_format(args.format)
        .with_prompts(args.prompt)
        .with_label_prefix(args.label_prefix)
        .with_policy(args.policy)
        .with_kpi(args.kpi);

    match repl::run(io::stdin().lock(), io::stdout().lock(), &config) {
        Ok(Outcome::Distributed(_)) | Ok(Outcome::EndOfInput) => ExitCode::SUCCESS,
        Err(QueueError::InvalidConfiguration(_)) => ExitCode::from(2),
        Err(err) => {
            tracing::error!("session aborted: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
