//! Command dispatcher over line-oriented streams.
//!
//! Reads the window count, then one command per line until `DISTRIBUTE`
//! or end of input. Recoverable errors are written as `Error: ...` lines
//! and the loop keeps reading; only an invalid startup line or a stream
//! failure ends the run early.

use std::io::{BufRead, Write};

use tracing::warn;

use crate::balancer::BalanceKpi;
use crate::config::{OutputFormat, SessionConfig};
use crate::error::{QueueError, Result};
use crate::models::Distribution;
use crate::protocol::{parse_window_count, render_json, render_text, Command};
use crate::session::QueueSession;

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `DISTRIBUTE` produced a report.
    Distributed(Distribution),
    /// Input ended before `DISTRIBUTE`.
    EndOfInput,
}

struct Console<W> {
    out: W,
    prompts: bool,
}

impl<W: Write> Console<W> {
    fn prompt(&mut self) -> Result<()> {
        if self.prompts {
            write!(self.out, "<<< ")?;
            self.out.flush()?;
        }
        Ok(())
    }

    fn line(&mut self, text: &str) -> Result<()> {
        if self.prompts {
            writeln!(self.out, ">>> {text}")?;
        } else {
            writeln!(self.out, "{text}")?;
        }
        Ok(())
    }

    fn error(&mut self, err: &QueueError) -> Result<()> {
        self.line(&format!("Error: {err}"))
    }
}

/// Reads one line into `buf` without its terminator; `false` at end of input.
///
/// Bytes are kept raw so a line that is not UTF-8 surfaces as a command
/// error instead of a stream failure.
fn read_raw_line<R: BufRead>(input: &mut R, buf: &mut Vec<u8>) -> Result<bool> {
    buf.clear();
    if input.read_until(b'\n', buf)? == 0 {
        return Ok(false);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(true)
}

fn is_blank(raw: &[u8]) -> bool {
    raw.iter().all(u8::is_ascii_whitespace)
}

/// Runs one session, reading commands from `input` and writing to `output`.
///
/// Returns [`QueueError::InvalidConfiguration`] (after reporting it) when the
/// startup line is missing, not a positive integer, or above
/// [`MAX_WINDOWS`](crate::balancer::MAX_WINDOWS).
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    output: W,
    config: &SessionConfig,
) -> Result<Outcome> {
    let mut console = Console {
        out: output,
        prompts: config.prompts,
    };
    let mut buf = Vec::new();

    if config.prompts {
        console.line("Enter the number of windows")?;
    }
    console.prompt()?;

    let window_count = loop {
        if !read_raw_line(&mut input, &mut buf)? {
            let err = QueueError::InvalidConfiguration("missing window count".into());
            console.error(&err)?;
            return Err(err);
        }
        if is_blank(&buf) {
            continue;
        }
        match parse_window_count(&String::from_utf8_lossy(&buf)) {
            Ok(count) => break count,
            Err(err) => {
                console.error(&err)?;
                return Err(err);
            }
        }
    };

    let mut session = QueueSession::new(window_count, config)?;

    loop {
        console.prompt()?;
        if !read_raw_line(&mut input, &mut buf)? {
            return Ok(Outcome::EndOfInput);
        }
        if is_blank(&buf) {
            continue;
        }

        match dispatch(&mut session, &buf, config, &mut console) {
            Ok(Some(distribution)) => return Ok(Outcome::Distributed(distribution)),
            Ok(None) => {}
            Err(err) if err.is_recoverable() => {
                let command = String::from_utf8_lossy(&buf);
                warn!(command = command.trim(), error = %err, "command rejected");
                console.error(&err)?;
            }
            Err(err) => return Err(err),
        }
    }
}

fn dispatch<W: Write>(
    session: &mut QueueSession,
    raw: &[u8],
    config: &SessionConfig,
    console: &mut Console<W>,
) -> Result<Option<Distribution>> {
    let line = std::str::from_utf8(raw)
        .map_err(|_| QueueError::MalformedInput("Command is not valid UTF-8".into()))?;
    match Command::parse(line)? {
        Command::Enqueue(duration) => {
            let label = session.enqueue(duration)?.label.clone();
            console.line(&label)?;
            Ok(None)
        }
        Command::Distribute => {
            let distribution = session.distribute()?;
            match config.format {
                OutputFormat::Text => {
                    let kpi = config.show_kpi.then(|| BalanceKpi::calculate(&distribution));
                    for text in render_text(&distribution, kpi.as_ref()) {
                        console.line(&text)?;
                    }
                }
                OutputFormat::Json => console.line(&render_json(&distribution)?)?,
            }
            console.out.flush()?;
            Ok(Some(distribution))
        }
    }
}
