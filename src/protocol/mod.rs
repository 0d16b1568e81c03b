//! Line-oriented text protocol: command grammar and report rendering.

mod command;
mod report;

pub use command::{parse_window_count, Command};
pub use report::{render_json, render_text};
