//! Use case orchestration for passgauge.
//!
//! This crate provides the application layer: use cases that coordinate the
//! domain, settings, and render layers. It is intentionally thin.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod render;

pub use check::{load_wordlist, run_check, verdict_exit_code, CheckInput, CheckOutput};
pub use explain::{format_explanation, format_not_found, run_explain, ExplainOutput};
pub use render::{parse_report_json, serialize_report, to_renderable};

pub use passgauge_render::{render_markdown, render_text};
