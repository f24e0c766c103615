//! Console output for the binary
//!
//! Renders the readings of one poll cycle as a plain-text report.

mod console;

pub use console::{format_state, print_report, render_report};
