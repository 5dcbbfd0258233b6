//! Terminal rendering for assistant answers.
//!
//! Answers use the inline `**emphasis**` convention; emphasized runs are
//! printed bold and line breaks keep the two-space gutter.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use helpdesk_core::markup::{self, Segment};

const GUTTER: &str = "  ";

/// Render an answer for the terminal. The first line carries no gutter.
pub fn render_answer(text: &str) -> String {
    let mut output = String::new();
    for segment in markup::parse(text.trim()) {
        match segment {
            Segment::Text(s) => output.push_str(&s),
            Segment::Emphasis(s) => output.push_str(&style(s).bold().to_string()),
            Segment::LineBreak => {
                output.push('\n');
                output.push_str(GUTTER);
            }
        }
    }
    output
}

/// Spinner shown while an answer is being resolved.
pub fn thinking_spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let spinner_style = ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(spinner_style);
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
