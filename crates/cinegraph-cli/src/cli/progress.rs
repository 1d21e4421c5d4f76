// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! Spinners for the slow steps: fetching the popular pool and building the
//! graph.

use crate::cli::output;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("  {spinner:.cyan} {msg} {elapsed:.dim}")
        .map(|style| style.tick_chars("\u{25b8}\u{25b9}\u{25b8}\u{25b9}\u{25b8}"))
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn done_style() -> ProgressStyle {
    ProgressStyle::with_template("  {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Create a spinner for a long-running step.
///
/// Hidden in quiet and JSON modes.
pub fn create_spinner(message: &str) -> ProgressBar {
    if output::is_quiet() || output::is_json() {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new_spinner();
    bar.set_style(spinner_style());
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(120));
    bar
}

/// Replace the spinner with a completion line.
pub fn finish_ok(bar: &ProgressBar, message: &str) {
    let s = output::Styled::new();
    bar.set_style(done_style());
    bar.finish_with_message(format!("{} {message}", s.ok_sym()));
}

/// Replace the spinner with a failure line.
pub fn finish_failed(bar: &ProgressBar, message: &str) {
    let s = output::Styled::new();
    bar.set_style(done_style());
    bar.finish_with_message(format!("{} {message}", s.fail_sym()));
}
