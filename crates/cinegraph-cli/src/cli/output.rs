// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! Shared CLI output formatting with colors, symbols, and structured display.
//!
//! Report text goes to stdout, chrome (banners, prompts, status lines) to
//! stderr, so `cinegraph benchmark --json > out.json` stays clean.

use std::io::IsTerminal;

/// Check if color output is enabled.
pub fn color_enabled() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() || std::env::var_os("CINEGRAPH_NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

const CYAN: &str = "\x1b[36m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Colored string builder.
pub struct Styled {
    use_color: bool,
}

impl Default for Styled {
    fn default() -> Self {
        Self::new()
    }
}

impl Styled {
    pub fn new() -> Self {
        Self {
            use_color: color_enabled(),
        }
    }

    /// Builder with color forced on or off.
    pub fn with_color(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn ok_sym(&self) -> &str {
        if self.use_color {
            "\x1b[32m\u{2713}\x1b[0m"
        } else {
            "OK"
        }
    }

    pub fn fail_sym(&self) -> &str {
        if self.use_color {
            "\x1b[31m\u{2717}\x1b[0m"
        } else {
            "!!"
        }
    }

    pub fn warn_sym(&self) -> &str {
        if self.use_color {
            "\x1b[33m\u{26a0}\x1b[0m"
        } else {
            "??"
        }
    }

    fn paint(&self, code: &str, s: &str) -> String {
        if self.use_color {
            format!("{code}{s}{RESET}")
        } else {
            s.to_string()
        }
    }

    pub fn cyan(&self, s: &str) -> String {
        self.paint(CYAN, s)
    }

    pub fn dim(&self, s: &str) -> String {
        self.paint(DIM, s)
    }

    pub fn bold(&self, s: &str) -> String {
        self.paint(BOLD, s)
    }
}

/// Print a branded header.
pub fn print_header(s: &Styled) {
    if is_quiet() {
        return;
    }
    eprintln!();
    eprintln!(
        "  {} {}",
        s.bold("Cinegraph"),
        s.dim(&format!("v{}", env!("CARGO_PKG_VERSION")))
    );
    eprintln!();
}

/// Print a labelled value line, e.g. `    OK movies          2000`.
pub fn print_check(symbol: &str, label: &str, value: &str) {
    eprintln!("    {symbol} {label:<16} {value}");
}

/// Format a millisecond duration, e.g. `0.412 ms` or `1.38 s`.
pub fn format_ms(ms: f64) -> String {
    if ms >= 1000.0 {
        format!("{:.2} s", ms / 1000.0)
    } else {
        format!("{ms:.3} ms")
    }
}

/// Similarity as a fixed-width score.
pub fn format_score(score: f64) -> String {
    format!("{score:.3}")
}

/// Check if --quiet mode is active.
pub fn is_quiet() -> bool {
    std::env::var_os("CINEGRAPH_QUIET").is_some()
}

/// Check if --verbose mode is active.
pub fn is_verbose() -> bool {
    std::env::var_os("CINEGRAPH_VERBOSE").is_some()
}

/// Check if --json mode is active.
pub fn is_json() -> bool {
    std::env::var_os("CINEGRAPH_JSON").is_some()
}

/// Print JSON output to stdout.
pub fn print_json(value: &serde_json::Value) {
    if let Ok(s) = serde_json::to_string_pretty(value) {
        println!("{s}");
    }
}
