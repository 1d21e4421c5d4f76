// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! Tab completion and hints for the recommendation REPL.
//!
//! Only slash commands are completed; anything else is a title query.

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::Helper;

/// All REPL slash commands.
pub const COMMANDS: &[(&str, &str)] = &[
    ("/help", "Show available commands"),
    ("/stats", "Show graph size and settings"),
    ("/explain", "Toggle showing the path behind each recommendation"),
    ("/save", "Write the graph to disk now"),
    ("/exit", "Quit the REPL"),
];

/// Completion candidates for a partially typed command.
pub fn complete_command(input: &str) -> Vec<Pair> {
    if !input.starts_with('/') || input.contains(' ') {
        return Vec::new();
    }
    COMMANDS
        .iter()
        .filter(|(cmd, _)| cmd.starts_with(input))
        .map(|(cmd, desc)| Pair {
            display: format!("{cmd:<12} {desc}"),
            replacement: format!("{cmd} "),
        })
        .collect()
}

/// Closest known command for a mistyped one (shared prefix of 2+ chars).
pub fn suggest_command(typed: &str) -> Option<&'static str> {
    let head = typed.trim_start_matches('/').get(..2)?;
    COMMANDS
        .iter()
        .map(|(cmd, _)| *cmd)
        .find(|cmd| cmd[1..].starts_with(head))
}

/// REPL helper providing tab completion.
#[derive(Default)]
pub struct CinegraphHelper;

impl Completer for CinegraphHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let input = line.get(..pos).unwrap_or(line);
        Ok((0, complete_command(input)))
    }
}

impl Hinter for CinegraphHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        if pos < line.len() || !line.starts_with('/') || line.contains(' ') {
            return None;
        }
        COMMANDS
            .iter()
            .find(|(cmd, _)| cmd.starts_with(line) && *cmd != line)
            .map(|(cmd, _)| cmd[line.len()..].to_string())
    }
}

impl Highlighter for CinegraphHelper {}
impl Validator for CinegraphHelper {}
impl Helper for CinegraphHelper {}
