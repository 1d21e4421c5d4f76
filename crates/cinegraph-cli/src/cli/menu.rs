// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! Top-level menu shown when `cinegraph` runs without a subcommand.

use crate::cli::output::{self, Styled};
use crate::cli::{benchmark_cmd, recommend_cmd, session};
use crate::settings::Settings;
use anyhow::Result;
use cinegraph::Catalog;
use rustyline::DefaultEditor;

/// Menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Interactive,
    Benchmark,
    Exit,
}

impl Choice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" | "i" | "interactive" => Some(Self::Interactive),
            "2" | "b" | "benchmark" => Some(Self::Benchmark),
            "3" | "q" | "exit" | "quit" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Parse `<source index> <k>`, falling back to `default_k` when K is omitted.
pub fn parse_benchmark_args(input: &str, default_k: usize) -> Option<(usize, usize)> {
    let mut parts = input.split_whitespace();
    let source = parts.next()?.parse().ok()?;
    let k = match parts.next() {
        Some(k) => k.parse().ok()?,
        None => default_k,
    };
    parts.next().is_none().then_some((source, k))
}

fn print_menu(s: &Styled) {
    eprintln!("  {}", s.bold("What would you like to do?"));
    eprintln!("    {} Get recommendations for a movie", s.cyan("1."));
    eprintln!("    {} Benchmark graph vs. heap ranking", s.cyan("2."));
    eprintln!("    {} Exit", s.cyan("3."));
}

pub async fn run(settings: &Settings, catalog: Option<&dyn Catalog>) -> Result<()> {
    let s = Styled::new();
    output::print_header(&s);

    let recommender = session::load_or_build(settings, catalog).await?;

    let mut rl = DefaultEditor::new()?;
    loop {
        print_menu(&s);
        let Ok(line) = rl.readline("  choice> ") else {
            return Ok(());
        };

        match Choice::parse(&line) {
            Some(Choice::Interactive) => {
                return recommend_cmd::run(settings, recommender, catalog, false).await;
            }
            Some(Choice::Benchmark) => {
                let prompt = format!(
                    "  source index (0-{}) and K [{}]> ",
                    recommender.graph().len().saturating_sub(1),
                    settings.recommender.top_k
                );
                let Ok(line) = rl.readline(&prompt) else {
                    return Ok(());
                };
                match parse_benchmark_args(&line, settings.recommender.top_k) {
                    Some((source, k)) => {
                        if let Err(e) = benchmark_cmd::run(&recommender, source, k) {
                            eprintln!("  {} {e:#}", s.fail_sym());
                        }
                    }
                    None => eprintln!("  {} Expected a source index and an optional K.", s.warn_sym()),
                }
            }
            Some(Choice::Exit) => return Ok(()),
            None => eprintln!("  {} Pick 1, 2 or 3.", s.warn_sym()),
        }
        eprintln!();
    }
}
