// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! `cinegraph benchmark`: graph ranking vs. the heap baseline.

use crate::cli::output::{self, format_ms, format_score, Styled};
use anyhow::{Context, Result};
use cinegraph::benchmark::AlgorithmRun;
use cinegraph::{Comparison, Recommender};

/// Render the comparison as plain text.
pub fn render(report: &Comparison, s: &Styled) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\n  {} #{} {} ({} movies, K = {})\n\n",
        s.bold("Benchmark from"),
        report.source,
        report.source_title,
        report.total_movies,
        report.k
    ));

    for run in [&report.graph, &report.heap] {
        out.push_str(&format!("    {:<26} {:>12}\n", run.name, format_ms(run.elapsed_ms)));
    }
    match report.speedup() {
        Some(ratio) => out.push_str(&format!("    {:<26} {:>12}\n", "graph / heap time", format!("{ratio:.2}x"))),
        None => out.push_str(&format!("    {:<26} {:>12}\n", "graph / heap time", "n/a")),
    }
    out.push('\n');

    for run in [&report.graph, &report.heap] {
        render_run(&mut out, run, s);
    }

    out.push_str(&format!(
        "  Overlap: {}/{} ({:.0}%)\n",
        report.overlap, report.k, report.consistency
    ));
    out.push_str(&format!(
        "  {}\n",
        s.dim("The rankings optimize different objectives; low overlap is expected.")
    ));
    out
}

fn render_run(out: &mut String, run: &AlgorithmRun, s: &Styled) {
    out.push_str(&format!("  {}\n", s.bold(run.name)));
    if run.ranked.is_empty() {
        out.push_str(&format!("    {}\n", s.dim("(no results)")));
    }
    for (rank, movie) in run.ranked.iter().enumerate() {
        out.push_str(&format!(
            "    {:>2}. {:<44} {}\n",
            rank + 1,
            movie.title,
            format_score(movie.similarity)
        ));
    }
    out.push('\n');
}

/// Run the comparison and print it (or its JSON form).
pub fn run(recommender: &Recommender, source: usize, k: usize) -> Result<()> {
    let report = recommender
        .compare(source, k)
        .with_context(|| format!("cannot benchmark from movie #{source} with K = {k}"))?;

    if output::is_json() {
        output::print_json(&serde_json::to_value(&report)?);
    } else {
        print!("{}", render(&report, &Styled::new()));
    }
    Ok(())
}
