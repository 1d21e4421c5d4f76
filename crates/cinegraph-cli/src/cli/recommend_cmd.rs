// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! Interactive recommendation REPL.
//!
//! Each line is either a slash command or a free-text title. A title is
//! searched in the catalog (or among graph nodes when running offline),
//! several matches are disambiguated by number, and the seed's top-K
//! recommendations by graph distance are printed. Seeds not yet in the graph
//! are fetched in full and connected with a single-item insert. Catalog
//! failures are reported and the loop continues.

use crate::cli::complete::{self, CinegraphHelper, COMMANDS};
use crate::cli::output::{self, format_score, Styled};
use crate::settings::Settings;
use anyhow::{Context, Result};
use cinegraph::{Catalog, CatalogError, Movie, Recommendation, Recommender};
use rustyline::config::CompletionType;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};
use std::path::PathBuf;
use tracing::{info, warn};

/// Result of one title query.
#[derive(Debug)]
pub enum QueryOutcome {
    NoResults,
    /// Several matches and the user picked none.
    Cancelled,
    Recommended {
        seed: usize,
        recommendations: Vec<Recommendation>,
    },
}

/// State kept across REPL lines.
pub struct Session<'a> {
    recommender: Recommender,
    catalog: Option<&'a dyn Catalog>,
    graph_path: PathBuf,
    explain: bool,
    /// Graph gained nodes since it was last written.
    dirty: bool,
}

impl<'a> Session<'a> {
    pub fn new(
        recommender: Recommender,
        catalog: Option<&'a dyn Catalog>,
        graph_path: PathBuf,
        explain: bool,
    ) -> Self {
        Self {
            recommender,
            catalog,
            graph_path,
            explain,
            dirty: false,
        }
    }

    pub fn recommender(&self) -> &Recommender {
        &self.recommender
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Title matches, from the catalog if there is one, else from the graph.
    pub async fn candidates(&self, query: &str) -> Result<Vec<Movie>, CatalogError> {
        let limit = self.recommender.config().search_limit;
        match self.catalog {
            Some(catalog) => catalog.search_by_title(query, limit).await,
            None => {
                let graph = self.recommender.graph();
                Ok(graph
                    .find_by_title(query)
                    .into_iter()
                    .take(limit)
                    .map(|i| graph.movie(i).clone())
                    .collect())
            }
        }
    }

    /// Graph index of `movie`, inserting it when it is new.
    pub async fn seed_index(&mut self, movie: Movie) -> Result<usize> {
        if let Some(index) = self.recommender.index_of(movie.tmdb_id) {
            return Ok(index);
        }

        // Search hits lack genres; fetch the full record before connecting.
        let full = match self.catalog {
            Some(catalog) => match catalog.fetch_by_id(movie.tmdb_id).await {
                Ok(full) => full,
                Err(e) => {
                    warn!(id = movie.tmdb_id, error = %e, "could not fetch full record, using search result");
                    movie
                }
            },
            None => movie,
        };

        let title = full.name.clone();
        let index = self
            .recommender
            .ensure_indexed(full)
            .with_context(|| format!("failed to add '{title}' to the graph"))?;
        self.dirty = true;
        info!(index, %title, "seed added to graph");
        Ok(index)
    }

    /// Run a title query. `choose` picks among several matches.
    pub async fn query<F>(&mut self, text: &str, choose: F) -> Result<QueryOutcome>
    where
        F: FnOnce(&[Movie]) -> Option<usize>,
    {
        let mut matches = self.candidates(text).await?;
        let picked = match matches.len() {
            0 => return Ok(QueryOutcome::NoResults),
            1 => 0,
            n => match choose(&matches) {
                Some(i) if i < n => i,
                _ => return Ok(QueryOutcome::Cancelled),
            },
        };

        let seed = self.seed_index(matches.swap_remove(picked)).await?;
        let recommendations = self.recommender.recommend(seed)?;
        Ok(QueryOutcome::Recommended {
            seed,
            recommendations,
        })
    }

    /// Write the graph if it changed.
    pub fn save_if_dirty(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        self.save()
    }

    fn save(&mut self) -> Result<()> {
        self.recommender
            .graph()
            .save(&self.graph_path)
            .with_context(|| format!("failed to save graph: {}", self.graph_path.display()))?;
        self.dirty = false;
        Ok(())
    }
}

/// Parse a 1-based pick from the disambiguation prompt.
pub fn parse_selection(input: &str, count: usize) -> Option<usize> {
    let n: usize = input.trim().parse().ok()?;
    (1..=count).contains(&n).then(|| n - 1)
}

fn is_exit(line: &str) -> bool {
    matches!(line, "exit" | "quit" | "/exit" | "/quit" | "/q")
}

fn print_help() {
    let s = Styled::new();
    eprintln!();
    eprintln!("  {}", s.bold("Commands:"));
    eprintln!();
    for (cmd, desc) in COMMANDS {
        eprintln!("    {:<20} {}", s.cyan(cmd), s.dim(desc));
    }
    eprintln!();
    eprintln!("  {}", s.dim("Anything else is searched as a movie title."));
    eprintln!();
}

fn print_stats(session: &Session<'_>) {
    let s = Styled::new();
    let graph = session.recommender.graph();
    let config = session.recommender.config();
    let on = |b: bool| if b { "on" } else { "off" };

    eprintln!();
    output::print_check(s.ok_sym(), "movies", &graph.len().to_string());
    output::print_check(s.ok_sym(), "edges", &graph.edge_count().to_string());
    output::print_check(s.ok_sym(), "neighbors (K)", &config.neighbors.to_string());
    output::print_check(s.ok_sym(), "top-k", &config.top_k.to_string());
    output::print_check(s.ok_sym(), "catalog", if session.catalog.is_some() { "connected" } else { "offline" });
    output::print_check(s.ok_sym(), "explain", on(session.explain));
    output::print_check(s.ok_sym(), "unsaved nodes", on(session.dirty));
    output::print_check(s.ok_sym(), "graph file", &session.graph_path.display().to_string());
    eprintln!();
}

fn print_matches(matches: &[Movie]) {
    let s = Styled::new();
    eprintln!("  Several movies match:");
    for (i, movie) in matches.iter().enumerate() {
        eprintln!("    {} {}", s.cyan(&format!("{:>2}.", i + 1)), movie.label());
    }
}

fn print_recommendations(session: &Session<'_>, seed: usize, recs: &[Recommendation]) {
    let graph = session.recommender.graph();

    if output::is_json() {
        output::print_json(&serde_json::json!({
            "seed": graph.movie(seed),
            "recommendations": recs,
        }));
        return;
    }

    let s = Styled::new();
    println!();
    println!("  Because you picked {}:", s.bold(&graph.movie(seed).label()));
    if recs.is_empty() {
        println!("    {}", s.dim("nothing reachable from this movie yet"));
    }
    for (rank, rec) in recs.iter().enumerate() {
        let label = graph.movie(rec.index).label();
        let distance = if output::is_verbose() {
            format!("  {} {:.3}", s.dim("distance"), rec.distance)
        } else {
            String::new()
        };
        println!(
            "    {:>2}. {:<48} {} {}{distance}",
            rank + 1,
            label,
            s.dim("similarity"),
            format_score(rec.similarity)
        );
        if session.explain && rec.path.len() > 2 {
            let chain: Vec<&str> = rec
                .path
                .iter()
                .map(|&i| graph.movie(i).name.as_str())
                .collect();
            println!("        {}", s.dim(&chain.join(" -> ")));
        }
    }
    println!();
}

/// Handle one line. Returns `true` when the REPL should exit.
async fn execute(
    line: &str,
    session: &mut Session<'_>,
    rl: &mut Editor<CinegraphHelper, DefaultHistory>,
) -> Result<bool> {
    if is_exit(line) {
        return Ok(true);
    }

    if let Some(cmd) = line.strip_prefix('/') {
        let s = Styled::new();
        match cmd.split_whitespace().next().unwrap_or("") {
            "" | "help" | "h" | "?" => print_help(),
            "stats" => print_stats(session),
            "explain" => {
                session.explain = !session.explain;
                eprintln!("  explain {}", if session.explain { "on" } else { "off" });
            }
            "save" => {
                session.save()?;
                eprintln!("  {} saved {}", s.ok_sym(), session.graph_path.display());
            }
            other => match complete::suggest_command(other) {
                Some(suggestion) => eprintln!(
                    "  {} Unknown command '/{other}'. Did you mean {}?",
                    s.warn_sym(),
                    s.bold(suggestion)
                ),
                None => eprintln!(
                    "  {} Unknown command '/{other}'. Type {} for commands.",
                    s.warn_sym(),
                    s.bold("/help")
                ),
            },
        }
        return Ok(false);
    }

    let outcome = session
        .query(line, |matches| {
            print_matches(matches);
            let answer = rl.readline(&format!("  pick 1-{}> ", matches.len())).ok()?;
            parse_selection(&answer, matches.len())
        })
        .await;

    let s = Styled::new();
    match outcome {
        Ok(QueryOutcome::Recommended {
            seed,
            recommendations,
        }) => print_recommendations(session, seed, &recommendations),
        Ok(QueryOutcome::NoResults) => {
            eprintln!("  {} No movies found for '{line}'. Try another title.", s.warn_sym())
        }
        Ok(QueryOutcome::Cancelled) => eprintln!("  {}", s.dim("No selection made.")),
        Err(e) => eprintln!("  {} {e:#}", s.fail_sym()),
    }
    Ok(false)
}

/// Run the REPL until an exit sentinel or end of input.
pub async fn run(
    settings: &Settings,
    recommender: Recommender,
    catalog: Option<&dyn Catalog>,
    explain: bool,
) -> Result<()> {
    let s = Styled::new();
    output::print_header(&s);
    if !output::is_quiet() {
        eprintln!(
            "    {} movies loaded. Type a title, {} for commands, {} to quit.",
            recommender.graph().len(),
            s.cyan("/help"),
            s.dim("exit")
        );
        eprintln!();
    }

    let config = Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .completion_type(CompletionType::List)
        .build();
    let mut rl: Editor<CinegraphHelper, DefaultHistory> = Editor::with_config(config)?;
    rl.set_helper(Some(CinegraphHelper));

    let hist_path = settings.history_path();
    if hist_path.exists() {
        let _ = rl.load_history(&hist_path);
    }

    let mut session = Session::new(recommender, catalog, settings.graph_path.clone(), explain);
    let prompt = if output::color_enabled() {
        "\x1b[36mcinegraph>\x1b[0m "
    } else {
        "cinegraph> "
    };

    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match execute(line, &mut session, &mut rl).await {
                    Ok(true) => break,
                    Ok(false) => {}
                    Err(e) => eprintln!("  {} {e:#}", s.fail_sym()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("  {} Type {} to quit.", s.dim("(Ctrl+C)"), s.bold("exit"));
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("  Error: {err}");
                break;
            }
        }
    }

    if let Err(e) = session.save_if_dirty() {
        eprintln!("  {} {e:#}", s.fail_sym());
    }
    let _ = std::fs::create_dir_all(&settings.home);
    let _ = rl.save_history(&hist_path);
    eprintln!("  {}", s.dim("Goodbye!"));
    Ok(())
}
