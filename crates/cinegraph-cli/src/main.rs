// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use cinegraph_cli::cli::output::Styled;
use cinegraph_cli::cli::{benchmark_cmd, build_cmd, menu, recommend_cmd, session};
use cinegraph_cli::settings::{Overrides, Settings};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cinegraph",
    version,
    about = "Movie recommendations ranked by shortest paths through a similarity graph"
)]
struct Cli {
    /// Graph file to load and save [default: ~/.cinegraph/graph.json]
    #[arg(long, global = true)]
    graph: Option<PathBuf>,

    /// Offline catalog: a JSON array of movies used instead of TMDB
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// TMDB API key (overrides TMDB_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Only print results and errors
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch popular movies, build the similarity graph and save it
    Build {
        /// Number of popular movies to fetch
        #[arg(long)]
        pool: Option<usize>,
        /// Neighbors kept per movie
        #[arg(long)]
        neighbors: Option<usize>,
    },
    /// Interactive recommendations by title
    Recommend {
        /// Show the chain of movies behind each recommendation
        #[arg(long)]
        explain: bool,
        /// Recommendations per query
        #[arg(long)]
        top_k: Option<usize>,
    },
    /// Compare graph ranking against direct-similarity ranking
    Benchmark {
        /// Graph index of the source movie
        #[arg(long)]
        source: usize,
        /// Number of results per ranking
        #[arg(long, default_value_t = 10)]
        k: usize,
    },
}

fn init_tracing(cli: &Cli) {
    let default = if cli.verbose {
        "cinegraph=debug,cinegraph_cli=debug"
    } else if cli.quiet {
        "cinegraph=warn,cinegraph_cli=warn"
    } else {
        "cinegraph=info,cinegraph_cli=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    if cli.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }
}

fn export_output_flags(cli: &Cli) {
    if cli.json {
        std::env::set_var("CINEGRAPH_JSON", "1");
    }
    if cli.quiet {
        std::env::set_var("CINEGRAPH_QUIET", "1");
    }
    if cli.verbose {
        std::env::set_var("CINEGRAPH_VERBOSE", "1");
    }
    if cli.no_color {
        std::env::set_var("CINEGRAPH_NO_COLOR", "1");
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut overrides = Overrides {
        graph: cli.graph,
        catalog: cli.catalog,
        api_key: cli.api_key,
        ..Default::default()
    };
    match &cli.command {
        Some(Commands::Build { pool, neighbors }) => {
            overrides.pool_size = *pool;
            overrides.neighbors = *neighbors;
        }
        Some(Commands::Recommend { top_k, .. }) => overrides.top_k = *top_k,
        _ => {}
    }

    let settings = Settings::resolve(&overrides)?;
    let catalog = session::open_catalog(&settings)?;
    let catalog = catalog.as_deref();

    match cli.command {
        None => menu::run(&settings, catalog).await,
        Some(Commands::Build { .. }) => build_cmd::run(&settings, catalog).await,
        Some(Commands::Recommend { explain, .. }) => {
            let recommender = session::load_or_build(&settings, catalog).await?;
            recommend_cmd::run(&settings, recommender, catalog, explain).await
        }
        Some(Commands::Benchmark { source, k }) => {
            let recommender = session::load_or_build(&settings, catalog).await?;
            benchmark_cmd::run(&recommender, source, k)
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    export_output_flags(&cli);
    init_tracing(&cli);

    if let Err(e) = run(cli).await {
        let s = Styled::new();
        eprintln!("  {} {e:#}", s.fail_sym());
        std::process::exit(1);
    }
}
