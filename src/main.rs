// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Graphyard CLI - shortest paths and spanning forests from the terminal

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use graphyard::commands::{self, Style};
use graphyard::config;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "graphyard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "GRAPHYARD_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", global = true)]
    no_color: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bellman-Ford: read `V E` and `E` triples `u v w`, print distances and paths
    #[command(visible_alias = "bellman-ford")]
    ShortestPath {
        /// Source vertex (defaults to the configured source)
        #[arg(short, long)]
        source: Option<usize>,

        /// Input file (stdin if not specified)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Kruskal: read `N` and an `N x N` weight matrix, print the spanning forest
    #[command(visible_alias = "kruskal")]
    Mst {
        /// Input file (stdin if not specified)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Read `N M` and `M` undirected triples instead of a matrix
        #[arg(long)]
        list: bool,
    },

    /// Build a graph from an edge list and export it
    Export {
        /// Input file (stdin if not specified)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format (dot, json)
        #[arg(short, long, default_value = "dot")]
        format: String,

        /// Treat edges as one-way
        #[arg(long)]
        directed: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the effective configuration
    Config,

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = config::load(cli.config.as_deref())?;

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => "error",
        0 => settings.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let style = Style {
        json: cli.json || settings.json,
        color: settings.color && !cli.no_color && std::io::stdout().is_terminal(),
    };

    // Execute command
    match cli.command {
        Commands::ShortestPath { source, input } => {
            commands::shortest_path::run(input, source.unwrap_or(settings.source), style)
        }
        Commands::Mst { input, list } => commands::mst::run(input, list, style),
        Commands::Export {
            input,
            format,
            directed,
            output,
        } => commands::export::run(input, &format, directed, output),
        Commands::Config => commands::config::run(&settings),
        Commands::Completions { shell } => commands::completions::run(shell, &mut Cli::command()),
    }
}
