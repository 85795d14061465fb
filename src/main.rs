//! Fury CLI - inspect a play log and query moves from the command line.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Fury - a deterministic state engine for a hidden-movement pursuit game
#[derive(Parser, Debug)]
#[command(name = "fury")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Map description in JSON (default: built-in Europe)
    #[arg(long, global = true)]
    map: Option<PathBuf>,

    /// Rule overrides in JSON (default: standard rules)
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a log and show the resulting state
    State {
        /// Play log (seven-character plays separated by spaces)
        #[arg(default_value = "")]
        log: String,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// List places a player can reach in one move
    Reachable {
        /// Play log
        #[arg(default_value = "")]
        log: String,

        /// Player (G, S, H, M or D)
        #[arg(short, long)]
        player: cli::PlayerArg,

        /// Origin place code (default: the player's current location)
        #[arg(long)]
        from: Option<String>,

        /// Round to query (default: the player's next move)
        #[arg(long)]
        round: Option<usize>,

        /// Allow road travel
        #[arg(long)]
        road: bool,

        /// Allow rail travel
        #[arg(long)]
        rail: bool,

        /// Allow boat travel
        #[arg(long)]
        boat: bool,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Find the shortest route for a hunter
    Path {
        /// Play log
        #[arg(default_value = "")]
        log: String,

        /// Hunter (G, S, H or M)
        #[arg(short, long)]
        player: cli::PlayerArg,

        /// Destination place code
        #[arg(long)]
        to: String,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// List legal moves for whoever acts next
    Moves {
        /// Play log
        #[arg(default_value = "")]
        log: String,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "info" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = cli::Setup::load(args.map.as_deref(), args.rules.as_deref()).and_then(|setup| {
        match args.command {
            Commands::State { log, format } => cli::state::execute(&setup, &log, format),
            Commands::Reachable {
                log,
                player,
                from,
                round,
                road,
                rail,
                boat,
                format,
            } => cli::reachable::execute(
                &setup,
                &log,
                player.into(),
                from.as_deref(),
                round,
                cli::transport_mask(road, rail, boat),
                format,
            ),
            Commands::Path {
                log,
                player,
                to,
                format,
            } => cli::path::execute(&setup, &log, player.into(), &to, format),
            Commands::Moves { log, format } => cli::moves::execute(&setup, &log, format),
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
