//! # longterm-cli
//!
//! Command-line interface for long-term goals.
//!
//! - `longterm add/complete/restore/delete` — change the goal list
//! - `longterm list` — show active and completed goals
//! - `longterm config` / `longterm theme` — inspect the effective settings

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::Context;

/// Track long-term goals from the terminal.
#[derive(Parser)]
#[command(name = "longterm", version, about)]
struct Cli {
    /// Directory holding goals and config.toml (defaults to the platform data dir).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file (defaults to <data-dir>/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log store activity to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Goal(commands::goal::GoalCommands),
    /// Print the effective configuration as TOML.
    Config,
    /// Print the theme palette.
    Theme,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = Context::resolve(cli.data_dir, cli.config)?;
    tracing::debug!(data_dir = %ctx.data_dir.display(), "resolved data directory");

    match &cli.command {
        Commands::Goal(command) => commands::goal::execute(command, &ctx),
        Commands::Config => commands::config::show_config(&ctx),
        Commands::Theme => commands::config::show_theme(&ctx),
    }
}

/// Logs go to stderr so they never mix with command output on stdout.
/// `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
