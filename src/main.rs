//! Blueprint sorter
//!
//! Interactive tool that files scanned blueprint PDFs into an archive laid out
//! by building, cover sheet date and project, and keeps a JSON log of every
//! bundle of pages it files.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod bundle_log;
mod cli;
mod commands;
mod common;
mod config;
mod domain;
mod error;
mod operator;
mod preview;
mod resolver;
mod scan;
mod session;

use cli::{Cli, Commands};

/// Log to stderr so diagnostics never interleave with the prompts on stdout
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        None | Some(Commands::Sort) => commands::sort::run(&cli.config),
        Some(Commands::History(args)) => commands::history::run(&cli.config, &args),
        Some(Commands::Config) => commands::config::run(&cli.config),
        Some(Commands::Version) => commands::version::run(),
        Some(Commands::Completions(args)) => commands::completions::run(&args),
    };

    if let Err(e) = result {
        eprintln!("{:?}", miette::Report::new(e));
        std::process::exit(1);
    }
}
