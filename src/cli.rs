//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::bundle_log::LogFormat;

/// Blueprint sorter - file scanned blueprints into a project archive
///
/// Shows each scanned PDF, asks for its project, building, date, title and
/// sheet number, and moves it into the archive.
#[derive(Parser, Debug)]
#[command(
    name = "blueprint-sorter",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Sort scanned blueprint PDFs into a project archive",
    long_about = "Blueprint sorter walks the scanner's output directory oldest first, previews \
                  each scan, asks which project, building and date it belongs to, and files it \
                  under {output}/{building}/{date}_{project}/. Every finished bundle is appended \
                  to a JSON log.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  blueprint-sorter\n    \
                  blueprint-sorter sort --input ~/scans --output ~/archive\n    \
                  blueprint-sorter history\n    \
                  blueprint-sorter config"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sort the scans in the input directory (default)
    Sort,

    /// List bundles recorded in the log
    History(HistoryArgs),

    /// Print the effective configuration
    Config,

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Settings that override the configuration file
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigArgs {
    /// Configuration file (defaults to the user config directory)
    #[arg(long, short = 'c', global = true, env = "BLUEPRINT_SORTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory the scanner writes *.PDF files to
    #[arg(long, global = true, value_name = "DIR")]
    pub input: Option<PathBuf>,

    /// Root of the sorted archive
    #[arg(long, global = true, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// PDF viewer used to preview each scan
    #[arg(long, global = true, value_name = "PROGRAM", conflicts_with = "no_preview")]
    pub viewer: Option<PathBuf>,

    /// Do not open a preview for each scan
    #[arg(long, global = true)]
    pub no_preview: bool,

    /// Bundle log file
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Where the previous log is copied on startup
    #[arg(long, global = true, value_name = "FILE")]
    pub backup_log_file: Option<PathBuf>,

    /// Layout of new log records
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,
}

/// Arguments for the history command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List logged bundles:\n    blueprint-sorter history\n\n\
                  Include page titles:\n    blueprint-sorter history --detailed\n\n\
                  Read the backup log:\n    blueprint-sorter history --backup")]
pub struct HistoryArgs {
    /// Show the title of every page
    #[arg(long)]
    pub detailed: bool,

    /// Read the backup log instead of the current one
    #[arg(long)]
    pub backup: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    blueprint-sorter completions --shell bash > ~/.bash_completion.d/blueprint-sorter\n\n\
                  Generate zsh completions:\n    blueprint-sorter completions --shell zsh > ~/.zfunc/_blueprint-sorter")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
