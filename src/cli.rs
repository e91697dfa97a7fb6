use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "locs-graph")]
#[command(
    author,
    version,
    about = "Summarize a tokei allocator report and draw a lines-of-code bar chart"
)]
#[command(long_about = "Reads a text report made of per-allocator tokei tables, \
    prints the code-line total of each allocator and optionally renders them as an SVG bar chart.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - No allocator data found in the report\n  \
    2 - Configuration or file access error")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Tokei report to read
    pub input: PathBuf,

    /// Commit hash shown under the chart (first 12 characters)
    #[arg(long)]
    pub commit: Option<String>,

    /// Working tree status shown under the chart (e.g. "clean")
    #[arg(long)]
    pub git_status: Option<String>,

    /// Write an SVG bar chart to this path
    #[arg(long, value_name = "PATH")]
    pub graph: Option<PathBuf>,

    /// CPU description shown under the chart
    #[arg(long)]
    pub cpu: Option<String>,

    /// Operating system description shown under the chart
    #[arg(long)]
    pub os: Option<String>,

    /// Console summary format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
