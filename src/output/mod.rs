mod error_output;
mod format;
mod json;
pub mod svg;
mod text;

pub use error_output::{ErrorOutput, print_error_full};
pub use format::{format_thousands, xml_escape};
pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::error::Result;
use crate::report::CategoryTotal;

/// Trait for formatting the ordered category totals for the console.
pub trait SummaryFormatter {
    /// Format the totals into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, totals: &[CategoryTotal]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
