//! Colored diagnostics on stderr.
//!
//! Format: `✖ Error Type: message` / `  × detail` / `  help: suggestion`

use std::io::{IsTerminal, Write};

use crate::error::LocsGraphError;

use super::ColorMode;
use super::ansi;

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    /// Creates a new error output formatter with the specified color mode.
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    /// Creates an error output formatter that auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(ColorMode::Auto)
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // NO_COLOR presence (any value) disables color: https://no-color.org
                std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
            }
        }
    }

    /// Prints an error with its type tag, detail and suggestion.
    pub fn print(&self, err: &LocsGraphError) {
        let detail = err.detail();
        let mut stderr = std::io::stderr().lock();
        self.write_error(
            &mut stderr,
            err.error_type(),
            &err.message(),
            detail.as_deref(),
            err.suggestion(),
        );
    }

    /// Writes error to a writer (for testing).
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Nothing sensible to do if stderr itself is gone.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }

        if let Some(d) = detail {
            // Multi-line details (such as an input preview) stay indented under the marker.
            let mut lines = d.lines();
            let first = lines.next().unwrap_or_default();
            if self.use_colors {
                let _ = writeln!(w, "  {}× {first}", ansi::DIM);
            } else {
                let _ = writeln!(w, "  × {first}");
            }
            for line in lines {
                let _ = writeln!(w, "    {line}");
            }
            if self.use_colors {
                let _ = write!(w, "{}", ansi::RESET);
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }

    /// Creates an error output formatter with explicit color control (for testing).
    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

/// Convenience function: prints an error using the given color mode.
pub fn print_error_full(err: &LocsGraphError, mode: ColorMode) {
    ErrorOutput::new(mode).print(err);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
