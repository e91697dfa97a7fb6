use std::path::PathBuf;

use thiserror::Error;

/// Number of report characters echoed back when no category could be parsed.
pub const INPUT_PREVIEW_CHARS: usize = 500;

#[derive(Error, Debug)]
pub enum LocsGraphError {
    #[error("No allocator data found in input file")]
    NoCategories {
        /// Leading slice of the raw report, for debugging the upstream format.
        preview: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl LocsGraphError {
    /// Build a `NoCategories` error carrying the first characters of the report.
    #[must_use]
    pub fn no_categories(content: &str) -> Self {
        Self::NoCategories {
            preview: content.chars().take(INPUT_PREVIEW_CHARS).collect(),
        }
    }

    /// Short category tag used as the headline of stderr diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::NoCategories { .. } => "Input",
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } | Self::FileWrite { .. } => "IO",
            Self::JsonSerialize(_) => "Output",
        }
    }

    /// Headline message without the type prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::FileRead { path, .. } => format!("Failed to read {}", path.display()),
            Self::FileWrite { path, .. } => format!("Failed to write {}", path.display()),
            _ => self.to_string(),
        }
    }

    /// Secondary line shown under the headline, if any.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::NoCategories { preview } => Some(format!("Input content:\n{preview}")),
            Self::FileRead { source, .. } | Self::FileWrite { source, .. } => {
                Some(source.to_string())
            }
            _ => None,
        }
    }

    /// Actionable hint for the user, if any.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::NoCategories { .. } => Some(
                "Expected section headers such as 'glibc' or 'smalloc', each followed by a tokei 'Total' row",
            ),
            Self::TomlParse(_) => Some("Check the TOML syntax of the configuration file"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LocsGraphError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
