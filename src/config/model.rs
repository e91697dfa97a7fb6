use serde::{Deserialize, Serialize};

use crate::error::{LocsGraphError, Result};
use crate::output::svg::{ChartLayout, DEFAULT_SOURCE, DEFAULT_TITLE, Margins};

/// Root of `.locs-graph.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub chart: ChartConfig,
}

/// Chart canvas, text and provenance settings. Every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ChartConfig {
    #[serde(default = "default_width")]
    pub width: f64,

    #[serde(default = "default_height")]
    pub height: f64,

    #[serde(default = "default_margin_top")]
    pub margin_top: f64,

    #[serde(default = "default_margin_bottom")]
    pub margin_bottom: f64,

    #[serde(default = "default_margin_left")]
    pub margin_left: f64,

    #[serde(default = "default_margin_right")]
    pub margin_right: f64,

    /// Heading drawn above the plot.
    #[serde(default = "default_title")]
    pub title: String,

    /// Shown as `Source: <source>` in the footer.
    #[serde(default = "default_source")]
    pub source: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            margin_top: default_margin_top(),
            margin_bottom: default_margin_bottom(),
            margin_left: default_margin_left(),
            margin_right: default_margin_right(),
            title: default_title(),
            source: default_source(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub const fn layout(&self) -> ChartLayout {
        ChartLayout::new(
            self.width,
            self.height,
            Margins {
                top: self.margin_top,
                bottom: self.margin_bottom,
                left: self.margin_left,
                right: self.margin_right,
            },
        )
    }
}

impl Config {
    /// Check that the chart settings describe a drawable canvas.
    ///
    /// # Errors
    /// Returns `LocsGraphError::Config` if any dimension is not finite or
    /// negative, or if the margins leave no room for the plot.
    pub fn validate(&self) -> Result<()> {
        let chart = &self.chart;
        let fields = [
            ("width", chart.width),
            ("height", chart.height),
            ("margin_top", chart.margin_top),
            ("margin_bottom", chart.margin_bottom),
            ("margin_left", chart.margin_left),
            ("margin_right", chart.margin_right),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(LocsGraphError::Config(format!(
                    "chart.{name} must be a non-negative number, got {value}"
                )));
            }
        }

        let layout = chart.layout();
        if layout.chart_width() <= 0.0 {
            return Err(LocsGraphError::Config(format!(
                "chart.margin_left + chart.margin_right ({}) must be smaller than chart.width ({})",
                chart.margin_left + chart.margin_right,
                chart.width
            )));
        }
        if layout.chart_height() <= 0.0 {
            return Err(LocsGraphError::Config(format!(
                "chart.margin_top + chart.margin_bottom ({}) must be smaller than chart.height ({})",
                chart.margin_top + chart.margin_bottom,
                chart.height
            )));
        }

        Ok(())
    }
}

const fn default_width() -> f64 {
    750.0
}

const fn default_height() -> f64 {
    500.0
}

const fn default_margin_top() -> f64 {
    60.0
}

const fn default_margin_bottom() -> f64 {
    120.0
}

const fn default_margin_left() -> f64 {
    80.0
}

const fn default_margin_right() -> f64 {
    40.0
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
