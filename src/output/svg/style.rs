//! SVG styling primitives: colors, CSS classes and text anchoring.

use std::fmt;
use std::fmt::Write;

/// Canvas background fill.
pub const BACKGROUND_COLOR: &str = "#fafafa";

/// Hex color for a fill or stroke (e.g., "#66bb6a").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartColor(String);

impl ChartColor {
    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self(color.to_string())
    }

    /// Convert to CSS value string.
    #[must_use]
    pub fn to_css(&self) -> &str {
        &self.0
    }
}

/// Style classes used by chart elements, declared once in the document `<style>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CssClass {
    Bar,
    Axis,
    Grid,
    Label,
    Value,
    Title,
    Metadata,
}

impl CssClass {
    pub const ALL: [Self; 7] = [
        Self::Bar,
        Self::Axis,
        Self::Grid,
        Self::Label,
        Self::Value,
        Self::Title,
        Self::Metadata,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Axis => "axis",
            Self::Grid => "grid",
            Self::Label => "label",
            Self::Value => "value",
            Self::Title => "title",
            Self::Metadata => "metadata",
        }
    }

    /// CSS declarations for this class.
    #[must_use]
    pub const fn declarations(self) -> &'static str {
        match self {
            Self::Bar => "stroke: #fff; stroke-width: 1;",
            Self::Axis => "stroke: #333; stroke-width: 1;",
            Self::Grid => "stroke: #e0e0e0; stroke-width: 0.5;",
            Self::Label => "font-family: Arial, Helvetica, sans-serif; font-size: 11px; fill: #333;",
            Self::Value => "font-family: monospace; font-size: 11px; fill: #555;",
            Self::Title => {
                "font-family: Arial, Helvetica, sans-serif; font-size: 16px; font-weight: 600; fill: #333;"
            }
            Self::Metadata => "font-family: monospace; font-size: 9px; fill: #888;",
        }
    }

    /// Render every class as a stylesheet body, one rule per line.
    #[must_use]
    pub fn stylesheet() -> String {
        let mut css = String::new();
        for class in Self::ALL {
            let _ = writeln!(css, ".{} {{ {} }}", class.name(), class.declarations());
        }
        css
    }
}

impl fmt::Display for CssClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
