//! Primitive SVG elements: axes, gridlines, bars and text.

use std::fmt::Write;

use super::super::format::xml_escape;
use super::style::{ChartColor, CssClass, TextAnchor};

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// A straight line styled by a CSS class.
#[derive(Debug, Clone, Copy)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub class: CssClass,
}

impl SvgElement for LineSegment {
    fn render(&self) -> String {
        format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" class="{}"/>"#,
            self.x1, self.y1, self.x2, self.y2, self.class
        )
    }
}

/// Left and bottom borders of the plot area.
#[derive(Debug, Clone, Copy)]
pub struct Axis {
    /// X of the vertical border.
    pub left: f64,
    /// Y of the top of the vertical border.
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Axis {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    const fn baseline(&self) -> f64 {
        self.top + self.height
    }
}

impl SvgElement for Axis {
    fn render(&self) -> String {
        let vertical = LineSegment {
            x1: self.left,
            y1: self.top,
            x2: self.left,
            y2: self.baseline(),
            class: CssClass::Axis,
        };
        let horizontal = LineSegment {
            x1: self.left,
            y1: self.baseline(),
            x2: self.left + self.width,
            y2: self.baseline(),
            class: CssClass::Axis,
        };

        let mut output = String::new();
        let _ = writeln!(output, "{}", vertical.render());
        let _ = writeln!(output, "{}", horizontal.render());
        output
    }
}

/// Single line of text.
#[derive(Debug, Clone)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub class: CssClass,
    pub anchor: TextAnchor,
}

impl Text {
    #[must_use]
    pub fn new(x: f64, y: f64, content: impl Into<String>, class: CssClass) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            class,
            anchor: TextAnchor::default(),
        }
    }

    #[must_use]
    pub const fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }
}

impl SvgElement for Text {
    fn render(&self) -> String {
        format!(
            r#"<text x="{}" y="{}" class="{}" text-anchor="{}">{}</text>"#,
            self.x,
            self.y,
            self.class,
            self.anchor,
            xml_escape(&self.content)
        )
    }
}

/// A single bar with rounded corners.
#[derive(Debug, Clone)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub color: ChartColor,
}

impl SvgElement for Bar {
    fn render(&self) -> String {
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{r}" ry="{r}" class="{}" fill="{}"/>"#,
            self.x,
            self.y,
            self.width,
            self.height,
            CssClass::Bar,
            self.color.to_css(),
            r = self.corner_radius,
        )
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
