//! SVG document builder.

use std::fmt::Write;

use super::element::SvgElement;

/// Builder for a standalone SVG document.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    width: f64,
    height: f64,
    background: Option<String>,
    stylesheet: Option<String>,
    elements: Vec<String>,
}

impl SvgBuilder {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: None,
            stylesheet: None,
            elements: Vec::new(),
        }
    }

    /// Fill the whole canvas with a solid color.
    #[must_use]
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Embed CSS rules in a `<style>` element.
    #[must_use]
    pub fn with_stylesheet(mut self, css: impl Into<String>) -> Self {
        self.stylesheet = Some(css.into());
        self
    }

    #[must_use]
    pub fn push_element<E: SvgElement>(mut self, element: &E) -> Self {
        self.elements.push(element.render());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::new();

        let _ = writeln!(
            output,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">"#,
            self.width, self.height
        );

        if let Some(color) = &self.background {
            let _ = writeln!(
                output,
                r#"    <rect width="{}" height="{}" fill="{color}"/>"#,
                self.width, self.height
            );
        }

        if let Some(css) = &self.stylesheet {
            output.push_str("    <style>\n");
            for line in css.lines() {
                let _ = writeln!(output, "        {line}");
            }
            output.push_str("    </style>\n");
        }

        for element in self.elements {
            for line in element.lines() {
                let _ = writeln!(output, "    {line}");
            }
        }

        output.push_str("</svg>");
        output
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
