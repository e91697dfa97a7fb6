//! Vertical bar chart of code lines per allocator.

use super::super::format::format_thousands;
use super::builder::SvgBuilder;
use super::element::{Axis, Bar, LineSegment, SvgElement, Text};
use super::layout::{ChartLayout, GRIDLINE_INTERVALS, scale_max};
use super::metadata::ChartMetadata;
use super::style::{BACKGROUND_COLOR, ChartColor, CssClass, TextAnchor};
use crate::report::CategoryTotal;

pub const DEFAULT_TITLE: &str = "Lines of code by allocator (excluding assertions)";

const TITLE_Y: f64 = 35.0;
const BAR_CORNER_RADIUS: f64 = 3.0;
/// Gap between a gridline label's right edge and the axis.
const GRID_LABEL_GAP: f64 = 10.0;
/// Nudges gridline labels down so their middle sits on the line.
const GRID_LABEL_SHIFT: f64 = 4.0;
const VALUE_LABEL_GAP: f64 = 8.0;
const CATEGORY_LABEL_OFFSET: f64 = 20.0;
const CATEGORY_LINE_HEIGHT: f64 = 14.0;
const METADATA_OFFSET: f64 = 55.0;
const METADATA_LINE_HEIGHT: f64 = 14.0;

/// Single-series bar chart with a value axis rounded up to a multiple of 5000.
///
/// `data` is drawn left to right in the given order; callers are expected to
/// pass it already sorted (see [`crate::report::ReportTotals::ordered`]).
#[derive(Debug, Clone)]
pub struct LocBarChart {
    pub title: String,
    pub data: Vec<CategoryTotal>,
    pub layout: ChartLayout,
    pub metadata: Option<ChartMetadata>,
}

impl Default for LocBarChart {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            data: Vec::new(),
            layout: ChartLayout::default(),
            metadata: None,
        }
    }
}

impl LocBarChart {
    #[must_use]
    pub fn new(data: Vec<CategoryTotal>) -> Self {
        Self {
            data,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub const fn with_layout(mut self, layout: ChartLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: ChartMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Upper bound of the value axis for the current data.
    #[must_use]
    pub fn scale_max(&self) -> u64 {
        let max_value = self.data.iter().map(|t| t.code_lines).max().unwrap_or(0);
        scale_max(max_value)
    }

    fn push_gridlines(&self, mut svg: SvgBuilder, scale: u64) -> SvgBuilder {
        let layout = &self.layout;
        let step = scale / GRIDLINE_INTERVALS;

        for i in 0..=GRIDLINE_INTERVALS {
            let value = step * i;
            let y = layout.value_y(value, scale);

            svg = svg
                .push_element(&LineSegment {
                    x1: layout.margins.left,
                    y1: y,
                    x2: layout.margins.left + layout.chart_width(),
                    y2: y,
                    class: CssClass::Grid,
                })
                .push_element(
                    &Text::new(
                        layout.margins.left - GRID_LABEL_GAP,
                        y + GRID_LABEL_SHIFT,
                        format_thousands(value),
                        CssClass::Label,
                    )
                    .with_anchor(TextAnchor::End),
                );
        }

        svg
    }

    fn push_bars(&self, mut svg: SvgBuilder, scale: u64) -> SvgBuilder {
        let layout = &self.layout;
        let label_y = layout.baseline_y() + CATEGORY_LABEL_OFFSET;

        for (i, total) in self.data.iter().enumerate() {
            let slot = layout.bar_slot(i, self.data.len());
            let y = layout.value_y(total.code_lines, scale);
            let value_label = format_thousands(total.code_lines);

            svg = svg
                .push_element(&Bar {
                    x: slot.x,
                    y,
                    width: slot.width,
                    height: layout.value_height(total.code_lines, scale),
                    corner_radius: BAR_CORNER_RADIUS,
                    color: ChartColor::hex(total.category.color()),
                })
                .push_element(
                    &Text::new(slot.center(), y - VALUE_LABEL_GAP, value_label, CssClass::Value)
                        .with_anchor(TextAnchor::Middle),
                );

            let mut line_y = label_y;
            for line in total.category.label_lines() {
                svg = svg.push_element(
                    &Text::new(slot.center(), line_y, *line, CssClass::Label)
                        .with_anchor(TextAnchor::Middle),
                );
                line_y += CATEGORY_LINE_HEIGHT;
            }
        }

        svg
    }

    #[allow(clippy::cast_precision_loss)] // Footer has a handful of lines
    fn push_metadata(&self, mut svg: SvgBuilder) -> SvgBuilder {
        let Some(metadata) = &self.metadata else {
            return svg;
        };

        let center_x = self.layout.width / 2.0;
        let first_y = self.layout.baseline_y() + METADATA_OFFSET;

        for (i, line) in metadata.lines().into_iter().enumerate() {
            let y = METADATA_LINE_HEIGHT.mul_add(i as f64, first_y);
            svg = svg.push_element(
                &Text::new(center_x, y, line, CssClass::Metadata).with_anchor(TextAnchor::Middle),
            );
        }

        svg
    }
}

impl SvgElement for LocBarChart {
    fn render(&self) -> String {
        let layout = &self.layout;

        let mut svg = SvgBuilder::new(layout.width, layout.height)
            .with_background(BACKGROUND_COLOR)
            .with_stylesheet(CssClass::stylesheet())
            .push_element(
                &Text::new(layout.width / 2.0, TITLE_Y, &self.title, CssClass::Title)
                    .with_anchor(TextAnchor::Middle),
            );

        if self.data.is_empty() {
            return svg
                .push_element(
                    &Text::new(
                        layout.width / 2.0,
                        layout.height / 2.0,
                        "No data available",
                        CssClass::Label,
                    )
                    .with_anchor(TextAnchor::Middle),
                )
                .build();
        }

        let scale = self.scale_max();

        svg = svg.push_element(&Axis::new(
            layout.margins.left,
            layout.margins.top,
            layout.chart_width(),
            layout.chart_height(),
        ));
        svg = self.push_gridlines(svg, scale);
        svg = self.push_bars(svg, scale);
        svg = self.push_metadata(svg);

        svg.build()
    }
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
