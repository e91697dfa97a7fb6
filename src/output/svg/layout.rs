//! Canvas geometry and value scaling for the bar chart.

/// The value axis always ends on a multiple of this.
pub const SCALE_UNIT: u64 = 5000;

/// Number of equal steps between the baseline and the top gridline.
pub const GRIDLINE_INTERVALS: u64 = 5;

/// Share of each bar slot left empty, split evenly on both sides of the bar.
pub const BAR_PADDING_RATIO: f64 = 0.2;

/// Upper bound of the value axis for a series whose largest value is `max_value`.
///
/// Always a multiple of `SCALE_UNIT`, and strictly above `max_value`: a maximum
/// that is already a multiple gets one more unit of headroom. Past
/// `MAX_SCALE` there is no larger multiple, so the axis stops there.
#[must_use]
pub const fn scale_max(max_value: u64) -> u64 {
    match (max_value / SCALE_UNIT + 1).checked_mul(SCALE_UNIT) {
        Some(scale) => scale,
        None => MAX_SCALE,
    }
}

/// Largest multiple of `SCALE_UNIT` that fits in a `u64`.
pub const MAX_SCALE: u64 = u64::MAX / SCALE_UNIT * SCALE_UNIT;

/// Space reserved around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 60.0,
            bottom: 120.0,
            left: 80.0,
            right: 40.0,
        }
    }
}

/// Horizontal placement of one bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSlot {
    pub x: f64,
    pub width: f64,
}

impl BarSlot {
    #[must_use]
    pub fn center(&self) -> f64 {
        self.width.mul_add(0.5, self.x)
    }
}

/// Canvas size and margins; everything else is derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 750.0,
            height: 500.0,
            margins: Margins::default(),
        }
    }
}

impl ChartLayout {
    #[must_use]
    pub const fn new(width: f64, height: f64, margins: Margins) -> Self {
        Self {
            width,
            height,
            margins,
        }
    }

    #[must_use]
    pub fn chart_width(&self) -> f64 {
        self.width - self.margins.left - self.margins.right
    }

    #[must_use]
    pub fn chart_height(&self) -> f64 {
        self.height - self.margins.top - self.margins.bottom
    }

    /// Y coordinate of the horizontal axis.
    #[must_use]
    pub fn baseline_y(&self) -> f64 {
        self.margins.top + self.chart_height()
    }

    /// Y coordinate of `value` on an axis that tops out at `scale_max`.
    #[must_use]
    pub fn value_y(&self, value: u64, scale_max: u64) -> f64 {
        self.baseline_y() - self.value_height(value, scale_max)
    }

    /// Height in pixels of a bar for `value`, capped at the plot height.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Acceptable for chart rendering
    pub fn value_height(&self, value: u64, scale_max: u64) -> f64 {
        if scale_max == 0 {
            return 0.0;
        }
        (value as f64 / scale_max as f64).min(1.0) * self.chart_height()
    }

    /// Placement of bar `index` out of `count` equal-width slots.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Acceptable for chart rendering
    pub fn bar_slot(&self, index: usize, count: usize) -> BarSlot {
        let slot_width = self.chart_width() / count.max(1) as f64;
        let padding = slot_width * BAR_PADDING_RATIO;
        BarSlot {
            x: slot_width.mul_add(index as f64, self.margins.left) + padding / 2.0,
            width: slot_width - padding,
        }
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
