//! SVG rendering of the allocator bar chart.
//!
//! Building blocks:
//! - viewBox-based scaling (renders at any size)
//! - one embedded stylesheet; elements refer to it by class

mod builder;
mod chart;
mod element;
mod layout;
mod metadata;
mod style;

pub use builder::SvgBuilder;
pub use chart::{DEFAULT_TITLE, LocBarChart};
pub use element::{Axis, Bar, LineSegment, SvgElement, Text};
pub use layout::{
    BarSlot, ChartLayout, GRIDLINE_INTERVALS, MAX_SCALE, Margins, SCALE_UNIT, scale_max,
};
pub use metadata::{COMMIT_DISPLAY_LEN, ChartMetadata, DEFAULT_SOURCE};
pub use style::{ChartColor, CssClass, TextAnchor};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
