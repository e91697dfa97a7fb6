//! Tests for the SVG document builder.

use super::*;
use crate::output::svg::element::Bar;
use crate::output::svg::style::{ChartColor, CssClass};

#[test]
fn builder_creates_svg() {
    let svg = SvgBuilder::new(200.0, 100.0).build();

    assert!(svg.starts_with(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 100">"#
    ));
    assert!(svg.ends_with("</svg>"));
    // No static IDs
    assert!(!svg.contains("id=\""));
}

#[test]
fn builder_has_no_accessibility_chrome() {
    let svg = SvgBuilder::new(10.0, 10.0).build();
    assert!(!svg.contains("<title>"));
    assert!(!svg.contains("role="));
}

#[test]
fn builder_adds_background() {
    let svg = SvgBuilder::new(750.0, 500.0)
        .with_background("#fafafa")
        .build();
    assert!(svg.contains(r##"<rect width="750" height="500" fill="#fafafa"/>"##));
}

#[test]
fn builder_embeds_stylesheet() {
    let svg = SvgBuilder::new(10.0, 10.0)
        .with_stylesheet(CssClass::stylesheet())
        .build();
    assert!(svg.contains("    <style>\n        .bar {"));
    assert!(svg.contains("    </style>\n"));
}

#[test]
fn builder_adds_elements_indented() {
    let bar = Bar {
        x: 10.0,
        y: 10.0,
        width: 30.0,
        height: 50.0,
        corner_radius: 3.0,
        color: ChartColor::hex("#000"),
    };

    let svg = SvgBuilder::new(100.0, 100.0).push_element(&bar).build();

    assert!(svg.contains("\n    <rect x=\"10\""));
    assert!(svg.contains("fill=\"#000\"/>\n</svg>"));
}
