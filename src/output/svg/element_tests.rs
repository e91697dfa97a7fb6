//! Tests for primitive SVG elements.

use super::*;

mod axis_tests {
    use super::*;

    #[test]
    fn axis_renders_two_borders() {
        let svg = Axis::new(80.0, 60.0, 630.0, 320.0).render();

        assert_eq!(svg.matches("<line").count(), 2);
        assert!(svg.contains(r#"<line x1="80" y1="60" x2="80" y2="380" class="axis"/>"#));
        assert!(svg.contains(r#"<line x1="80" y1="380" x2="710" y2="380" class="axis"/>"#));
    }
}

mod line_segment_tests {
    use super::*;

    #[test]
    fn renders_with_class() {
        let line = LineSegment {
            x1: 0.0,
            y1: 1.5,
            x2: 10.0,
            y2: 1.5,
            class: CssClass::Grid,
        };
        assert_eq!(
            line.render(),
            r#"<line x1="0" y1="1.5" x2="10" y2="1.5" class="grid"/>"#
        );
    }
}

mod text_tests {
    use super::*;

    #[test]
    fn text_defaults_to_start_anchor() {
        let text = Text::new(5.0, 6.0, "hello", CssClass::Label);
        assert_eq!(
            text.render(),
            r#"<text x="5" y="6" class="label" text-anchor="start">hello</text>"#
        );
    }

    #[test]
    fn text_with_anchor() {
        let svg = Text::new(0.0, 0.0, "1,000", CssClass::Value)
            .with_anchor(TextAnchor::Middle)
            .render();
        assert!(svg.contains(r#"text-anchor="middle""#));
        assert!(svg.contains(">1,000</text>"));
    }

    #[test]
    fn text_escapes_content() {
        let svg = Text::new(0.0, 0.0, "OS: <linux> & co", CssClass::Metadata).render();
        assert!(svg.contains("OS: &lt;linux&gt; &amp; co"));
    }
}

mod bar_tests {
    use super::*;

    fn sample_bar() -> Bar {
        Bar {
            x: 10.0,
            y: 20.0,
            width: 50.0,
            height: 80.0,
            corner_radius: 3.0,
            color: ChartColor::hex("#66bb6a"),
        }
    }

    #[test]
    fn bar_renders_self_closing_rounded_rect() {
        let svg = sample_bar().render();
        assert_eq!(
            svg,
            r##"<rect x="10" y="20" width="50" height="80" rx="3" ry="3" class="bar" fill="#66bb6a"/>"##
        );
    }
}
