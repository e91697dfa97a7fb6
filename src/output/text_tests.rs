use super::*;
use crate::category::Category;

fn sample_totals() -> Vec<CategoryTotal> {
    vec![
        CategoryTotal::new(Category::Glibc, 1000),
        CategoryTotal::new(Category::Jemalloc, 23_456),
        CategoryTotal::new(Category::SmallocPlusFfi, 800),
    ]
}

#[test]
fn header_and_rule() {
    let output = TextFormatter.format(&sample_totals()).unwrap();
    let mut lines = output.lines();
    assert_eq!(
        lines.next(),
        Some("Allocator              Lines of Code")
    );
    assert_eq!(lines.next(), Some("-".repeat(40).as_str()));
}

#[test]
fn rows_are_aligned_with_separators() {
    let output = TextFormatter.format(&sample_totals()).unwrap();
    let rows: Vec<_> = output.lines().skip(2).collect();
    assert_eq!(
        rows,
        vec![
            "glibc                          1,000",
            "jemalloc                      23,456",
            "smalloc + ffi                    800",
        ]
    );
}

#[test]
fn empty_totals_prints_only_header() {
    let output = TextFormatter.format(&[]).unwrap();
    assert_eq!(output.lines().count(), 2);
}
