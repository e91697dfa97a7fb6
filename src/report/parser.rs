use tracing::debug;

use crate::category::Category;

use super::ReportTotals;

/// Leading token of a tokei summary row.
pub const SUMMARY_ROW_MARKER: &str = "Total";

/// Zero-based position of the code count among the numeric columns of a
/// summary row (files, lines, code, comments, blanks).
///
/// This mirrors tokei's column layout; if tokei ever reorders its columns this
/// is the one place to change.
pub const CODE_COLUMN: usize = 2;

/// Parse a report made of `<allocator>` headers each followed by a tokei
/// `Total` row.
///
/// Only the first summary row after a header counts; anything outside an open
/// section is ignored. The `smalloc-ffi` section is not reported directly but
/// added to `smalloc` to form the `smalloc + ffi` composite.
#[must_use]
pub fn parse_report(content: &str) -> ReportTotals {
    let mut state = ParseState::default();

    for line in content.lines() {
        state.process_line(line);
    }

    state.finish()
}

/// Extract the code-line count from a summary row.
///
/// Returns `None` when the row has fewer than `CODE_COLUMN + 1` numeric tokens,
/// or when the selected token does not fit in a `u64`. Only tokens made
/// entirely of ASCII digits count, so `-12` or `12k` are skipped rather than
/// misread. An oversized number still occupies its column.
#[must_use]
pub fn extract_code_lines(row: &str) -> Option<u64> {
    row.split_whitespace()
        .filter(|token| token.bytes().all(|b| b.is_ascii_digit()))
        .nth(CODE_COLUMN)?
        .parse()
        .ok()
}

#[derive(Debug, Default)]
struct ParseState {
    current: Option<Category>,
    totals: ReportTotals,
    ffi_total: Option<u64>,
}

impl ParseState {
    fn process_line(&mut self, line: &str) {
        let trimmed = line.trim();

        if let Some(category) = Category::from_section_header(trimmed) {
            if let Some(previous) = self.current {
                debug!(section = %previous, "section closed without a summary row");
            }
            debug!(section = %category, "opened section");
            self.current = Some(category);
            return;
        }

        let Some(category) = self.current else {
            return;
        };

        if !trimmed.starts_with(SUMMARY_ROW_MARKER) {
            return;
        }

        // One summary row per section, whether or not it yielded a value.
        self.current = None;

        let Some(code_lines) = extract_code_lines(trimmed) else {
            debug!(section = %category, row = trimmed, "summary row has too few numeric columns");
            return;
        };

        debug!(section = %category, code_lines, "parsed summary row");
        if category == Category::SmallocFfi {
            self.ffi_total = Some(code_lines);
        } else {
            self.totals.insert(category, code_lines);
        }
    }

    fn finish(mut self) -> ReportTotals {
        if let Some(smalloc) = self.totals.get(Category::Smalloc) {
            let ffi = self.ffi_total.unwrap_or(0);
            self.totals
                .insert(Category::SmallocPlusFfi, smalloc.saturating_add(ffi));
        } else if self.ffi_total.is_some() {
            debug!("smalloc-ffi total dropped: no smalloc section");
        }
        self.totals
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
