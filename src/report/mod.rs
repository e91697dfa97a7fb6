//! Parsing of per-allocator tokei reports into code-line totals.

mod parser;
mod totals;

pub use parser::{CODE_COLUMN, SUMMARY_ROW_MARKER, extract_code_lines, parse_report};
pub use totals::{CategoryTotal, ReportTotals};
