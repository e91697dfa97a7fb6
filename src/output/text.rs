use std::io::Write;

use crate::error::Result;
use crate::report::CategoryTotal;

use super::SummaryFormatter;
use super::format::format_thousands;

const NAME_WIDTH: usize = 20;
const VALUE_WIDTH: usize = 15;
const RULE_WIDTH: usize = 40;

/// Two-column console table of allocator code sizes.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextFormatter;

impl SummaryFormatter for TextFormatter {
    fn format(&self, totals: &[CategoryTotal]) -> Result<String> {
        let mut output = Vec::new();

        writeln!(
            output,
            "{:<NAME_WIDTH$} {:>VALUE_WIDTH$}",
            "Allocator", "Lines of Code"
        )
        .ok();
        writeln!(output, "{}", "-".repeat(RULE_WIDTH)).ok();

        for total in totals {
            writeln!(
                output,
                "{:<NAME_WIDTH$} {:>VALUE_WIDTH$}",
                total.category.name(),
                format_thousands(total.code_lines)
            )
            .ok();
        }

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
