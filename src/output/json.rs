use serde::Serialize;

use crate::error::Result;
use crate::report::CategoryTotal;

use super::SummaryFormatter;

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    allocators: &'a [CategoryTotal],
}

impl SummaryFormatter for JsonFormatter {
    fn format(&self, totals: &[CategoryTotal]) -> Result<String> {
        let output = JsonOutput { allocators: totals };
        let json = serde_json::to_string_pretty(&output)?;
        Ok(format!("{json}\n"))
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
