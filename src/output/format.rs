//! Text formatting shared by the console table and the SVG chart.

/// Format an integer with `,` as the thousands separator (`12345` → `12,345`).
#[must_use]
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut output = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            output.push(',');
        }
        output.push(ch);
    }

    output
}

/// Escape text for use in XML character data and attribute values.
#[must_use]
pub fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
