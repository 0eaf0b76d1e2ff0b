//! Field lookup in HTML attribute tables.
//!
//! Feature descriptions in the LTA data are small HTML tables, one
//! attribute per row:
//!
//! ```text
//! <tr> <th>STATION_NA</th> <td>BEDOK MRT STATION</td> </tr>
//! ```
//!
//! A [`DescriptionParser`] returns the trimmed text of the `<td>` cell that
//! follows the `<th>` cell naming the requested key. Whitespace between the
//! two cells is allowed. Only the first matching row counts.

use regex::Regex;

/// Looks up named values in a feature's description markup.
pub trait DescriptionParser {
    /// Return the value of the first row keyed `key`, trimmed.
    fn field(&self, html: &str, key: &str) -> Option<String>;
}

/// Regex-based row matcher.
///
/// Keys must be plain text. Values may contain inline markup but may not
/// span lines.
#[derive(Debug, Clone)]
pub struct RowPatternParser {
    row: Regex,
}

impl RowPatternParser {
    pub fn new() -> Self {
        Self {
            row: Regex::new(r"<th>([^<]*)</th>\s*<td>(.*?)</td>").expect("static row pattern"),
        }
    }

    /// Every `(key, value)` row in document order, both sides trimmed.
    pub fn fields(&self, html: &str) -> Vec<(String, String)> {
        self.row
            .captures_iter(html)
            .map(|caps| (caps[1].trim().to_string(), caps[2].trim().to_string()))
            .collect()
    }
}

impl Default for RowPatternParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptionParser for RowPatternParser {
    /// The key is part of the pattern, so a row whose `<td>` is never closed
    /// cannot swallow the row that actually carries `key`.
    fn field(&self, html: &str, key: &str) -> Option<String> {
        let pattern = format!(r"<th>\s*{}\s*</th>\s*<td>(.*?)</td>", regex::escape(key));
        let row = Regex::new(&pattern).ok()?;
        row.captures(html).map(|caps| caps[1].trim().to_string())
    }
}
