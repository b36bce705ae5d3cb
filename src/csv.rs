// src/csv.rs
use std::mem::take;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delim {
    #[default]
    Csv,
    Tsv,
}

impl Delim {
    pub fn sep(self) -> char {
        match self { Delim::Csv => ',', Delim::Tsv => '\t' }
    }

    /// `.tsv`/`.tab` → tab separated; everything else is treated as CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase()) {
            Some(ext) if ext == "tsv" || ext == "tab" => Delim::Tsv,
            _ => Delim::Csv,
        }
    }
}

/// Decode raw upload bytes. Invalid UTF-8 becomes U+FFFD, a leading BOM is dropped.
pub fn decode(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    text.strip_prefix('\u{feff}').unwrap_or(&text[..]).to_string()
}

/// Minimal CSV/TSV parser (quotes + CRLF tolerant).
/// Blank lines are dropped; an unterminated quote runs to end of input.
pub fn parse_rows(text: &str, delim: Delim) -> Vec<Vec<String>> {
    let sep = delim.sep();
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    // Quotes only open a quoted field as its very first character; `12" Pizza` stays literal.
    let mut at_field_start = true;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if matches!(chars.peek(), Some('"')) {
                    chars.next(); // double-quote escape
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if at_field_start => {
                in_quotes = true;
                at_field_start = false;
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
                at_field_start = true;
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                at_field_start = true;
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => {
                field.push(ch);
                at_field_start = false;
            }
        }
    }

    // Trailing row without a final newline
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_commas_and_escaped_quotes() {
        let rows = parse_rows("Pie,\"$3 each, 2/$5\",\"The \"\"good\"\" one\"\r\n", Delim::Csv);
        assert_eq!(rows, vec![vec!["Pie", "$3 each, 2/$5", "The \"good\" one"]]);
    }

    #[test]
    fn blank_lines_dropped_and_last_line_kept() {
        let rows = parse_rows("a,b\n\n\nc,d", Delim::Csv);
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn quote_inside_unquoted_field_is_literal() {
        let rows = parse_rows("12\" Pizza,$10,\nSalad,$5,\nSoup,$4,\n", Delim::Csv);
        assert_eq!(rows, vec![
            vec!["12\" Pizza", "$10", ""],
            vec!["Salad", "$5", ""],
            vec!["Soup", "$4", ""],
        ]);
    }

    #[test]
    fn multiline_quoted_field() {
        let rows = parse_rows("Bread,\"$4\nor 2/$7\",x\n", Delim::Csv);
        assert_eq!(rows[0][1], "$4\nor 2/$7");
    }

    #[test]
    fn bom_stripped() {
        assert_eq!(decode(b"\xef\xbb\xbfItem,Price"), "Item,Price");
    }

    #[test]
    fn tsv_by_extension() {
        assert_eq!(Delim::from_path(Path::new("list.TSV")), Delim::Tsv);
        assert_eq!(Delim::from_path(Path::new("list.csv")), Delim::Csv);
        assert_eq!(Delim::from_path(Path::new("list")), Delim::Csv);
    }
}
