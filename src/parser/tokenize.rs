//! Row tokenization: quote-aware splitting and row qualification.

use crate::config::MIN_FIELDS;
use crate::error::{ConvertError, Result};
use crate::model::RawRow;
use crate::parser::sniff::Delimiter;

/// Split one physical line on the delimiter, honoring double quotes.
///
/// A field may be quoted to embed the delimiter; a doubled quote inside a
/// quoted field yields a literal quote. The delimiter may be more than one
/// character (", ").
pub fn split_row(line: &str, delimiter: Delimiter) -> Vec<String> {
    let delim = delimiter.as_str();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c == '"' {
            if in_quotes && matches!(chars.peek(), Some((_, '"'))) {
                field.push('"');
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
        } else if !in_quotes && line[i..].starts_with(delim) {
            fields.push(std::mem::take(&mut field));
            // Consume the remaining delimiter characters, if any.
            let end = i + delim.len();
            while matches!(chars.peek(), Some((j, _)) if *j < end) {
                chars.next();
            }
        } else {
            field.push(c);
        }
    }
    fields.push(field);
    fields
}

/// Clean one split line into a qualifying row.
///
/// Fields are trimmed, empty fields are dropped, and rows with fewer than
/// [`MIN_FIELDS`] surviving tokens are rejected.
fn clean_row(fields: Vec<String>) -> Option<RawRow> {
    let tokens: Vec<String> = fields
        .into_iter()
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .collect();
    if tokens.len() < MIN_FIELDS {
        return None;
    }
    Some(RawRow::new(tokens))
}

/// Tokenize decoded file content into qualifying rows, in file order.
///
/// Single forward pass; rows that fail the minimum-field filter are
/// silently dropped.
pub fn tokenize(content: &str, delimiter: Delimiter) -> impl Iterator<Item = RawRow> + '_ {
    content
        .lines()
        .filter_map(move |line| clean_row(split_row(line, delimiter)))
}

/// Collect all qualifying rows, failing with `EmptyInput` when none remain.
pub fn read_rows(content: &str, delimiter: Delimiter) -> Result<Vec<RawRow>> {
    let rows: Vec<RawRow> = tokenize(content, delimiter).collect();
    if rows.is_empty() {
        return Err(ConvertError::EmptyInput);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens(row: &RawRow) -> Vec<&str> {
        row.tokens.iter().map(|s| s.as_str()).collect()
    }

    // ==================== split_row tests ====================

    #[test]
    fn test_split_row_tab() {
        let fields = split_row("1\t100.0\t200.0\t5.0\tA", Delimiter::Tab);
        assert_eq!(fields, vec!["1", "100.0", "200.0", "5.0", "A"]);
    }

    #[test]
    fn test_split_row_comma_space() {
        let fields = split_row("1, 100.0, 200.0, 5.0, A", Delimiter::CommaSpace);
        assert_eq!(fields, vec!["1", "100.0", "200.0", "5.0", "A"]);
    }

    #[test]
    fn test_split_row_quoted_field_embeds_delimiter() {
        let fields = split_row("1,\"a,b\",2", Delimiter::Comma);
        assert_eq!(fields, vec!["1", "a,b", "2"]);
    }

    #[test]
    fn test_split_row_doubled_quote() {
        let fields = split_row("\"say \"\"hi\"\"\",2", Delimiter::Comma);
        assert_eq!(fields, vec!["say \"hi\"", "2"]);
    }

    #[test]
    fn test_split_row_multiple_spaces_yield_empty_fields() {
        let fields = split_row("1  2", Delimiter::Space);
        assert_eq!(fields, vec!["1", "", "2"]);
    }

    // ==================== tokenize tests ====================

    #[test]
    fn test_tokenize_drops_short_rows() {
        let content = "1 2 3 4 5\n1 2 3\n\n6 7 8 9 10\n";
        let rows: Vec<RawRow> = tokenize(content, Delimiter::Space).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(tokens(&rows[0]), vec!["1", "2", "3", "4", "5"]);
        assert_eq!(tokens(&rows[1]), vec!["6", "7", "8", "9", "10"]);
    }

    #[test]
    fn test_tokenize_collapses_space_runs() {
        let content = "1   100.0  200.0   5.0  A\n";
        let rows: Vec<RawRow> = tokenize(content, Delimiter::Space).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(tokens(&rows[0]), vec!["1", "100.0", "200.0", "5.0", "A"]);
    }

    #[test]
    fn test_tokenize_trims_fields() {
        let content = " 1 ,100.0 , 200.0,5.0 , A \n";
        let rows: Vec<RawRow> = tokenize(content, Delimiter::Comma).collect();
        assert_eq!(tokens(&rows[0]), vec!["1", "100.0", "200.0", "5.0", "A"]);
    }

    #[test]
    fn test_tokenize_preserves_file_order() {
        let content = "a b c d e\nf g h i j\nk l m n o\n";
        let rows: Vec<RawRow> = tokenize(content, Delimiter::Space).collect();
        let firsts: Vec<&str> = rows.iter().map(|r| r.tokens[0].as_str()).collect();
        assert_eq!(firsts, vec!["a", "f", "k"]);
    }

    // ==================== read_rows tests ====================

    #[test]
    fn test_read_rows_empty_input() {
        let result = read_rows("", Delimiter::Space);
        assert!(matches!(result, Err(ConvertError::EmptyInput)));
    }

    #[test]
    fn test_read_rows_only_short_rows_is_empty_input() {
        let result = read_rows("1 2 3\n4 5\n", Delimiter::Space);
        assert!(matches!(result, Err(ConvertError::EmptyInput)));
    }

    #[test]
    fn test_read_rows_extra_tokens_kept() {
        let rows = read_rows("1 2 3 4 5 note here", Delimiter::Space).unwrap();
        assert_eq!(rows[0].tokens.len(), 7);
    }
}
