// src/csv.rs
use std::mem::take;

/// Tokenized CSV: rows of string cells, pre-schema.
pub type RawGrid = Vec<Vec<String>>;

/// Minimal CSV tokenizer (quotes + CRLF tolerant). std-only.
///
/// Quoted fields may span physical lines and contain commas; `""` inside
/// quotes is a literal quote. A lone `\r` (no `\n` after it) is cell data,
/// matching the sheet export format. Rows whose every cell is blank or
/// whitespace are dropped, so separator lines never become phantom rows.
/// Unterminated quotes at end of input are tolerated: the field closes
/// with whatever was accumulated.
pub fn parse_rows(text: &str) -> RawGrid {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row: Vec<String> = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            ',' if !in_quotes => {
                // move the field without cloning
                row.push(take(&mut field));
            }
            '\n' if !in_quotes => {
                row.push(take(&mut field));
                push_row(&mut rows, take(&mut row));
            }
            '\r' if !in_quotes && matches!(chars.peek(), Some('\n')) => {
                chars.next(); // swallow the \n half of \r\n
                row.push(take(&mut field));
                push_row(&mut rows, take(&mut row));
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    row.push(field);
    push_row(&mut rows, row);

    rows
}

/// Keep a row only if some cell has non-whitespace content.
fn push_row(rows: &mut Vec<Vec<String>>, row: Vec<String>) {
    if row.iter().any(|cell| !cell.trim().is_empty()) {
        rows.push(row);
    }
}
