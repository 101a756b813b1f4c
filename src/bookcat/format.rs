//! # Catalog File Format
//!
//! Plain text, one book per line, fields joined by `;` in the order
//! `id;title;author;year;genre`:
//!
//! ```text
//! 1;Dune;Frank Herbert;1965;Sci-Fi
//! 2;1984;George Orwell;1949;Dystopian
//! ```
//!
//! There is no escaping. A title containing `;` is written as-is and the line
//! will not read back as five fields; such lines are skipped on import.
//!
//! Trailing empty fields are dropped before counting, so `1;T;A;1999;` has four
//! fields, not five. Fields are never trimmed.

use crate::model::{Book, BookDraft};
use std::fmt;

pub const DELIMITER: char = ';';
pub const FIELD_COUNT: usize = 5;

pub fn encode(book: &Book) -> String {
    format!(
        "{id}{d}{title}{d}{author}{d}{year}{d}{genre}",
        id = book.id,
        title = book.title,
        author = book.author,
        year = book.year,
        genre = book.genre,
        d = DELIMITER
    )
}

/// One successfully parsed line. `id` is the id as written in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    pub id: i32,
    pub draft: BookDraft,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// Not exactly five fields. Skipped without a report.
    FieldCount(usize),
    /// Five fields, but `id` or `year` is not an integer.
    BadNumber { field: &'static str, value: String },
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::FieldCount(n) => {
                write!(f, "expected {} fields, found {}", FIELD_COUNT, n)
            }
            LineError::BadNumber { field, value } => {
                write!(f, "{} is not an integer: \"{}\"", field, value)
            }
        }
    }
}

pub fn decode(line: &str) -> Result<LineRecord, LineError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut fields: Vec<&str> = line.split(DELIMITER).collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    if fields.len() != FIELD_COUNT {
        return Err(LineError::FieldCount(fields.len()));
    }

    let id = parse_int("id", fields[0])?;
    let year = parse_int("year", fields[3])?;

    Ok(LineRecord {
        id,
        draft: BookDraft::new(fields[1], fields[2], year, fields[4]),
    })
}

fn parse_int(field: &'static str, value: &str) -> Result<i32, LineError> {
    value.parse().map_err(|_| LineError::BadNumber {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_in_fixed_order() {
        let book = Book::new(1, BookDraft::new("Dune", "Frank Herbert", 1965, "Sci-Fi"));
        assert_eq!(encode(&book), "1;Dune;Frank Herbert;1965;Sci-Fi");
    }

    #[test]
    fn decodes_well_formed_line() {
        let record = decode("12;1984;George Orwell;1949;Dystopian").unwrap();
        assert_eq!(record.id, 12);
        assert_eq!(
            record.draft,
            BookDraft::new("1984", "George Orwell", 1949, "Dystopian")
        );
    }

    #[test]
    fn accepts_signed_numbers() {
        let record = decode("+1;T;A;-5;G").unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.draft, BookDraft::new("T", "A", -5, "G"));
    }

    #[test]
    fn keeps_whitespace_in_text_fields() {
        let record = decode("1; Dune ;Frank Herbert;1965;Sci-Fi").unwrap();
        assert_eq!(record.draft.title, " Dune ");
    }

    #[test]
    fn strips_carriage_return() {
        let record = decode("1;Dune;Frank Herbert;1965;Sci-Fi\r").unwrap();
        assert_eq!(record.draft.genre, "Sci-Fi");
    }

    #[test]
    fn wrong_field_counts() {
        assert_eq!(decode(""), Err(LineError::FieldCount(0)));
        assert_eq!(decode("1;Dune;Frank Herbert;1965"), Err(LineError::FieldCount(4)));
        assert_eq!(
            decode("1;Du;ne;Frank Herbert;1965;Sci-Fi"),
            Err(LineError::FieldCount(6))
        );
    }

    #[test]
    fn trailing_empty_fields_are_dropped() {
        assert_eq!(decode("1;Dune;Frank Herbert;1965;"), Err(LineError::FieldCount(4)));
        let record = decode("1;Dune;Frank Herbert;1965;Sci-Fi;;").unwrap();
        assert_eq!(record.draft.genre, "Sci-Fi");
    }

    #[test]
    fn empty_middle_field_still_counts() {
        let record = decode("1;;Frank Herbert;1965;Sci-Fi").unwrap();
        assert_eq!(record.draft.title, "");
    }

    #[test]
    fn bad_numbers_name_the_field() {
        assert_eq!(
            decode("x;Dune;Frank Herbert;1965;Sci-Fi"),
            Err(LineError::BadNumber {
                field: "id",
                value: "x".into()
            })
        );
        let err = decode("1;Dune;Frank Herbert; 1965;Sci-Fi").unwrap_err();
        assert_eq!(err.to_string(), "year is not an integer: \" 1965\"");
    }
}
