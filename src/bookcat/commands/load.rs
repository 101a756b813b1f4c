//! Merge import of a catalog file.
//!
//! Each line is checked against the catalog as it stood before the import
//! started: a book with the same title and author (ignoring case) and the same
//! year is a duplicate and is dropped. Lines from the same file are not checked
//! against each other, so a file listing a book twice imports it twice.
//!
//! Imported books get fresh ids in file order. The id column in the file is
//! only used to report the highest id seen.

use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult, LoadSummary};
use crate::error::Result;
use crate::format::{self, LineError};
use crate::model::BookDraft;
use crate::store::DataStore;
use std::path::Path;

/// On a read failure the catalog is left untouched.
pub fn run<S: DataStore>(catalog: &mut Catalog, store: &S, path: &Path) -> Result<CmdResult> {
    let lines = store.read_lines(path)?;

    let mut result = CmdResult::default();
    let mut summary = LoadSummary::default();
    let mut accepted: Vec<BookDraft> = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let line_no = idx + 1;
        let record = match format::decode(line) {
            Ok(record) => record,
            Err(LineError::FieldCount(n)) => {
                tracing::debug!(line = line_no, fields = n, "skipping line");
                summary.malformed += 1;
                continue;
            }
            Err(err) => {
                tracing::warn!(line = line_no, %err, "data format error");
                summary.format_errors += 1;
                result.add_message(CmdMessage::warning(format!(
                    "Data format error in file (line {}): {}",
                    line_no, err
                )));
                continue;
            }
        };

        summary.max_file_id = summary.max_file_id.max(Some(record.id));

        if catalog.has_same_work(&record.draft) {
            summary.duplicates += 1;
        } else {
            accepted.push(record.draft);
        }
    }

    summary.added = accepted.len();
    for draft in accepted {
        catalog.insert(draft);
    }
    let added_books = catalog.books()[catalog.len() - summary.added..].to_vec();

    tracing::info!(
        path = %path.display(),
        added = summary.added,
        duplicates = summary.duplicates,
        malformed = summary.malformed,
        format_errors = summary.format_errors,
        max_file_id = ?summary.max_file_id,
        "catalog loaded"
    );

    result.add_message(CmdMessage::success(format!(
        "Loaded from file: {}",
        path.display()
    )));
    result.add_message(CmdMessage::info(format!(
        "New books added: {}",
        summary.added
    )));
    if summary.duplicates > 0 {
        result.add_message(CmdMessage::info(format!(
            "Duplicates skipped: {}",
            summary.duplicates
        )));
    }

    Ok(result
        .with_affected_books(added_books)
        .with_load_summary(summary))
}
