use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};

pub fn run(catalog: &Catalog) -> CmdResult {
    if catalog.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info("No books in the catalog."));
    }
    CmdResult::default().with_listed_books(catalog.books().to_vec())
}
