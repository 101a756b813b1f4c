use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::model::BookDraft;

/// Fields are expected to be validated by the caller.
pub fn run(catalog: &mut Catalog, draft: BookDraft) -> CmdResult {
    let book = catalog.insert(draft).clone();
    tracing::debug!(id = book.id, "book added");

    CmdResult::default()
        .with_message(CmdMessage::success(format!("Book added: {}", book)))
        .with_affected_books(vec![book])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{edit, MessageLevel};
    use crate::model::BookPatch;

    #[test]
    fn adds_with_fresh_id() {
        let mut catalog = Catalog::new();
        let result = run(
            &mut catalog,
            BookDraft::new("Dune", "Frank Herbert", 1965, "Sci-Fi"),
        );

        assert_eq!(catalog.len(), 1);
        assert_eq!(result.affected_books[0].id, 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(
            result.messages[0].content,
            "Book added: id: 1 | Title: Dune | Author: Frank Herbert | Year: 1965 | Genre: Sci-Fi"
        );
    }

    #[test]
    fn ids_keep_increasing_across_edits() {
        let mut catalog = Catalog::new();
        let mut ids = Vec::new();
        for i in 0..5 {
            let result = run(&mut catalog, BookDraft::new(format!("T{}", i), "A", 2000, "G"));
            ids.push(result.affected_books[0].id);
            edit::run(&mut catalog, 1, &BookPatch::default().with_year(1990 + i));
        }
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn accepts_year_zero_and_negative() {
        let mut catalog = Catalog::new();
        run(&mut catalog, BookDraft::new("Odyssey", "Homer", -700, "Epic"));
        run(&mut catalog, BookDraft::new("Zero", "Nobody", 0, "Odd"));
        assert_eq!(catalog.books()[0].year, -700);
        assert_eq!(catalog.books()[1].year, 0);
    }
}
