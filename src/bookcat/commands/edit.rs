use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::model::{BookId, BookPatch};

/// Not finding the id is a normal outcome, reported as a message.
pub fn run(catalog: &mut Catalog, id: BookId, patch: &BookPatch) -> CmdResult {
    let Some(book) = catalog.get_mut(id) else {
        tracing::debug!(id, "edit target not found");
        return CmdResult::default().with_message(not_found(id));
    };

    patch.apply(book);
    tracing::debug!(id, unchanged = patch.is_empty(), "book updated");
    let book = book.clone();

    CmdResult::default()
        .with_message(CmdMessage::success(format!("Book updated: {}", book)))
        .with_affected_books(vec![book])
}

pub(crate) fn not_found(id: BookId) -> CmdMessage {
    CmdMessage::error(format!("Book with id {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn overwrites_only_present_fields() {
        let mut catalog = StoreFixture::new()
            .with_book("Dune", "Frank Herbert", 1965, "Sci-Fi")
            .catalog;

        let patch = BookPatch::default()
            .with_title("Dune Messiah")
            .with_year(1969);
        let result = run(&mut catalog, 1, &patch);

        let book = &catalog.books()[0];
        assert_eq!(book.title, "Dune Messiah");
        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.year, 1969);
        assert_eq!(book.genre, "Sci-Fi");
        assert_eq!(result.affected_books[0], *book);
    }

    #[test]
    fn empty_patch_changes_nothing_but_reports_update() {
        let mut catalog = StoreFixture::new().with_books(2).catalog;
        let before = catalog.books().to_vec();

        let result = run(&mut catalog, 2, &BookPatch::default());

        assert_eq!(catalog.books(), &before[..]);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(result.messages[0].content.starts_with("Book updated: id: 2"));
    }

    #[test]
    fn unknown_id_reports_not_found_without_mutation() {
        let mut catalog = StoreFixture::new().with_books(2).catalog;
        let before = catalog.books().to_vec();

        let result = run(&mut catalog, 9, &BookPatch::default().with_title("X"));

        assert_eq!(catalog.books(), &before[..]);
        assert!(result.affected_books.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert_eq!(result.messages[0].content, "Book with id 9 not found");
    }
}
