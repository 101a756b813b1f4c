use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::model::SearchField;

pub fn run(catalog: &Catalog, field: SearchField, term: &str) -> CmdResult {
    let found: Vec<_> = catalog
        .books()
        .iter()
        .filter(|book| field.matches(book, term))
        .cloned()
        .collect();
    tracing::debug!(%field, term, found = found.len(), "search");

    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::info("No books found."));
    }
    result.with_listed_books(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn catalog() -> Catalog {
        StoreFixture::new()
            .with_book("The Hobbit", "J. R. R. Tolkien", 1937, "Fantasy")
            .with_book("Dune", "Frank Herbert", 1965, "Sci-Fi")
            .with_book("Snow Crash", "Neal Stephenson", 1992, "Sci-Fi")
            .with_book("Anathem", "Neal Stephenson", 2008, "Sci-Fi")
            .catalog
    }

    fn titles(result: &CmdResult) -> Vec<&str> {
        result.listed_books.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn title_is_case_insensitive_substring() {
        let catalog = catalog();
        assert_eq!(titles(&run(&catalog, SearchField::Title, "hobbit")), vec!["The Hobbit"]);
        assert_eq!(titles(&run(&catalog, SearchField::Title, "HOB")), vec!["The Hobbit"]);
    }

    #[test]
    fn returns_every_match_in_catalog_order() {
        let catalog = catalog();
        assert_eq!(
            titles(&run(&catalog, SearchField::Genre, "sci")),
            vec!["Dune", "Snow Crash", "Anathem"]
        );
        assert_eq!(
            titles(&run(&catalog, SearchField::Author, "stephenson")),
            vec!["Snow Crash", "Anathem"]
        );
    }

    #[test]
    fn year_matches_decimal_substring() {
        let catalog = catalog();
        assert_eq!(
            titles(&run(&catalog, SearchField::Year, "19")),
            vec!["The Hobbit", "Dune", "Snow Crash"]
        );
        assert_eq!(titles(&run(&catalog, SearchField::Year, "200")), vec!["Anathem"]);
    }

    #[test]
    fn id_is_exact() {
        let catalog = catalog();
        assert_eq!(titles(&run(&catalog, SearchField::Id, "2")), vec!["Dune"]);
    }

    #[test]
    fn non_numeric_id_is_empty_not_error() {
        let result = run(&catalog(), SearchField::Id, "two");
        assert!(result.listed_books.is_empty());
        assert_eq!(result.messages[0].content, "No books found.");
    }
}
