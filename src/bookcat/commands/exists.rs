use crate::catalog::Catalog;
use crate::model::BookId;

/// Lets a caller skip collecting edit input for an id that is not there.
/// `edit` does its own lookup regardless.
pub fn run(catalog: &Catalog, id: BookId) -> bool {
    catalog.contains(id)
}
