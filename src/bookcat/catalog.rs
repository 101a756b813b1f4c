//! # Catalog
//!
//! The in-memory collection every operation works on. Books are kept in
//! insertion order and are never removed.
//!
//! Ids come from a counter that starts at 1 and only moves forward, so an id is
//! never handed out twice within one catalog, whether the book came from `add`
//! or from a file import.

use crate::model::{Book, BookDraft, BookId};

#[derive(Debug)]
pub struct Catalog {
    books: Vec<Book>,
    next_id: BookId,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            next_id: 1,
        }
    }

    /// Assigns the next id and appends the book.
    pub fn insert(&mut self, draft: BookDraft) -> &Book {
        let book = Book::new(self.next_id, draft);
        self.next_id += 1;
        self.books.push(book);
        &self.books[self.books.len() - 1]
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn next_id(&self) -> BookId {
        self.next_id
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: BookId) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.id == id)
    }

    pub fn contains(&self, id: BookId) -> bool {
        self.get(id).is_some()
    }

    pub fn has_same_work(&self, draft: &BookDraft) -> bool {
        self.books.iter().any(|b| b.same_work(draft))
    }
}
