use super::DataStore;
use crate::error::{CatalogError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    files: HashMap<PathBuf, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }
}

impl DataStore for InMemoryStore {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        self.files
            .get(path)
            .map(|contents| contents.lines().map(str::to_string).collect())
            .ok_or_else(|| CatalogError::FileNotFound(path.to_path_buf()))
    }

    fn write_lines(&mut self, path: &Path, lines: &[String]) -> Result<()> {
        let mut contents = String::new();
        for line in lines {
            contents.push_str(line);
            contents.push('\n');
        }
        self.files.insert(path.to_path_buf(), contents);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::catalog::Catalog;
    use crate::model::BookDraft;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        pub catalog: Catalog,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                catalog: Catalog::new(),
            }
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                let n = i + 1;
                self.catalog.insert(BookDraft::new(
                    format!("Test Book {}", n),
                    format!("Author {}", n),
                    2000 + n as i32,
                    "Test",
                ));
            }
            self
        }

        pub fn with_book(mut self, title: &str, author: &str, year: i32, genre: &str) -> Self {
            self.catalog
                .insert(BookDraft::new(title, author, year, genre));
            self
        }

        pub fn with_file(mut self, path: &str, lines: &[&str]) -> Self {
            let contents: String = lines.iter().map(|l| format!("{}\n", l)).collect();
            self.store = self.store.with_file(path, contents);
            self
        }
    }
}
