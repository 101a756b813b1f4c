//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It owns the
//! [`Catalog`] and the storage backend, and is the single entry point a front
//! end talks to.
//!
//! ## Return Shapes
//!
//! - In-memory operations (`add`, `edit`, `list`, `search`) cannot fail and
//!   return a [`CmdResult`] directly. "Not found" and "no matches" are messages.
//! - Operations that touch storage (`save`, `load`, `config`) return
//!   `Result<CmdResult>`; `Err` means the file system or config file failed.
//!   Duplicates, bad lines and a pending overwrite are still `Ok`.
//!
//! ## Generic Over DataStore
//!
//! `CatalogApi<S: DataStore>` is generic over the storage backend:
//! - Production: `CatalogApi<FileStore>`
//! - Testing: `CatalogApi<InMemoryStore>`

use crate::catalog::Catalog;
use crate::commands;
use crate::error::{CatalogError, Result};
use crate::model::{BookDraft, BookId, BookPatch, SearchField};
use crate::store::DataStore;
use std::path::{Path, PathBuf};

/// The main API facade for catalog operations.
pub struct CatalogApi<S: DataStore> {
    catalog: Catalog,
    store: S,
    config_dir: Option<PathBuf>,
}

impl<S: DataStore> CatalogApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            catalog: Catalog::new(),
            store,
            config_dir: None,
        }
    }

    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
    ) -> CmdResult {
        commands::add::run(
            &mut self.catalog,
            BookDraft::new(title, author, year, genre),
        )
    }

    pub fn edit(&mut self, id: BookId, patch: &BookPatch) -> CmdResult {
        commands::edit::run(&mut self.catalog, id, patch)
    }

    pub fn list(&self) -> CmdResult {
        commands::list::run(&self.catalog)
    }

    pub fn search(&self, field: SearchField, term: &str) -> CmdResult {
        commands::search::run(&self.catalog, field, term)
    }

    pub fn exists(&self, id: BookId) -> bool {
        commands::exists::run(&self.catalog, id)
    }

    pub fn save(&mut self, path: impl AsRef<Path>, directive: SaveDirective) -> Result<CmdResult> {
        commands::save::run(&self.catalog, &mut self.store, path.as_ref(), directive)
    }

    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<CmdResult> {
        commands::load::run(&mut self.catalog, &self.store, path.as_ref())
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        let dir = self
            .config_dir
            .as_deref()
            .ok_or_else(|| CatalogError::Config("No config directory available".to_string()))?;
        commands::config::run(dir, action)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, LoadSummary, MessageLevel, SaveDirective};
