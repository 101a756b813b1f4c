//! # Storage Layer
//!
//! The catalog itself lives in memory; storage only matters for `save` and
//! `load`. The [`DataStore`] trait is the seam between those commands and the
//! file system.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage on the real file system
//!   - Relative paths resolve against an optional base directory
//!   - Every read and write opens, uses and drops its own handle
//!
//! - [`memory::InMemoryStore`]: Path → contents map for testing
//!   - No persistence
//!   - Lets command tests cover save/load without touching disk
//!
//! Stores deal in whole lines; the `id;title;author;year;genre` codec lives in
//! [`crate::format`].

use crate::error::Result;
use std::path::Path;

pub mod fs;
pub mod memory;

/// Line-oriented access to catalog files.
pub trait DataStore {
    /// Whether something already exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Read every line of the file. A missing file is `CatalogError::FileNotFound`.
    fn read_lines(&self, path: &Path) -> Result<Vec<String>>;

    /// Replace the file's contents with `lines`, each terminated by `\n`
    fn write_lines(&mut self, path: &Path, lines: &[String]) -> Result<()>;
}
