//! # Bookcat Architecture
//!
//! Bookcat is a **UI-agnostic book catalog library**. The interactive menu in
//! the binary is one client of it; nothing below the API knows about a terminal.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, input validation, rendering          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Catalog and the DataStore                       │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, edit, list, search, exists, save, load, config      │
//! │  - Pure logic over Catalog + DataStore                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, format.rs)                          │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! │  - `id;title;author;year;genre` line codec                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors vs. Outcomes
//!
//! A missing id on edit, a search with no hits, duplicates skipped on load and
//! a save waiting for an overwrite decision are all ordinary results carried
//! in [`commands::CmdResult`]. Only file system and config failures surface as
//! [`error::CatalogError`].
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: unit tests against `InMemoryStore` and the store fixtures.
//!    This is where most of the testing lives.
//! 2. **API**: dispatch and end-to-end flows over an in-memory store.
//! 3. **CLI**: menu sessions driven through in-memory readers, plus binary
//!    tests under `tests/` that feed stdin.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Logic for each operation
//! - [`catalog`]: The in-memory book collection and id counter
//! - [`store`]: Storage abstraction and implementations
//! - [`format`]: Catalog file line format
//! - [`model`]: Core data types (`Book`, `BookPatch`, `SearchField`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Menu, prompts, rendering and argument parsing for the binary (not part of the lib API)

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod store;
