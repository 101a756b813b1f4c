//! # CLI Layer
//!
//! This module is **one possible UI client** for bookcat, not the application
//! itself. It is the only place that:
//! - Reads stdin and writes stdout/stderr
//! - Parses arguments and sets up logging
//! - Validates raw user input before it reaches the API
//!
//! ## Structure
//!
//! - [`run`]: parse args, set up logging and context, dispatch
//! - `setup`: clap definitions
//! - `menu`: the interactive loop (generic over reader/writer for tests)
//! - `prompt`: line input helpers
//! - `print`: rendering of `CmdResult`s

mod menu;
mod print;
mod prompt;
mod setup;

use bookcat::api::{CatalogApi, ConfigAction};
use bookcat::config::CatalogConfig;
use bookcat::error::{CatalogError, Result};
use bookcat::store::fs::FileStore;
use clap::Parser;
use directories::ProjectDirs;
use menu::Menu;
use print::{print_config, print_messages};
use setup::{Cli, Commands};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "BOOKCAT_LOG";
const HOME_ENV: &str = "BOOKCAT_HOME";

struct AppContext {
    api: CatalogApi<FileStore>,
    config: CatalogConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let config_dir = resolve_config_dir(&cli)?;
    tracing::debug!(config_dir = %config_dir.display(), "resolved config dir");

    match cli.command {
        Some(Commands::Config { key, value }) => handle_config(config_dir, key, value),
        None => {
            let ctx = init_context(config_dir)?;
            handle_menu(ctx, cli.file)
        }
    }
}

/// Diagnostics go to stderr so they never mix with menu output.
fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(cli.effective_log_level().directive()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn resolve_config_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.config_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "bookcat", "bookcat")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| CatalogError::Config("Could not determine config dir".to_string()))
}

fn init_context(config_dir: PathBuf) -> Result<AppContext> {
    let config = CatalogConfig::load(&config_dir)?;
    let api = CatalogApi::new(FileStore::new()).with_config_dir(config_dir);
    Ok(AppContext { api, config })
}

fn handle_menu(ctx: AppContext, file: Option<PathBuf>) -> Result<()> {
    let preload = file.or_else(|| ctx.config.autoload_file.clone());
    let stdin = io::stdin();
    let mut menu = Menu::new(ctx.api, ctx.config, stdin.lock(), io::stdout());
    if let Some(path) = preload {
        menu.preload(path)?;
    }
    menu.run()
}

fn handle_config(config_dir: PathBuf, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let api = CatalogApi::new(FileStore::new()).with_config_dir(config_dir);
    let result = api.config(action.clone())?;
    let mut out = io::stdout();
    if let (ConfigAction::ShowAll, Some(config)) = (&action, &result.config) {
        print_config(&mut out, config)?;
    }
    print_messages(&mut out, &result.messages)?;
    Ok(())
}
