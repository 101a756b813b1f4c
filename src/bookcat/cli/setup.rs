use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "bookcat", bin_name = "bookcat", version)]
#[command(about = "Menu-driven book catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file to load before the menu starts
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Directory holding config.json (defaults to $BOOKCAT_HOME, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level for stderr diagnostics
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

impl Cli {
    pub fn effective_log_level(&self) -> LogLevel {
        if self.verbose && self.log_level < LogLevel::Debug {
            LogLevel::Debug
        } else {
            self.log_level
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get or set configuration
    Config {
        /// Configuration key (default-file, confirm-overwrite, autoload-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_runs_menu() {
        let cli = Cli::try_parse_from(["bookcat"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.file, None);
        assert_eq!(cli.effective_log_level(), LogLevel::Warn);
    }

    #[test]
    fn file_and_verbose() {
        let cli = Cli::try_parse_from(["bookcat", "-v", "--file", "lib.txt"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("lib.txt")));
        assert_eq!(cli.effective_log_level(), LogLevel::Debug);
    }

    #[test]
    fn verbose_does_not_lower_trace() {
        let cli = Cli::try_parse_from(["bookcat", "-v", "--log-level", "trace"]).unwrap();
        assert_eq!(cli.effective_log_level(), LogLevel::Trace);
    }

    #[test]
    fn config_subcommand() {
        let cli =
            Cli::try_parse_from(["bookcat", "config", "default-file", "shelf.txt"]).unwrap();
        match cli.command {
            Some(Commands::Config { key, value }) => {
                assert_eq!(key.as_deref(), Some("default-file"));
                assert_eq!(value.as_deref(), Some("shelf.txt"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
