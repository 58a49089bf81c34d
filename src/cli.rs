//! Command-line arguments and log setup for the `stanza` binary.
//!
//! Logs go to stderr so they never interleave with the report on stdout.
//! The filter is taken from `STANZA_LOG`, then `RUST_LOG`, then the
//! `--verbose` / `--quiet` flags (default: warnings).

use std::path::PathBuf;

use clap::Parser;
use stanza::{Configuration, SearchMode};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[allow(clippy::struct_excessive_bools)] // one per flag
#[derive(Debug, Parser)]
#[command(
    name = "stanza",
    about = "Search a corpus of sonnets and print ranked, highlighted matches",
    version
)]
pub struct Cli {
    /// JSON corpus file: an array of {"title", "lines"} records
    #[arg(long, default_value = "sonnets.json")]
    pub corpus: PathBuf,

    /// JSON configuration file, created on first change
    #[arg(long, default_value = "config.json")]
    pub config: PathBuf,

    /// Run a single query and exit instead of starting the prompt
    #[arg(short = 'Q', long)]
    pub query: Option<String>,

    /// Match case exactly
    #[arg(long)]
    pub case_sensitive: bool,

    /// Print matches without terminal colors
    #[arg(long)]
    pub no_highlight: bool,

    /// Print at most N sonnets
    #[arg(long, value_name = "N")]
    pub max_results: Option<usize>,

    /// How multi-word queries are evaluated: phrase, and, or
    #[arg(long, value_name = "MODE")]
    pub mode: Option<SearchMode>,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded configuration.
    pub fn apply_overrides(&self, config: &mut Configuration) {
        if self.case_sensitive {
            config.case_sensitive = true;
        }
        if self.no_highlight {
            config.highlight = false;
        }
        if let Some(max) = self.max_results {
            config.max_results = Some(max);
        }
        if let Some(mode) = self.mode {
            config.search_mode = mode;
        }
    }

    fn default_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::ERROR
        } else {
            Level::WARN
        }
    }
}

/// Install the global tracing subscriber.
pub fn init_tracing(cli: &Cli) {
    let filter = build_env_filter(cli.default_level());
    let use_ansi = std::io::IsTerminal::is_terminal(&std::io::stderr());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi)
        .with_target(cli.verbose)
        .without_time()
        .compact()
        .init();
}

fn build_env_filter(level: Level) -> EnvFilter {
    if let Ok(directives) = std::env::var("STANZA_LOG") {
        if let Ok(filter) = EnvFilter::try_new(&directives) {
            return filter;
        }
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(level.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["stanza"]);
        assert_eq!(cli.corpus, PathBuf::from("sonnets.json"));
        assert_eq!(cli.config, PathBuf::from("config.json"));
        assert!(cli.query.is_none());
        assert_eq!(cli.default_level(), Level::WARN);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "stanza",
            "--case-sensitive",
            "--no-highlight",
            "--max-results",
            "3",
            "--mode",
            "or",
        ]);
        let mut config = Configuration::default();
        cli.apply_overrides(&mut config);

        assert!(config.case_sensitive);
        assert!(!config.highlight);
        assert_eq!(config.max_results, Some(3));
        assert_eq!(config.search_mode, SearchMode::Or);
    }

    #[test]
    fn test_no_flags_keep_file_settings() {
        let cli = Cli::parse_from(["stanza", "-Q", "rose"]);
        let mut config = Configuration {
            highlight: false,
            max_results: Some(2),
            ..Configuration::default()
        };
        cli.apply_overrides(&mut config);
        assert!(!config.highlight);
        assert_eq!(config.max_results, Some(2));
        assert_eq!(cli.query.as_deref(), Some("rose"));
    }

    #[test]
    fn test_invalid_mode_rejected() {
        assert!(Cli::try_parse_from(["stanza", "--mode", "xor"]).is_err());
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["stanza", "-v", "-q"]).is_err());
        assert_eq!(Cli::parse_from(["stanza", "-v"]).default_level(), Level::DEBUG);
        assert_eq!(Cli::parse_from(["stanza", "-q"]).default_level(), Level::ERROR);
    }
}
