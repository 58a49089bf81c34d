//! The interactive prompt.
//!
//! Lines starting with `:` are commands; anything else is a query. Setting
//! changes are saved to the configuration file straight away.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use stanza::{Configuration, SearchMode, Searcher, Sonnet};

pub const BANNER: &str = r"
 ___ _____ _   _  _ ______ _
/ __|_   _/_\ | \| |_  /_\ | |
\__ \ | |/ _ \| .` |/ / _ \|_|
|___/ |_/_/ \_\_|\_/___/_/ \_(_)

Type a word or phrase to search the sonnets, :help for commands.";

pub const HELP: &str = "\
Commands:
  :help                       show this help
  :quit                       exit
  :highlight on|off           mark matches with colors
  :search-mode phrase|and|or  how multi-word queries are evaluated
  :case on|off                case-sensitive matching
  :max <N>|all                print at most N sonnets
Anything else is a search query.";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Empty,
    Quit,
    Help,
    Highlight(bool),
    SearchMode(SearchMode),
    CaseSensitive(bool),
    MaxResults(Option<usize>),
    Usage(&'static str),
    Unknown,
    Query(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }
        if !line.starts_with(':') {
            return Self::Query(line.to_string());
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [":quit"] => Self::Quit,
            [":help"] => Self::Help,
            [":highlight", arg] => on_off(arg).map_or(Self::Usage("Usage: :highlight on|off"), Self::Highlight),
            [":highlight", ..] => Self::Usage("Usage: :highlight on|off"),
            [":search-mode", arg] => arg
                .parse()
                .map_or(Self::Usage("Usage: :search-mode phrase|and|or"), Self::SearchMode),
            [":search-mode", ..] => Self::Usage("Usage: :search-mode phrase|and|or"),
            [":case", arg] => on_off(arg).map_or(Self::Usage("Usage: :case on|off"), Self::CaseSensitive),
            [":case", ..] => Self::Usage("Usage: :case on|off"),
            [":max", arg] if arg.eq_ignore_ascii_case("all") => Self::MaxResults(None),
            [":max", arg] => arg
                .parse()
                .map_or(Self::Usage("Usage: :max <N>|all"), |n| Self::MaxResults(Some(n))),
            [":max", ..] => Self::Usage("Usage: :max <N>|all"),
            _ => Self::Unknown,
        }
    }
}

fn on_off(arg: &str) -> Option<bool> {
    match arg.to_ascii_lowercase().as_str() {
        "on" => Some(true),
        "off" => Some(false),
        _ => None,
    }
}

/// A running prompt: corpus, live settings, and where to save them.
pub struct Session<'a> {
    corpus: &'a [Sonnet],
    config: Configuration,
    config_path: PathBuf,
}

impl<'a> Session<'a> {
    pub fn new(corpus: &'a [Sonnet], config: Configuration, config_path: PathBuf) -> Self {
        Self {
            corpus,
            config,
            config_path,
        }
    }

    /// Read lines until `:quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> anyhow::Result<()> {
        let mut lines = input.lines();
        loop {
            write!(out, "> ")?;
            out.flush()?;

            let Some(line) = lines.next() else {
                writeln!(out, "\nBye.")?;
                return Ok(());
            };
            if !self.handle(&line?, out)? {
                return Ok(());
            }
        }
    }

    /// Execute one input line. Returns `false` when the session should end.
    pub fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> anyhow::Result<bool> {
        match Command::parse(line) {
            Command::Empty => {}
            Command::Quit => {
                writeln!(out, "Bye.")?;
                return Ok(false);
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Highlight(on) => {
                self.config.highlight = on;
                writeln!(out, "Highlighting {}", if on { "ON" } else { "OFF" })?;
                self.save();
            }
            Command::SearchMode(mode) => {
                self.config.search_mode = mode;
                writeln!(out, "Search mode set to {mode}")?;
                self.save();
            }
            Command::CaseSensitive(on) => {
                self.config.case_sensitive = on;
                writeln!(out, "Case-sensitive matching {}", if on { "ON" } else { "OFF" })?;
                self.save();
            }
            Command::MaxResults(max) => {
                self.config.max_results = max;
                match max {
                    Some(n) => writeln!(out, "Showing at most {n} sonnets")?,
                    None => writeln!(out, "Showing all matching sonnets")?,
                }
                self.save();
            }
            Command::Usage(usage) => writeln!(out, "{usage}")?,
            Command::Unknown => writeln!(out, "Unknown command. Type :help for commands.")?,
            Command::Query(query) => {
                let report = Searcher::new(self.corpus, &self.config).search(&query)?;
                report.write_to(out)?;
            }
        }
        Ok(true)
    }

    fn save(&self) {
        if let Err(e) = self.config.save(&self.config_path) {
            tracing::error!(path = %self.config_path.display(), error = %e, "writing configuration failed");
        }
    }
}
