//! # stanza
//!
//! Substring search, ranking and highlighting over a corpus of sonnets.
//!
//! ## The Problem
//!
//! "Which sonnets mention *thee*, and where?" sounds like a job for
//! `str::find`. But a useful answer needs more than the first hit:
//!
//! - Every occurrence, including overlapping ones ("aa" occurs twice in "aaa")
//! - Case-insensitive matching that still reports positions in the original
//!   text
//! - Sonnets ordered by how often they match
//! - Matches marked inline, without mangled markers where matches overlap
//!
//! ## Pieces
//!
//! ```text
//! find_spans(line, query)         every [start..end) where query occurs
//!        │
//!        ▼
//! LineMatch                       one line + its spans
//!        │
//!        ▼
//! SearchResult                    one sonnet: lines + total_count
//!        │    combine_with        merge per-word results for the same sonnet
//!        ▼
//! Searcher / Report               filter, rank, truncate, print
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use stanza::{Configuration, Searcher, Sonnet};
//!
//! let corpus = vec![
//!     Sonnet::new(18, "Sonnet 18", vec![
//!         "Shall I compare thee to a summer's day?".into(),
//!         "Thou art more lovely and more temperate:".into(),
//!     ]),
//!     Sonnet::new(130, "Sonnet 130", vec![
//!         "My mistress' eyes are nothing like the sun;".into(),
//!     ]),
//! ];
//!
//! let config = Configuration { highlight: false, ..Configuration::default() };
//! let report = Searcher::new(&corpus, &config).search("more").unwrap();
//!
//! assert_eq!(report.results().len(), 1);
//! assert_eq!(report.results()[0].total_count(), 2);
//! ```
//!
//! ## Offsets
//!
//! Spans count characters, not bytes, and case-insensitive search uses
//! [`fold_case`], which never changes a line's length in characters. A span
//! found in folded text therefore indexes the original line directly.
//!
//! ## Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `parallel` | Search sonnets on a rayon thread pool |
//!
//! Ranking is identical with and without `parallel`.

pub mod config;
pub mod corpus;
mod error;
mod highlight;
mod line_match;
mod result;
pub mod search;
mod sonnet;
mod span;

pub use config::{Configuration, SearchMode};
pub use error::{Error, Result};
pub use highlight::{
    ansi_highlight, highlight_with, merge_spans, AnsiHighlighter, BracketHighlighter, Highlighter,
};
pub use line_match::LineMatch;
pub use result::SearchResult;
pub use search::{rank, search_all, Report, Searcher};
pub use sonnet::{Sonnet, SonnetId};
pub use span::{find_spans, fold_case, Span};
