//! Per-sonnet search results: combination and presentation.
//!
//! ## Combining Partial Results
//!
//! A multi-term query produces one result per term for the same sonnet.
//! Combining merges them line by line:
//!
//! ```text
//! "thee":  line 0 [12..16]            line 5 [3..7]
//! "summer":            line 1 [5..11]
//!
//! combined: line 0 [12..16]  line 1 [5..11]  line 5 [3..7]
//! total:    1 + 1 + 1 = 3
//! ```
//!
//! When both sides matched the same line, the receiver's spans come first.
//! Identical spans are kept; highlighting merges them later.
//!
//! ## Report Block
//!
//! ```text
//!
//! [ 1/12] Sonnet 18: Shall I compare thee to a summer's day? (3 matches)
//!   [ 1] Shall I compare thee to a summer's day?
//!   [ 2] Thou art more lovely and more temperate:
//! ```

use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::highlight::{self, AnsiHighlighter, Highlighter};
use crate::sonnet::SonnetId;
use crate::{Error, LineMatch, Result, Span};

/// Aggregated matches of one query against one sonnet.
///
/// `total_count` always equals the number of spans across `matches`, and
/// `matches` is ordered by line. Title spans are kept for display only and do
/// not count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    sonnet_id: SonnetId,
    title: String,
    title_spans: Vec<Span>,
    matches: Vec<LineMatch>,
    total_count: usize,
}

impl SearchResult {
    /// Build a result from matched lines, ordering them by line index.
    ///
    /// Entries that share a line index are folded into one line match,
    /// spans in input order.
    #[must_use]
    pub fn new(
        sonnet_id: SonnetId,
        title: impl Into<String>,
        title_spans: Vec<Span>,
        matches: Vec<LineMatch>,
    ) -> Self {
        let mut lines = BTreeMap::new();
        for lm in matches {
            merge_line(&mut lines, lm);
        }
        Self::from_lines(sonnet_id, title.into(), title_spans, lines)
    }

    fn from_lines(
        sonnet_id: SonnetId,
        title: String,
        title_spans: Vec<Span>,
        lines: BTreeMap<usize, LineMatch>,
    ) -> Self {
        let matches: Vec<LineMatch> = lines.into_values().collect();
        let total_count = matches.iter().map(LineMatch::span_count).sum();
        Self {
            sonnet_id,
            title,
            title_spans,
            matches,
            total_count,
        }
    }

    /// A result with no matches.
    #[must_use]
    pub fn empty(sonnet_id: SonnetId, title: impl Into<String>) -> Self {
        Self::new(sonnet_id, title, vec![], vec![])
    }

    /// The sonnet this result belongs to.
    #[must_use]
    pub fn sonnet_id(&self) -> SonnetId {
        self.sonnet_id
    }

    /// The sonnet's title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Matches found in the title.
    #[must_use]
    pub fn title_spans(&self) -> &[Span] {
        &self.title_spans
    }

    /// Matched lines, ascending by line index.
    #[must_use]
    pub fn matches(&self) -> &[LineMatch] {
        &self.matches
    }

    /// Number of matches across all lines.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Whether no line matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// Merge another result for the same sonnet into a new result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCombination`] if the results belong to
    /// different sonnets.
    ///
    /// ```rust
    /// use stanza::Sonnet;
    ///
    /// let sonnet = Sonnet::new(18, "Sonnet 18", vec!["Shall I compare thee".into()]);
    /// let a = sonnet.search_for("thee", false);
    /// let b = sonnet.search_for("compare", false);
    ///
    /// let both = a.combine_with(&b).unwrap();
    /// assert_eq!(both.total_count(), 2);
    /// assert_eq!(both.matches().len(), 1);
    /// ```
    pub fn combine_with(&self, other: &SearchResult) -> Result<SearchResult> {
        if self.sonnet_id != other.sonnet_id {
            return Err(Error::InvalidCombination {
                left: self.sonnet_id,
                right: other.sonnet_id,
            });
        }

        let mut lines: BTreeMap<usize, LineMatch> = self
            .matches
            .iter()
            .map(|lm| (lm.line_index(), lm.clone()))
            .collect();
        for lm in &other.matches {
            merge_line(&mut lines, lm.clone());
        }

        let mut title_spans = Vec::with_capacity(self.title_spans.len() + other.title_spans.len());
        title_spans.extend_from_slice(&self.title_spans);
        title_spans.extend_from_slice(&other.title_spans);
        title_spans.sort_unstable();

        Ok(Self::from_lines(
            self.sonnet_id,
            self.title.clone(),
            title_spans,
            lines,
        ))
    }

    /// Wrap every character covered by `spans` in terminal highlight codes.
    ///
    /// See [`ansi_highlight`](crate::ansi_highlight).
    #[must_use]
    pub fn ansi_highlight(text: &str, spans: &[Span]) -> String {
        highlight::ansi_highlight(text, spans)
    }

    /// Print this result to standard output as rank `idx` of `total_docs`.
    ///
    /// # Errors
    ///
    /// Returns the underlying error if stdout cannot be written.
    pub fn print(&self, idx: usize, highlight: bool, total_docs: usize) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out, idx, highlight, total_docs)
    }

    /// Write this result's report block, using terminal colors when
    /// `highlight` is set.
    ///
    /// # Errors
    ///
    /// Returns the underlying error if `out` cannot be written.
    pub fn write_to<W: Write>(
        &self,
        out: &mut W,
        idx: usize,
        highlight: bool,
        total_docs: usize,
    ) -> io::Result<()> {
        let highlighter = if highlight {
            Some(&AnsiHighlighter as &dyn Highlighter)
        } else {
            None
        };
        self.write_with(out, idx, highlighter, total_docs)
    }

    /// Write this result's report block with an explicit marker strategy.
    ///
    /// `None` prints line text unmodified.
    ///
    /// # Errors
    ///
    /// Returns the underlying error if `out` cannot be written.
    pub fn write_with<W: Write>(
        &self,
        out: &mut W,
        idx: usize,
        highlighter: Option<&dyn Highlighter>,
        total_docs: usize,
    ) -> io::Result<()> {
        let render = |text: &str, spans: &[Span]| match highlighter {
            Some(h) => highlight::highlight_with(h, text, spans),
            None => text.to_string(),
        };

        let width = total_docs.max(idx).to_string().len();
        let noun = if self.total_count == 1 { "match" } else { "matches" };

        writeln!(out)?;
        writeln!(
            out,
            "[{idx:>width$}/{total_docs}] {} ({} {noun})",
            render(&self.title, &self.title_spans),
            self.total_count,
        )?;
        for lm in &self.matches {
            writeln!(
                out,
                "  [{:2}] {}",
                lm.line_number(),
                render(lm.text(), lm.spans())
            )?;
        }
        Ok(())
    }
}

/// Insert `lm`, appending its spans when the line is already present.
fn merge_line(lines: &mut BTreeMap<usize, LineMatch>, lm: LineMatch) {
    let merged = match lines.get(&lm.line_index()) {
        Some(existing) => existing.extended(&lm),
        None => lm,
    };
    lines.insert(merged.line_index(), merged);
}
