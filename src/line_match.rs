//! One matched line of a sonnet.

use crate::highlight::{highlight_with, Highlighter};
use crate::Span;

/// A sonnet line together with every match span found on it.
///
/// `line_index` is zero-based within the owning sonnet. Spans index the
/// line's characters, in the order they were found.
///
/// ```rust
/// use stanza::{LineMatch, Span};
///
/// let line = LineMatch::new(1, "Thou art more lovely", vec![Span::new(0, 4)]);
/// assert_eq!(line.line_number(), 2);
/// assert_eq!(line.span_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    line_index: usize,
    text: String,
    spans: Vec<Span>,
}

impl LineMatch {
    /// Create a new line match.
    #[must_use]
    pub fn new(line_index: usize, text: impl Into<String>, spans: Vec<Span>) -> Self {
        Self {
            line_index,
            text: text.into(),
            spans,
        }
    }

    /// Zero-based position of the line in its sonnet.
    #[must_use]
    pub fn line_index(&self) -> usize {
        self.line_index
    }

    /// One-based line number, as shown to readers.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_index + 1
    }

    /// The original, unfolded line text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Match spans in discovery order.
    #[must_use]
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Number of matches on this line.
    #[must_use]
    pub fn span_count(&self) -> usize {
        self.spans.len()
    }

    /// The line text with matched characters wrapped in markers.
    #[must_use]
    pub fn highlighted(&self, highlighter: &dyn Highlighter) -> String {
        highlight_with(highlighter, &self.text, &self.spans)
    }

    /// A copy of this line whose spans are followed by `other`'s spans.
    pub(crate) fn extended(&self, other: &LineMatch) -> LineMatch {
        debug_assert_eq!(self.line_index, other.line_index);
        let mut spans = Vec::with_capacity(self.spans.len() + other.spans.len());
        spans.extend_from_slice(&self.spans);
        spans.extend_from_slice(&other.spans);
        LineMatch::new(self.line_index, self.text.clone(), spans)
    }
}

impl std::fmt::Display for LineMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LineMatch {{ line: {}, spans: {} }}",
            self.line_index,
            self.spans.len()
        )
    }
}
