//! Inline match highlighting.
//!
//! ## Merging Before Marking
//!
//! Spans from an overlapping scan, or from several query terms, routinely
//! overlap. Marking each span separately would nest markers:
//!
//! ```text
//! Text:   "aaaa"   spans [0..2] [1..3] [2..4]
//!
//! Naive:  <<<aa>a>a>        <- nested, unreadable
//! Merged: <aaaa>            <- one region per covered run
//! ```
//!
//! Spans are sorted, then merged when they overlap or touch, so every covered
//! character sits inside exactly one marker pair.
//!
//! ## Strategies
//!
//! The marker pair is a [`Highlighter`]. [`AnsiHighlighter`] paints a yellow
//! background for terminals; [`BracketHighlighter`] uses `[` and `]` for
//! plain output and logs.

use crate::Span;

/// A pair of markers that wrap each highlighted region.
pub trait Highlighter: Send + Sync {
    /// Inserted before a highlighted region.
    fn open(&self) -> &str;

    /// Inserted after a highlighted region.
    fn close(&self) -> &str;
}

/// Yellow background, black text; reset afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiHighlighter;

impl AnsiHighlighter {
    /// Escape sequence opening a highlighted region.
    pub const OPEN: &'static str = "\x1b[43m\x1b[30m";
    /// Escape sequence resetting all attributes.
    pub const CLOSE: &'static str = "\x1b[0m";
}

impl Highlighter for AnsiHighlighter {
    fn open(&self) -> &str {
        Self::OPEN
    }

    fn close(&self) -> &str {
        Self::CLOSE
    }
}

/// Square brackets around each region.
#[derive(Debug, Clone, Copy, Default)]
pub struct BracketHighlighter;

impl Highlighter for BracketHighlighter {
    fn open(&self) -> &str {
        "["
    }

    fn close(&self) -> &str {
        "]"
    }
}

/// Sort spans and merge those that overlap or touch.
///
/// Empty spans are dropped.
///
/// ```rust
/// use stanza::{merge_spans, Span};
///
/// let merged = merge_spans(&[Span::new(4, 6), Span::new(0, 2), Span::new(1, 3)]);
/// assert_eq!(merged, vec![Span::new(0, 3), Span::new(4, 6)]);
/// ```
#[must_use]
pub fn merge_spans(spans: &[Span]) -> Vec<Span> {
    let mut sorted: Vec<Span> = spans.iter().copied().filter(|s| !s.is_empty()).collect();
    sorted.sort_unstable();

    let mut merged: Vec<Span> = Vec::with_capacity(sorted.len());
    for span in sorted {
        match merged.last_mut() {
            Some(current) if current.touches(&span) => {
                current.end = current.end.max(span.end);
            }
            _ => merged.push(span),
        }
    }
    merged
}

/// Wrap every character covered by `spans` in the highlighter's markers.
///
/// Spans may be unsorted and may overlap. Spans reaching past the end of
/// `text` are clamped to it.
#[must_use]
pub fn highlight_with(highlighter: &dyn Highlighter, text: &str, spans: &[Span]) -> String {
    if spans.is_empty() {
        return text.to_string();
    }

    // Byte offset of every character boundary, end of text included.
    let offsets: Vec<usize> = text
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_len = offsets.len() - 1;

    let mut out = String::with_capacity(text.len() + spans.len() * 16);
    let mut cursor = 0;

    for span in merge_spans(spans) {
        let start = span.start.min(char_len);
        let end = span.end.min(char_len);
        if start >= end {
            continue;
        }

        let (start, end) = (offsets[start], offsets[end]);
        out.push_str(&text[cursor..start]);
        out.push_str(highlighter.open());
        out.push_str(&text[start..end]);
        out.push_str(highlighter.close());
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Highlight with terminal colors.
///
/// ```rust
/// use stanza::{ansi_highlight, Span};
///
/// assert_eq!(ansi_highlight("rose", &[]), "rose");
/// assert_eq!(
///     ansi_highlight("a rose", &[Span::new(2, 6)]),
///     "a \x1b[43m\x1b[30mrose\x1b[0m"
/// );
/// ```
#[must_use]
pub fn ansi_highlight(text: &str, spans: &[Span]) -> String {
    highlight_with(&AnsiHighlighter, text, spans)
}
