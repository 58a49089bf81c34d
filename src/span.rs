//! Match spans and the overlapping substring scan that produces them.
//!
//! ## Character Offsets
//!
//! Unlike byte-oriented string slicing, a [`Span`] counts Unicode scalar
//! values. A query typed by a person lines up with what they see, and case
//! folding can change the byte width of a character (KELVIN SIGN, U+212A, is
//! three bytes while its lowercase "k" is one) without changing how many
//! characters there are:
//!
//! ```text
//! Line:    "Ô dear"
//! Chars:    0 1 2 3 4 5
//! Bytes:    0 2 3 4 5 6   <- Ô is two bytes wide
//!
//! find_spans("ô dear", "dear") -> [2..6]
//! ```
//!
//! ## Overlap
//!
//! The scan slides one character at a time, so every occurrence is reported
//! even when occurrences share characters:
//!
//! ```text
//! Text:    "aaaa"
//! Pattern: "aa"
//!
//! [0..2]  "aa··"
//! [1..3]  "·aa·"
//! [2..4]  "··aa"
//! ```

/// A half-open range `[start, end)` of character indices into a line.
///
/// ```rust
/// use stanza::Span;
///
/// let span = Span::new(2, 6);
/// assert_eq!(span.len(), 4);
/// assert_eq!(span.range(), 2..6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// First character covered.
    pub start: usize,
    /// One past the last character covered.
    pub end: usize,
}

impl Span {
    /// Create a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of characters covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether this span covers no characters.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// The span as a standard range.
    #[must_use]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// Whether `other` overlaps or touches this span.
    #[must_use]
    pub const fn touches(&self, other: &Span) -> bool {
        other.start <= self.end && self.start <= other.end
    }
}

impl From<(usize, usize)> for Span {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Find every occurrence of `pattern` in `text`, overlaps included.
///
/// Both inputs are compared exactly; fold them with [`fold_case`] first for a
/// case-insensitive scan. An empty pattern matches nowhere.
///
/// ```rust
/// use stanza::{find_spans, Span};
///
/// assert_eq!(find_spans("aaa", "aa"), vec![Span::new(0, 2), Span::new(1, 3)]);
/// assert!(find_spans("anything", "").is_empty());
/// assert!(find_spans("ab", "abc").is_empty());
/// ```
#[must_use]
pub fn find_spans(text: &str, pattern: &str) -> Vec<Span> {
    if pattern.is_empty() {
        return vec![];
    }

    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();

    if pattern.len() > text.len() {
        return vec![];
    }

    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern.as_slice())
        .map(|(i, _)| Span::new(i, i + pattern.len()))
        .collect()
}

/// Lowercase `text` without changing its length in characters.
///
/// Characters whose lowercase form is a single character are replaced by it;
/// the few whose lowercase form expands (such as `İ`) are kept as they are, so
/// spans found in the folded text index the original text too.
///
/// ```rust
/// use stanza::fold_case;
///
/// assert_eq!(fold_case("Shall I Compare"), "shall i compare");
/// assert_eq!(fold_case("İx").chars().count(), 2);
/// ```
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_matches() {
        assert_eq!(
            find_spans("aaaa", "aa"),
            vec![Span::new(0, 2), Span::new(1, 3), Span::new(2, 4)]
        );
    }

    #[test]
    fn test_non_overlapping_matches() {
        let spans = find_spans("thee and thee", "thee");
        assert_eq!(spans, vec![Span::new(0, 4), Span::new(9, 13)]);
    }

    #[test]
    fn test_empty_pattern() {
        assert!(find_spans("", "").is_empty());
        assert!(find_spans("abc", "").is_empty());
    }

    #[test]
    fn test_pattern_longer_than_text() {
        assert!(find_spans("ab", "abc").is_empty());
        assert!(find_spans("", "a").is_empty());
    }

    #[test]
    fn test_whole_text_match() {
        assert_eq!(find_spans("rose", "rose"), vec![Span::new(0, 4)]);
    }

    #[test]
    fn test_case_sensitive_by_construction() {
        assert!(find_spans("Rose", "rose").is_empty());
    }

    #[test]
    fn test_unicode_character_offsets() {
        // Ô is two bytes but one character
        let spans = find_spans("ô dear", "dear");
        assert_eq!(spans, vec![Span::new(2, 6)]);

        let spans = find_spans("日本語日本", "日本");
        assert_eq!(spans, vec![Span::new(0, 2), Span::new(3, 5)]);
    }

    #[test]
    fn test_fold_case_preserves_length() {
        for text in ["Shall I", "ÀÉÎ", "İstanbul", "ΣΊΣΥΦΟΣ", "ǅ", ""] {
            assert_eq!(
                fold_case(text).chars().count(),
                text.chars().count(),
                "length changed for {text:?}"
            );
        }
    }

    #[test]
    fn test_fold_case_lowercases() {
        assert_eq!(fold_case("When I Do COUNT"), "when i do count");
        assert_eq!(fold_case("ÀÉÎ"), "àéî");
    }

    #[test]
    fn test_span_helpers() {
        let span = Span::from((3, 7));
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
        assert_eq!(span.to_string(), "3..7");
        assert!(span.touches(&Span::new(7, 9)));
        assert!(!span.touches(&Span::new(8, 9)));
        assert!(Span::new(2, 2).is_empty());
    }
}
