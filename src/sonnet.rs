//! The searchable document: a titled sequence of lines.

use crate::span::{find_spans, fold_case};
use crate::{LineMatch, SearchResult};

/// Identifier of a sonnet within its corpus.
pub type SonnetId = u32;

/// A single sonnet.
///
/// ```rust
/// use stanza::Sonnet;
///
/// let sonnet = Sonnet::new(
///     1,
///     "Sonnet 1",
///     vec!["shall I compare thee".into(), "to a summer's day".into()],
/// );
///
/// let result = sonnet.search_for("a", false);
/// assert_eq!(result.total_count(), 4);
/// assert_eq!(result.matches()[0].line_index(), 0);
/// assert_eq!(result.matches()[1].line_index(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sonnet {
    id: SonnetId,
    title: String,
    lines: Vec<String>,
}

impl Sonnet {
    /// Create a new sonnet.
    #[must_use]
    pub fn new(id: SonnetId, title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            id,
            title: title.into(),
            lines,
        }
    }

    /// Corpus identifier.
    #[must_use]
    pub fn id(&self) -> SonnetId {
        self.id
    }

    /// Title line.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Lines in reading order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Find every occurrence of `query` in this sonnet's lines.
    ///
    /// Without `case_sensitive`, query and lines are compared after
    /// [`fold_case`]. Matched lines keep their original text. An empty query
    /// yields an empty result.
    #[must_use]
    pub fn search_for(&self, query: &str, case_sensitive: bool) -> SearchResult {
        let normalize = |text: &str| {
            if case_sensitive {
                text.to_string()
            } else {
                fold_case(text)
            }
        };

        let query = normalize(query);
        if query.is_empty() {
            return SearchResult::empty(self.id, self.title.clone());
        }

        let title_spans = find_spans(&normalize(&self.title), &query);

        let matches = self
            .lines
            .iter()
            .enumerate()
            .filter_map(|(idx, line)| {
                let spans = find_spans(&normalize(line), &query);
                (!spans.is_empty()).then(|| LineMatch::new(idx, line.clone(), spans))
            })
            .collect();

        SearchResult::new(self.id, self.title.clone(), title_spans, matches)
    }
}

impl std::fmt::Display for Sonnet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Sonnet {{ id: {}, title: {:?}, lines: {} }}",
            self.id,
            self.title,
            self.lines.len()
        )
    }
}
