//! Loading a sonnet corpus from JSON.
//!
//! The expected shape is the one PoetryDB serves, an array of records:
//!
//! ```text
//! [
//!   {
//!     "title": "Sonnet 18: Shall I compare thee to a summer's day?",
//!     "author": "William Shakespeare",
//!     "lines": ["Shall I compare thee to a summer's day?", "..."],
//!     "linecount": "14"
//!   }
//! ]
//! ```
//!
//! Only `title` and `lines` are required. An optional numeric `id` is used
//! when present; otherwise sonnets are numbered from 1 in file order. Ids
//! must be unique across the corpus, whichever way they were assigned.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::sonnet::SonnetId;
use crate::{Error, Result, Sonnet};

#[derive(Debug, Deserialize)]
struct SonnetRecord {
    #[serde(default)]
    id: Option<SonnetId>,
    title: String,
    lines: Vec<String>,
}

/// Parse a corpus from a reader.
///
/// # Errors
///
/// Returns [`Error::Json`] if the input is not a JSON array of sonnet
/// records, and [`Error::DuplicateSonnetId`] if two records end up with the
/// same id.
///
/// ```rust
/// let json = r#"[{"title": "Sonnet 1", "lines": ["From fairest creatures"]}]"#;
/// let corpus = stanza::corpus::from_reader(json.as_bytes()).unwrap();
/// assert_eq!(corpus[0].id(), 1);
/// ```
pub fn from_reader(reader: impl Read) -> Result<Vec<Sonnet>> {
    let records: Vec<SonnetRecord> = serde_json::from_reader(reader)?;
    into_sonnets(records)
}

/// Parse a corpus from a JSON string.
///
/// # Errors
///
/// Same as [`from_reader`].
pub fn from_json(text: &str) -> Result<Vec<Sonnet>> {
    let records: Vec<SonnetRecord> = serde_json::from_str(text)?;
    into_sonnets(records)
}

/// Load a corpus file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened, or a parse error as
/// in [`from_reader`].
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Sonnet>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let corpus = from_reader(std::io::BufReader::new(file))?;
    tracing::info!(path = %path.display(), sonnets = corpus.len(), "loaded corpus");
    Ok(corpus)
}

fn into_sonnets(records: Vec<SonnetRecord>) -> Result<Vec<Sonnet>> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .zip(1..)
        .map(|(record, position)| {
            let id = record.id.unwrap_or(position);
            if !seen.insert(id) {
                return Err(Error::DuplicateSonnetId { id });
            }
            Ok(Sonnet::new(id, record.title, record.lines))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poetrydb_shape() {
        let json = r#"[
            {"title": "Sonnet 1", "author": "William Shakespeare",
             "lines": ["From fairest creatures we desire increase,"], "linecount": "1"},
            {"title": "Sonnet 2", "lines": ["When forty winters shall besiege thy brow,"]}
        ]"#;
        let corpus = from_json(json).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus[1].id(), 2);
        assert_eq!(corpus[1].title(), "Sonnet 2");
        assert_eq!(corpus[0].lines().len(), 1);
    }

    #[test]
    fn test_explicit_ids() {
        let json = r#"[{"id": 130, "title": "Sonnet 130", "lines": []}]"#;
        assert_eq!(from_json(json).unwrap()[0].id(), 130);
    }

    #[test]
    fn test_explicit_id_clashing_with_position() {
        let json = r#"[
            {"id": 2, "title": "A", "lines": ["a"]},
            {"title": "B", "lines": ["b"]}
        ]"#;
        let err = from_json(json).unwrap_err();
        assert!(matches!(err, Error::DuplicateSonnetId { id: 2 }));
    }

    #[test]
    fn test_repeated_explicit_id() {
        let json = r#"[
            {"id": 7, "title": "A", "lines": []},
            {"id": 7, "title": "B", "lines": []}
        ]"#;
        let err = from_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::DuplicateSonnetId { id: 7 }));
    }

    #[test]
    fn test_mixed_ids_without_clash() {
        let json = r#"[
            {"id": 10, "title": "A", "lines": []},
            {"title": "B", "lines": []}
        ]"#;
        let ids: Vec<_> = from_json(json).unwrap().iter().map(Sonnet::id).collect();
        assert_eq!(ids, vec![10, 2]);
    }

    #[test]
    fn test_empty_corpus() {
        assert!(from_json("[]").unwrap().is_empty());
    }

    #[test]
    fn test_missing_lines_is_error() {
        let err = from_json(r#"[{"title": "Sonnet 1"}]"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
