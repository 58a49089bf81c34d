//! Searching a whole corpus and ranking the results.
//!
//! ## Pipeline
//!
//! ```text
//! corpus ──search_for──▶ one result per sonnet (corpus order)
//!        ──filter──────▶ drop total_count == 0
//!        ──rank────────▶ stable sort by total_count, descending
//!        ──truncate────▶ keep max_results
//!        ──print───────▶ [1/n] ... [n/n]
//! ```
//!
//! Ties keep corpus order, so the same query over the same corpus always
//! prints the same report.
//!
//! ## Search Modes
//!
//! | Mode | Query "rose summer" matches a sonnet when |
//! |------|-------------------------------------------|
//! | Phrase | "rose summer" occurs verbatim |
//! | And | both "rose" and "summer" occur |
//! | Or | either occurs |
//!
//! In `And` and `Or` mode each word is searched on its own and the per-word
//! results for a sonnet are combined.

use std::io::{self, Write};
use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{Configuration, Result, SearchMode, SearchResult, Sonnet};

/// Runs queries over a corpus with fixed settings.
///
/// ```rust
/// use stanza::{Configuration, Searcher, Sonnet};
///
/// let corpus = vec![
///     Sonnet::new(1, "A", vec!["rose rose rose".into()]),
///     Sonnet::new(2, "B", vec!["no flowers here".into()]),
///     Sonnet::new(3, "C", vec!["a rose".into()]),
/// ];
/// let config = Configuration::default();
///
/// let report = Searcher::new(&corpus, &config).search("rose").unwrap();
/// let ids: Vec<_> = report.results().iter().map(|r| r.sonnet_id()).collect();
/// assert_eq!(ids, vec![1, 3]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Searcher<'a> {
    corpus: &'a [Sonnet],
    config: &'a Configuration,
}

impl<'a> Searcher<'a> {
    /// Create a searcher over `corpus`.
    #[must_use]
    pub fn new(corpus: &'a [Sonnet], config: &'a Configuration) -> Self {
        Self { corpus, config }
    }

    /// Search every sonnet and rank the matching ones.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::InvalidCombination`](crate::Error::InvalidCombination)
    /// from combining per-word results; this indicates a bug rather than bad
    /// input.
    pub fn search(&self, query: &str) -> Result<Report> {
        let started = Instant::now();

        let per_sonnet = self.search_unranked(query)?;
        let matched = per_sonnet.iter().filter(|r| !r.is_empty()).count();
        let results = rank(per_sonnet, self.config.max_results);

        let elapsed = started.elapsed();
        tracing::debug!(
            query,
            mode = %self.config.search_mode,
            matched,
            corpus = self.corpus.len(),
            elapsed_us = elapsed.as_micros() as u64,
            "search finished"
        );

        Ok(Report {
            query: query.to_string(),
            corpus_size: self.corpus.len(),
            matched,
            results,
            highlight: self.config.highlight,
            elapsed: Some(elapsed),
        })
    }

    /// One result per sonnet, in corpus order, zero-count results included.
    ///
    /// # Errors
    ///
    /// See [`Searcher::search`].
    pub fn search_unranked(&self, query: &str) -> Result<Vec<SearchResult>> {
        match self.config.search_mode {
            SearchMode::Phrase => {
                self.search_each(|sonnet| Ok(sonnet.search_for(query, self.config.case_sensitive)))
            }
            mode => {
                let terms: Vec<&str> = query.split_whitespace().collect();
                self.search_each(|sonnet| self.search_terms(sonnet, &terms, mode))
            }
        }
    }

    fn search_terms(&self, sonnet: &Sonnet, terms: &[&str], mode: SearchMode) -> Result<SearchResult> {
        let mut results = terms
            .iter()
            .map(|term| sonnet.search_for(term, self.config.case_sensitive));

        let Some(mut combined) = results.next() else {
            return Ok(SearchResult::empty(sonnet.id(), sonnet.title()));
        };

        for result in results {
            combined = match mode {
                SearchMode::And if combined.is_empty() || result.is_empty() => {
                    SearchResult::empty(sonnet.id(), sonnet.title())
                }
                _ => combined.combine_with(&result)?,
            };
        }
        Ok(combined)
    }

    #[cfg(feature = "parallel")]
    fn search_each<F>(&self, search: F) -> Result<Vec<SearchResult>>
    where
        F: Fn(&Sonnet) -> Result<SearchResult> + Send + Sync,
    {
        self.corpus.par_iter().map(search).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn search_each<F>(&self, search: F) -> Result<Vec<SearchResult>>
    where
        F: Fn(&Sonnet) -> Result<SearchResult> + Send + Sync,
    {
        self.corpus.iter().map(search).collect()
    }
}

/// Drop empty results, order by match count, and keep at most `max_results`.
///
/// The sort is stable: equal counts keep their input order.
#[must_use]
pub fn rank(results: Vec<SearchResult>, max_results: Option<usize>) -> Vec<SearchResult> {
    let mut ranked: Vec<SearchResult> = results.into_iter().filter(|r| !r.is_empty()).collect();
    ranked.sort_by(|a, b| b.total_count().cmp(&a.total_count()));
    if let Some(max) = max_results {
        ranked.truncate(max);
    }
    ranked
}

/// Search `corpus` for `query` and return the ranked results.
///
/// # Errors
///
/// See [`Searcher::search`].
pub fn search_all(corpus: &[Sonnet], query: &str, config: &Configuration) -> Result<Vec<SearchResult>> {
    Ok(Searcher::new(corpus, config).search(query)?.into_results())
}

/// The ranked outcome of one query.
#[derive(Debug, Clone)]
pub struct Report {
    query: String,
    corpus_size: usize,
    matched: usize,
    results: Vec<SearchResult>,
    highlight: bool,
    elapsed: Option<Duration>,
}

impl Report {
    /// The query as entered.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Ranked results, best first.
    #[must_use]
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// Consume the report, keeping the ranked results.
    #[must_use]
    pub fn into_results(self) -> Vec<SearchResult> {
        self.results
    }

    /// Number of sonnets searched.
    #[must_use]
    pub fn corpus_size(&self) -> usize {
        self.corpus_size
    }

    /// Number of sonnets with at least one match, before truncation.
    #[must_use]
    pub fn matched(&self) -> usize {
        self.matched
    }

    /// Time spent searching and ranking.
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    /// Forget the timing, for reproducible output.
    #[must_use]
    pub fn without_timing(mut self) -> Self {
        self.elapsed = None;
        self
    }

    /// The one-line summary printed above the results.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut line = format!(
            "{} out of {} sonnets contain \"{}\".",
            self.matched,
            self.corpus_size,
            self.query
        );
        if let Some(elapsed) = self.elapsed {
            line.push_str(&format!(
                " Your query took {:.2}ms.",
                elapsed.as_secs_f64() * 1000.0
            ));
        }
        line
    }

    /// Print the summary and every ranked result to standard output.
    ///
    /// # Errors
    ///
    /// Returns the underlying error if stdout cannot be written.
    pub fn print(&self) -> io::Result<()> {
        println!("{}", self.summary());
        let total_docs = self.results.len();
        for (idx, result) in self.results.iter().enumerate() {
            result.print(idx + 1, self.highlight, total_docs)?;
        }
        io::stdout().flush()
    }

    /// Write the summary and every ranked result.
    ///
    /// # Errors
    ///
    /// Returns the underlying error if `out` cannot be written.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.summary())?;
        let total_docs = self.results.len();
        for (idx, result) in self.results.iter().enumerate() {
            result.write_to(out, idx + 1, self.highlight, total_docs)?;
        }
        Ok(())
    }
}
