//! Property-based tests for span finding, searching and highlighting.
//!
//! These tests verify the invariants the report relies on:
//! - Soundness: every reported span is an occurrence of the pattern
//! - Completeness: every occurrence, overlapping or not, is reported
//! - Counting: a result's total equals the spans behind it
//! - Highlighting: markers can be stripped to recover the text

use proptest::prelude::*;
use stanza::{ansi_highlight, find_spans, fold_case, merge_spans, AnsiHighlighter, Sonnet, Span};

// =============================================================================
// Test Generators
// =============================================================================

/// Short strings over a small alphabet, so patterns actually occur.
fn small_alphabet_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abAB é]{0,40}").unwrap()
}

fn small_alphabet_pattern() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abAB é]{0,4}").unwrap()
}

/// Arbitrary text without escape characters.
fn arbitrary_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[^\x1b]{0,80}").unwrap()
}

fn lines() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(small_alphabet_text(), 0..8)
}

fn spans_within(len: usize) -> impl Strategy<Value = Vec<Span>> {
    prop::collection::vec((0..=len, 0..=len), 0..8).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(a, b)| Span::new(a.min(b), a.max(b)))
            .collect()
    })
}

// =============================================================================
// Invariant Helpers
// =============================================================================

/// Every start index where `pattern` occurs in `text`, by brute force.
fn naive_occurrences(text: &str, pattern: &str) -> Vec<usize> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    if pattern.is_empty() || pattern.len() > text.len() {
        return vec![];
    }
    (0..=text.len() - pattern.len())
        .filter(|&i| text[i..i + pattern.len()] == pattern[..])
        .collect()
}

fn strip_ansi(text: &str) -> String {
    text.replace(AnsiHighlighter::OPEN, "")
        .replace(AnsiHighlighter::CLOSE, "")
}

// =============================================================================
// find_spans
// =============================================================================

proptest! {
    #[test]
    fn spans_are_occurrences(text in small_alphabet_text(), pattern in small_alphabet_pattern()) {
        let chars: Vec<char> = text.chars().collect();
        let pattern_chars: Vec<char> = pattern.chars().collect();

        for span in find_spans(&text, &pattern) {
            prop_assert!(span.start < span.end);
            prop_assert!(span.end <= chars.len());
            prop_assert_eq!(&chars[span.range()], &pattern_chars[..]);
        }
    }

    #[test]
    fn spans_are_complete(text in small_alphabet_text(), pattern in small_alphabet_pattern()) {
        let starts: Vec<usize> = find_spans(&text, &pattern).iter().map(|s| s.start).collect();
        prop_assert_eq!(starts, naive_occurrences(&text, &pattern));
    }

    #[test]
    fn empty_pattern_never_matches(text in arbitrary_text()) {
        prop_assert!(find_spans(&text, "").is_empty());
    }

    #[test]
    fn fold_case_keeps_char_count(text in arbitrary_text()) {
        prop_assert_eq!(fold_case(&text).chars().count(), text.chars().count());
    }
}

// =============================================================================
// Sonnet::search_for and SearchResult::combine_with
// =============================================================================

proptest! {
    #[test]
    fn total_count_is_sum_of_line_spans(
        lines in lines(),
        query in small_alphabet_pattern(),
        case_sensitive in any::<bool>(),
    ) {
        let sonnet = Sonnet::new(1, "title", lines.clone());
        let result = sonnet.search_for(&query, case_sensitive);

        let normalize = |s: &str| if case_sensitive { s.to_string() } else { fold_case(s) };
        let expected: usize = lines
            .iter()
            .map(|line| find_spans(&normalize(line), &normalize(&query)).len())
            .sum();

        prop_assert_eq!(result.total_count(), expected);
        prop_assert!(result.matches().windows(2).all(|w| w[0].line_index() < w[1].line_index()));
        prop_assert!(result.matches().iter().all(|m| m.span_count() > 0));
    }

    #[test]
    fn combine_total_is_order_independent(
        lines in lines(),
        q1 in small_alphabet_pattern(),
        q2 in small_alphabet_pattern(),
        q3 in small_alphabet_pattern(),
    ) {
        let sonnet = Sonnet::new(9, "title", lines);
        let a = sonnet.search_for(&q1, false);
        let b = sonnet.search_for(&q2, false);
        let c = sonnet.search_for(&q3, false);

        let ab = a.combine_with(&b).unwrap();
        let ba = b.combine_with(&a).unwrap();
        prop_assert_eq!(ab.total_count(), ba.total_count());

        let ab_c = ab.combine_with(&c).unwrap();
        let a_bc = a.combine_with(&b.combine_with(&c).unwrap()).unwrap();
        prop_assert_eq!(ab_c.total_count(), a_bc.total_count());
        prop_assert_eq!(
            ab_c.total_count(),
            a.total_count() + b.total_count() + c.total_count()
        );

        let spans: usize = ab_c.matches().iter().map(|m| m.span_count()).sum();
        prop_assert_eq!(spans, ab_c.total_count());
    }
}

// =============================================================================
// Highlighting
// =============================================================================

proptest! {
    #[test]
    fn highlight_without_spans_is_identity(text in arbitrary_text()) {
        prop_assert_eq!(ansi_highlight(&text, &[]), text);
    }

    #[test]
    fn stripping_markers_restores_text(
        (text, spans) in arbitrary_text().prop_flat_map(|t| {
            let len = t.chars().count();
            (Just(t), spans_within(len))
        })
    ) {
        let highlighted = ansi_highlight(&text, &spans);
        prop_assert_eq!(strip_ansi(&highlighted), text);
    }

    #[test]
    fn one_marker_pair_per_merged_region(
        (text, spans) in small_alphabet_text().prop_flat_map(|t| {
            let len = t.chars().count();
            (Just(t), spans_within(len))
        })
    ) {
        let highlighted = ansi_highlight(&text, &spans);
        let opens = highlighted.matches(AnsiHighlighter::OPEN).count();
        let closes = highlighted.matches(AnsiHighlighter::CLOSE).count();

        prop_assert_eq!(opens, merge_spans(&spans).len());
        prop_assert_eq!(opens, closes);
    }

    #[test]
    fn merged_spans_are_disjoint(spans in spans_within(50)) {
        let merged = merge_spans(&spans);
        for w in merged.windows(2) {
            prop_assert!(w[0].end < w[1].start, "touching or overlapping: {:?}", w);
        }
        for span in spans.iter().filter(|s| !s.is_empty()) {
            prop_assert!(merged.iter().any(|m| m.start <= span.start && span.end <= m.end));
        }
    }
}
