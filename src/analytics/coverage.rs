//! Fact-coverage matrix: which sources carry which extracted facts.
//!
//! Coverage is decided by keyword overlap, a deterministic stand-in for
//! semantic fact matching. Precision is known to be rough; the matcher is
//! behind a trait so a better one can replace it without touching the
//! matrix construction.

use tracing::debug;

use super::MIN_KEYWORD_CHARS;
use crate::types::{Article, Fact};
use crate::TARGET_ANALYTICS;

/// Decides whether an article's text covers a fact.
pub trait FactMatcher {
    fn covers(&self, fact_text: &str, article_text: &str) -> bool;
}

/// Matches a fact against an article by keyword containment: the fact
/// text is lowercased and split on whitespace, tokens longer than
/// [`MIN_KEYWORD_CHARS`] are kept, and the fact counts as covered when any
/// kept token appears as a substring of the lowercased article text.
///
/// A fact with no usable token matches nothing.
pub struct KeywordOverlapMatcher;

impl FactMatcher for KeywordOverlapMatcher {
    fn covers(&self, fact_text: &str, article_text: &str) -> bool {
        let haystack = article_text.to_lowercase();
        fact_text
            .to_lowercase()
            .split_whitespace()
            .filter(|token| token.chars().count() > MIN_KEYWORD_CHARS)
            .any(|token| haystack.contains(token))
    }
}

/// Presence matrix of facts (rows) against sources (columns).
#[derive(Debug, Clone, PartialEq)]
pub struct FactCoverage {
    /// Distinct article sources in first-occurrence order.
    pub sources: Vec<String>,
    /// `grid[fact_index][source_index]` is true when the source's
    /// representative article covers the fact.
    pub grid: Vec<Vec<bool>>,
}

/// Builds the coverage matrix for a cluster.
///
/// Columns are the distinct sources of `articles` in first-occurrence
/// order, and each column is represented by the first article from that
/// source; later articles from the same source do not participate. This
/// mirrors the per-source lookup rule used elsewhere: the first occurrence
/// is authoritative.
///
/// Returns `None` when there are no facts or no articles, so callers can
/// tell "nothing to show" apart from a computed matrix.
pub fn build(
    facts: &[Fact],
    articles: &[Article],
    matcher: &dyn FactMatcher,
) -> Option<FactCoverage> {
    if facts.is_empty() || articles.is_empty() {
        return None;
    }

    let mut sources: Vec<String> = Vec::new();
    let mut representatives: Vec<&Article> = Vec::new();
    for article in articles {
        if !sources.iter().any(|s| *s == article.source) {
            sources.push(article.source.clone());
            representatives.push(article);
        }
    }

    let grid: Vec<Vec<bool>> = facts
        .iter()
        .map(|fact| {
            representatives
                .iter()
                .map(|article| matcher.covers(&fact.text, &article.text))
                .collect()
        })
        .collect();

    debug!(
        target: TARGET_ANALYTICS,
        "Built fact coverage matrix: {} facts x {} sources",
        facts.len(),
        sources.len()
    );

    Some(FactCoverage { sources, grid })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FactStatus;

    fn article(id: &str, source: &str, text: &str) -> Article {
        Article {
            id: id.to_string(),
            source: source.to_string(),
            title: String::new(),
            text: text.to_string(),
            url: String::new(),
            published_at: None,
            bias_index: None,
            omission_score: None,
        }
    }

    fn fact(text: &str) -> Fact {
        Fact {
            text: text.to_string(),
            status: FactStatus::Unverified,
            sources: Vec::new(),
            quotes: Vec::new(),
        }
    }

    #[test]
    fn test_keyword_overlap_is_case_insensitive_substring() {
        let matcher = KeywordOverlapMatcher;
        assert!(matcher.covers(
            "the bridge collapsed suddenly",
            "Officials confirmed the span COLLAPSED overnight"
        ));
        assert!(!matcher.covers("the bridge collapsed suddenly", "traffic was rerouted"));
    }

    #[test]
    fn test_short_tokens_are_ignored() {
        let matcher = KeywordOverlapMatcher;
        // Every token is three characters or fewer, so nothing can match.
        assert!(!matcher.covers("he saw it all", "he saw it all happen live"));
    }

    #[test]
    fn test_matrix_marks_presence_per_source() {
        let facts = vec![fact("the bridge collapsed suddenly")];
        let articles = vec![
            article("1", "A", "the bridge collapsed during rush hour"),
            article("2", "B", "officials promised an investigation"),
        ];
        let coverage = build(&facts, &articles, &KeywordOverlapMatcher).unwrap();
        assert_eq!(coverage.sources, vec!["A", "B"]);
        assert_eq!(coverage.grid, vec![vec![true, false]]);
    }

    #[test]
    fn test_duplicate_sources_collapse_to_first_article() {
        let facts = vec![fact("the bridge collapsed suddenly")];
        let articles = vec![
            article("1", "A", "no relevant words here"),
            // Same source, would match, but the first article is authoritative.
            article("2", "A", "the bridge collapsed"),
        ];
        let coverage = build(&facts, &articles, &KeywordOverlapMatcher).unwrap();
        assert_eq!(coverage.sources, vec!["A"]);
        assert_eq!(coverage.grid, vec![vec![false]]);
    }

    #[test]
    fn test_fact_without_usable_tokens_is_absent_everywhere() {
        let facts = vec![fact("he is it")];
        let articles = vec![article("1", "A", "he is it and more")];
        let coverage = build(&facts, &articles, &KeywordOverlapMatcher).unwrap();
        assert_eq!(coverage.grid, vec![vec![false]]);
    }

    #[test]
    fn test_empty_inputs_signal_no_data() {
        let articles = vec![article("1", "A", "text")];
        assert!(build(&[], &articles, &KeywordOverlapMatcher).is_none());
        assert!(build(&[fact("some fact here")], &[], &KeywordOverlapMatcher).is_none());
    }
}
