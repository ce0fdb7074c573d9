//! Derived analytics over backend payloads.
//!
//! Everything in this module is a pure, deterministic function of its
//! input. Missing or empty input degrades to zero/neutral defaults or an
//! explicit no-data signal; these functions never fail, since upstream
//! data is not guaranteed complete.

pub mod chart;
pub mod cluster_card;
pub mod coverage;
pub mod primitives;
pub mod tone;

pub use chart::ChartSeries;
pub use cluster_card::ClusterCardView;
pub use coverage::{FactCoverage, FactMatcher, KeywordOverlapMatcher};
pub use primitives::{average, categorize, BiasCategory};
pub use tone::{ToneAnchor, ToneBar, ToneColor};

/// Bias index above this value is categorized as high (strict greater-than).
pub const BIAS_HIGH_THRESHOLD: f64 = 70.0;
/// Bias index above this value (and at most the high threshold) is medium.
pub const BIAS_MEDIUM_THRESHOLD: f64 = 40.0;
/// Maximum number of source badges on a cluster card.
pub const MAX_SOURCE_BADGES: usize = 5;
/// Keyword tokens must be strictly longer than this to participate in
/// fact-coverage matching.
pub const MIN_KEYWORD_CHARS: usize = 3;
/// Tone magnitude above this value leaves the neutral color band.
pub const TONE_COLOR_THRESHOLD: f64 = 0.3;
/// Maximum number of loaded phrases shown per source.
pub const MAX_TOP_PHRASES: usize = 5;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AnalyzeResponse;

    // Full decode-and-derive pass over an analyze payload.
    #[test]
    fn test_analyze_payload_end_to_end() {
        let json = r#"{
            "total_articles": 12,
            "clusters": [{
                "cluster_id": "c1",
                "bias_results": [
                    {"source": "A", "bias_index": 80},
                    {"source": "B", "bias_index": 30}
                ]
            }]
        }"#;
        let response: AnalyzeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total_articles, 12);

        let card = ClusterCardView::from_results(&response.clusters[0].bias_results);
        assert_eq!(card.average_bias, 55.0);
        assert_eq!(card.source_badges, vec!["A", "B"]);
        assert_eq!(card.overflow_count, 0);

        let results = &response.clusters[0].bias_results;
        assert_eq!(categorize(results[0].bias_index), BiasCategory::High);
        assert_eq!(categorize(results[1].bias_index), BiasCategory::Low);
    }
}
