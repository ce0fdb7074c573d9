//! Aggregate view of a cluster's per-source bias results, as shown on the
//! cluster cards in an analysis result listing.

use super::{average, MAX_SOURCE_BADGES};
use crate::types::FrameSummary;

/// What a cluster card displays: the average bias across sources and up
/// to five source badges with an overflow count for the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterCardView {
    pub average_bias: f64,
    pub source_badges: Vec<String>,
    pub overflow_count: usize,
}

impl ClusterCardView {
    /// Builds the card view from a cluster's bias results, in list order.
    /// An empty list yields a zeroed card rather than an error.
    pub fn from_results(results: &[FrameSummary]) -> Self {
        let bias_values: Vec<Option<f64>> = results.iter().map(|r| r.bias_index).collect();
        let source_badges: Vec<String> = results
            .iter()
            .take(MAX_SOURCE_BADGES)
            .map(|r| r.source.clone())
            .collect();
        ClusterCardView {
            average_bias: average(&bias_values),
            source_badges,
            overflow_count: results.len().saturating_sub(MAX_SOURCE_BADGES),
        }
    }
}
