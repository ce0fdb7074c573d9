//! Wire types for the analysis backend's JSON API.
//!
//! Field names mirror the backend payloads. Values are owned view data:
//! a fresh fetch replaces the whole object graph, nothing is mutated in
//! place after it has been handed to a renderer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single scraped article with the scores attached by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub source: String,
    pub title: String,
    pub text: String,
    pub url: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    /// 0-100 slant score; absent when the article has not been analyzed.
    #[serde(default)]
    pub bias_index: Option<f64>,
    /// 0-1 fraction of known facts this article omits.
    #[serde(default)]
    pub omission_score: Option<f64>,
}

/// Verification status of an extracted fact. The backend sends this as a
/// free-form string; anything unrecognized counts as unverified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum FactStatus {
    Supported,
    Contradicted,
    Unverified,
}

impl From<String> for FactStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "supported" => FactStatus::Supported,
            "contradicted" => FactStatus::Contradicted,
            _ => FactStatus::Unverified,
        }
    }
}

/// A fact extracted from a cluster, with the sources and quotes backing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fact {
    #[serde(rename = "fact")]
    pub text: String,
    pub status: FactStatus,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub quotes: Vec<String>,
}

/// A loaded phrase flagged by the bias analyzer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopPhrase {
    pub phrase: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Per-source framing summary within a cluster.
///
/// One entry is expected per distinct source. The backend does not
/// guarantee uniqueness; where a per-source lookup is needed the first
/// occurrence is authoritative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSummary {
    pub source: String,
    #[serde(default)]
    pub bias_index: Option<f64>,
    #[serde(default)]
    pub transparency_score: Option<f64>,
    /// -1..1 signed sentiment indicator; absent is treated as 0.
    #[serde(default)]
    pub tone: Option<f64>,
    #[serde(default)]
    pub top_phrases: Vec<TopPhrase>,
}

/// A fully analyzed cluster as returned by `GET /search/clusters/{id}`.
///
/// `facts` and `frame_summary` are `null` on the wire until the analysis
/// pipeline has filled them in; `None` and an empty list are distinct
/// (an empty list means the backend computed nothing, not that it has
/// yet to run).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
    pub id: String,
    pub query: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub facts: Option<Vec<Fact>>,
    #[serde(default)]
    pub fact_summary: Option<String>,
    #[serde(default)]
    pub frame_summary: Option<Vec<FrameSummary>>,
}

/// Cluster overview entry in an analyze response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub cluster_id: String,
    #[serde(default)]
    pub articles_count: u64,
    #[serde(default)]
    pub facts_count: u64,
    #[serde(default)]
    pub bias_results: Vec<FrameSummary>,
}

/// Response of `POST /search/analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub total_articles: u64,
    #[serde(default)]
    pub clusters: Vec<ClusterSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fact_status_decodes_lowercase() {
        let fact: Fact = serde_json::from_str(
            r#"{"fact": "the bridge collapsed", "status": "contradicted"}"#,
        )
        .unwrap();
        assert_eq!(fact.status, FactStatus::Contradicted);
        assert_eq!(fact.text, "the bridge collapsed");
        assert!(fact.sources.is_empty());
    }

    #[test]
    fn test_fact_status_unknown_falls_back_to_unverified() {
        let fact: Fact =
            serde_json::from_str(r#"{"fact": "x", "status": "disputed"}"#).unwrap();
        assert_eq!(fact.status, FactStatus::Unverified);
    }

    #[test]
    fn test_frame_summary_tolerates_missing_scores() {
        let frame: FrameSummary = serde_json::from_str(r#"{"source": "reuters.com"}"#).unwrap();
        assert_eq!(frame.source, "reuters.com");
        assert!(frame.bias_index.is_none());
        assert!(frame.tone.is_none());
        assert!(frame.top_phrases.is_empty());
    }

    #[test]
    fn test_cluster_tolerates_null_analysis_fields() {
        let json = r#"{
            "id": "c1",
            "query": "climate",
            "created_at": "2025-11-03T12:00:00Z",
            "articles": [],
            "facts": null,
            "fact_summary": null,
            "frame_summary": null
        }"#;
        let cluster: Cluster = serde_json::from_str(json).unwrap();
        assert!(cluster.facts.is_none());
        assert!(cluster.frame_summary.is_none());
        assert!(cluster.created_at.is_some());
    }

    #[test]
    fn test_analyze_response_decodes_with_extra_fields() {
        let json = r#"{
            "query": "climate",
            "total_articles": 12,
            "clusters": [{
                "cluster_id": "c1",
                "articles_count": 4,
                "facts_count": 7,
                "bias_results": [
                    {"source": "A", "bias_index": 80, "article_id": "ignored"},
                    {"source": "B", "bias_index": 30, "lexical_bias": 0.2}
                ]
            }]
        }"#;
        let response: AnalyzeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total_articles, 12);
        assert_eq!(response.clusters.len(), 1);
        assert_eq!(response.clusters[0].bias_results[0].bias_index, Some(80.0));
    }
}
