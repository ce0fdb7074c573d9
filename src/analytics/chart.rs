//! Bar-chart series for the per-source bias and transparency comparison.

use super::{categorize, BiasCategory};
use crate::types::{Article, FrameSummary};

/// Aligned chart series over one source-label ordering. `colors` applies
/// to the bias series only; transparency renders in a fixed neutral color.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub bias: Vec<f64>,
    pub transparency: Vec<f64>,
    pub colors: Vec<BiasCategory>,
}

fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Builds the chart series, preferring explicit per-source summaries.
///
/// When `frame_summary` is absent the series falls back to one entry per
/// article, with transparency derived from the omission score
/// (`100 - omission * 100`, or 100 when no score is present). A summary
/// list that is present but empty does not fall back; it means the
/// backend computed nothing.
///
/// Returns `None` when the chosen input is empty, so an empty chart is an
/// explicit no-data case rather than three empty series.
pub fn build(frame_summary: Option<&[FrameSummary]>, articles: &[Article]) -> Option<ChartSeries> {
    let entries: Vec<(String, Option<f64>, f64)> = match frame_summary {
        Some(frames) => frames
            .iter()
            .map(|f| {
                (
                    f.source.clone(),
                    f.bias_index,
                    f.transparency_score.unwrap_or(0.0),
                )
            })
            .collect(),
        None => articles
            .iter()
            .map(|a| {
                (
                    a.source.clone(),
                    a.bias_index,
                    100.0 - a.omission_score.unwrap_or(0.0) * 100.0,
                )
            })
            .collect(),
    };

    if entries.is_empty() {
        return None;
    }

    let mut series = ChartSeries {
        labels: Vec::with_capacity(entries.len()),
        bias: Vec::with_capacity(entries.len()),
        transparency: Vec::with_capacity(entries.len()),
        colors: Vec::with_capacity(entries.len()),
    };
    for (label, bias_index, transparency) in entries {
        series.labels.push(label);
        series.bias.push(clamp_score(bias_index.unwrap_or(0.0)));
        series.transparency.push(clamp_score(transparency));
        series.colors.push(categorize(bias_index));
    }
    Some(series)
}
