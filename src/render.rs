//! Terminal presentation of search results, analysis overviews, and
//! cluster detail views.

use colored::{ColoredString, Colorize};
use prettytable::{format, Cell, Row as PrettyRow, Table};

use crate::analytics::{
    categorize, chart, cluster_card::ClusterCardView, coverage, BiasCategory, ChartSeries,
    FactCoverage, KeywordOverlapMatcher, ToneAnchor, ToneBar, ToneColor, MAX_TOP_PHRASES,
};
use crate::types::{AnalyzeResponse, Article, Cluster, ClusterSummary, Fact, FactStatus};

const CHART_BAR_WIDTH: usize = 40;
const TONE_TRACK_WIDTH: usize = 20;

/// Char-boundary-safe truncation with a trailing ellipsis.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}

fn heading(title: &str) {
    println!("\n{}", "═".repeat(100).bright_blue());
    println!("{}", title.bright_blue());
    println!("{}", "═".repeat(100).bright_blue());
}

fn subheading(title: &str) {
    println!("\n{}", title.bright_blue());
    println!("{}", "─".repeat(80).dimmed());
}

/// Bias badge, colored by category. A missing score renders distinctly
/// as `N/A` (and colors as the low band, same as everywhere else).
fn bias_badge(bias_index: Option<f64>) -> ColoredString {
    let label = match bias_index {
        Some(value) => format!("Bias: {:.1}", value),
        None => "Bias: N/A".to_string(),
    };
    paint_category(label, categorize(bias_index))
}

fn paint_category(label: String, category: BiasCategory) -> ColoredString {
    match category {
        BiasCategory::High => label.bright_red(),
        BiasCategory::Medium => label.bright_yellow(),
        BiasCategory::Low => label.bright_green(),
    }
}

/// Transparency badge; always the fixed neutral color.
fn transparency_badge(transparency_score: Option<f64>) -> ColoredString {
    match transparency_score {
        Some(value) => format!("Transparency: {:.1}", value).bright_blue(),
        None => "Transparency: N/A".bright_blue(),
    }
}

fn format_date(date: Option<chrono::DateTime<chrono::Utc>>) -> String {
    match date {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => "unknown date".to_string(),
    }
}

/// Renders plain search results as an article table.
pub fn render_search_results(articles: &[Article]) {
    if articles.is_empty() {
        println!("{}", "No articles found. Try a different query.".dimmed());
        return;
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(PrettyRow::new(vec![
        Cell::new("Title"),
        Cell::new("Source"),
        Cell::new("Published"),
        Cell::new("Bias"),
    ]));
    for article in articles {
        let bias = match article.bias_index {
            Some(value) => format!("{:.1}", value),
            None => "N/A".to_string(),
        };
        table.add_row(PrettyRow::new(vec![
            Cell::new(&truncate(&article.title, 60)),
            Cell::new(&article.source),
            Cell::new(&format_date(article.published_at)),
            Cell::new(&bias),
        ]));
    }
    table.printstd();
    println!("{} articles", articles.len());
}

/// Renders an analyze response: the totals header plus one card per
/// cluster.
pub fn render_analysis(response: &AnalyzeResponse) {
    heading("ANALYSIS RESULTS");
    println!(
        "Found {} articles across {} clusters",
        response.total_articles,
        response.clusters.len()
    );

    if response.clusters.is_empty() {
        println!("\n{}", "No clusters found. Try a different query.".dimmed());
        return;
    }

    for summary in &response.clusters {
        render_cluster_summary_card(summary);
    }
}

fn render_cluster_summary_card(summary: &ClusterSummary) {
    let card = ClusterCardView::from_results(&summary.bias_results);

    println!("\n{}", "─".repeat(80).dimmed());
    println!(
        "{}  {} articles • {} facts",
        format!("Cluster {}", summary.cluster_id).bright_white(),
        summary.articles_count,
        summary.facts_count
    );
    println!(
        "{}",
        paint_category(
            format!("Avg Bias: {:.1}", card.average_bias),
            categorize(Some(card.average_bias))
        )
    );

    if !card.source_badges.is_empty() {
        let mut badges: Vec<String> = card
            .source_badges
            .iter()
            .map(|s| format!("[{}]", s))
            .collect();
        if card.overflow_count > 0 {
            badges.push(format!("[+{} more]", card.overflow_count));
        }
        println!("Sources: {}", badges.join(" "));
    }
}

/// Renders the full cluster detail view: fact summary, framing analysis,
/// bias chart, coverage heatmap, and the article list.
pub fn render_cluster(cluster: &Cluster) {
    heading("CLUSTER ANALYSIS");
    println!("Query: {}", cluster.query.bright_yellow());
    println!(
        "{} articles • Created {}",
        cluster.articles.len(),
        format_date(cluster.created_at)
    );

    subheading("Fact Summary");
    render_facts(
        cluster.facts.as_deref().unwrap_or(&[]),
        cluster.fact_summary.as_deref(),
    );

    subheading("Framing Analysis");
    render_frame_analysis(cluster);

    subheading("Bias Index & Transparency by Source");
    render_chart(chart::build(
        cluster.frame_summary.as_deref(),
        &cluster.articles,
    ));

    subheading("Fact Coverage Heatmap");
    let facts = cluster.facts.as_deref().unwrap_or(&[]);
    render_heatmap(
        facts,
        coverage::build(facts, &cluster.articles, &KeywordOverlapMatcher),
    );

    subheading("Articles");
    if cluster.articles.is_empty() {
        println!("{}", "No articles in this cluster.".dimmed());
    }
    for article in &cluster.articles {
        render_article_card(article);
    }
}

fn render_facts(facts: &[Fact], summary: Option<&str>) {
    if let Some(summary) = summary {
        println!("{}", summary);
        println!();
    }

    if facts.is_empty() {
        println!("{}", "No facts extracted yet.".dimmed());
        return;
    }

    for fact in facts {
        let status = match fact.status {
            FactStatus::Supported => "supported".bright_green(),
            FactStatus::Contradicted => "contradicted".bright_red(),
            FactStatus::Unverified => "unverified".bright_yellow(),
        };
        println!(
            "[{}] {}  ({} sources)",
            status,
            fact.text,
            fact.sources.len()
        );
        if let Some(quote) = fact.quotes.first() {
            println!("    {}", format!("\"{}\"", truncate(quote, 100)).italic());
        }
    }
}

fn render_frame_analysis(cluster: &Cluster) {
    let frames = match cluster.frame_summary.as_deref() {
        Some(frames) if !frames.is_empty() => frames,
        _ => {
            println!("{}", "No framing analysis available.".dimmed());
            return;
        }
    };

    for frame in frames {
        println!("\n{}", frame.source.bright_white());
        println!(
            "  {}  {}",
            bias_badge(frame.bias_index),
            transparency_badge(frame.transparency_score)
        );
        println!("  Tone: {} {}", tone_track(frame.tone), tone_label(frame.tone));

        if !frame.top_phrases.is_empty() {
            println!("  Loaded phrases:");
            for phrase in frame.top_phrases.iter().take(MAX_TOP_PHRASES) {
                let annotation = phrase
                    .reason
                    .as_deref()
                    .or(phrase.kind.as_deref())
                    .unwrap_or("");
                if annotation.is_empty() {
                    println!("    • {}", truncate(&phrase.phrase, 30));
                } else {
                    println!(
                        "    • {} {}",
                        truncate(&phrase.phrase, 30),
                        format!("({})", annotation).dimmed()
                    );
                }
            }
        }
    }
}

/// Fixed-width tone track built from the bar geometry: negative bars grow
/// from the right edge.
fn tone_track(tone: Option<f64>) -> String {
    let bar = ToneBar::from_tone(tone);
    let filled = ((bar.width_percent / 100.0) * TONE_TRACK_WIDTH as f64).round() as usize;
    let filled = filled.min(TONE_TRACK_WIDTH);
    let fill = "█".repeat(filled);
    let fill = match bar.color {
        ToneColor::Positive => fill.bright_green(),
        ToneColor::Negative => fill.bright_red(),
        ToneColor::Neutral => fill.bright_yellow(),
    };
    let gap = " ".repeat(TONE_TRACK_WIDTH - filled);
    match bar.anchor {
        ToneAnchor::Left => format!("[{}{}]", fill, gap),
        ToneAnchor::Right => format!("[{}{}]", gap, fill),
    }
}

fn tone_label(tone: Option<f64>) -> String {
    let value = tone.unwrap_or(0.0);
    if value > 0.0 {
        format!("+{:.2}", value)
    } else {
        format!("{:.2}", value)
    }
}

fn render_chart(series: Option<ChartSeries>) {
    let series = match series {
        Some(series) => series,
        None => {
            println!("{}", "No data available for chart.".dimmed());
            return;
        }
    };

    let labels: Vec<String> = series.labels.iter().map(|l| truncate(l, 20)).collect();
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    for (i, label) in labels.iter().enumerate() {
        let bias_bar = scaled_bar(series.bias[i]);
        let transparency_bar = scaled_bar(series.transparency[i]);
        println!(
            "{:<width$}  bias {} {:.1}",
            label,
            paint_category(bias_bar, series.colors[i]),
            series.bias[i],
            width = label_width
        );
        println!(
            "{:<width$}  tran {} {:.1}",
            "",
            transparency_bar.bright_blue(),
            series.transparency[i],
            width = label_width
        );
    }
}

fn scaled_bar(value: f64) -> String {
    let filled = ((value / 100.0) * CHART_BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled.min(CHART_BAR_WIDTH))
}

fn render_heatmap(facts: &[Fact], coverage: Option<FactCoverage>) {
    let coverage = match coverage {
        Some(coverage) => coverage,
        None => {
            println!("{}", "No data available for heatmap.".dimmed());
            return;
        }
    };

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);

    let mut titles = vec![Cell::new("Fact")];
    for source in &coverage.sources {
        titles.push(Cell::new(&truncate(source, 15)));
    }
    table.set_titles(PrettyRow::new(titles));

    for (fact_index, row) in coverage.grid.iter().enumerate() {
        let mut cells = vec![Cell::new(&truncate(&facts[fact_index].text, 50))];
        for present in row {
            if *present {
                cells.push(Cell::new("✓").style_spec("Fgc"));
            } else {
                cells.push(Cell::new("✗").style_spec("Frc"));
            }
        }
        table.add_row(PrettyRow::new(cells));
    }
    table.printstd();
    println!(
        "{} fact present   {} fact omitted",
        "✓".bright_green(),
        "✗".bright_red()
    );
}

/// Renders a single article in card form.
pub fn render_article_card(article: &Article) {
    println!("\n{}  {}", article.title.bright_white(), bias_badge(article.bias_index));
    println!(
        "{} • {}",
        article.source,
        format_date(article.published_at)
    );
    println!("{}", truncate(&article.text, 200));
    println!("{}", article.url.bright_blue());
}

/// Renders an inline error the way the pages show backend failures.
pub fn render_error(message: &str) {
    eprintln!("{} {}", "Error:".bright_red(), message.bright_red());
}
