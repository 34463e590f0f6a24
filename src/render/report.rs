use crate::domain::model::ScoredMention;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

/// Only the first rows are shown; the input is already in arrival order.
const TOP_ROWS: usize = 10;
const CHART_WIDTH: usize = 40;

pub fn mention_table(mentions: &[ScoredMention]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Publish Date", "Title", "Sentiment", "Score"]);

    for mention in mentions.iter().take(TOP_ROWS) {
        table.add_row(vec![
            mention.video.published_at.clone(),
            mention.video.title.clone(),
            mention.label.clone(),
            format!("{:.3}", mention.score),
        ]);
    }

    table.to_string()
}

/// Horizontal bar chart of label counts, labels in first-seen order. Bars are
/// scaled to the largest count; a non-zero count always gets at least one
/// cell.
pub fn label_chart(mentions: &[ScoredMention]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for mention in mentions {
        match counts
            .iter()
            .position(|(label, _)| *label == mention.label)
        {
            Some(i) => counts[i].1 += 1,
            None => counts.push((&mention.label, 1)),
        }
    }

    let max_count = counts.iter().map(|(_, c)| *c).max().unwrap_or(0);
    let label_width = counts
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    let mut chart = String::from("Sentiment distribution:\n");
    for (label, count) in &counts {
        let bar_len = (count * CHART_WIDTH / max_count).max(1);
        chart.push_str(&format!(
            "  {:<width$}  {} {}\n",
            label,
            "█".repeat(bar_len),
            count,
            width = label_width
        ));
    }

    chart
}

pub fn no_mentions_message(symbol: &str, company_name: &str) -> String {
    format!(
        "No mentions of {} ({}) found in the video titles or descriptions.",
        symbol, company_name
    )
}

pub fn no_data_message(input: &str) -> String {
    format!("No stock data available for the input: {}", input)
}
