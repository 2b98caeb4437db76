//! Terminal rendering for catalog views.
//!
//! Every function returns the finished text so handlers decide where it
//! goes; colors come from `colored` and honor `NO_COLOR`.

use colored::*;

use toolshelf::catalog::{CategorySection, ComparisonTable, SelectionSet};
use toolshelf::domain::{Article, ToolRecord, format_label};

const UNSPECIFIED: &str = "unspecified";

fn label_or_unspecified(value: Option<&str>) -> String {
    value.map(format_label).unwrap_or_else(|| UNSPECIFIED.to_string())
}

fn stars(tool: &ToolRecord) -> String {
    let filled = tool.stars() as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn width(s: &str) -> usize {
    s.chars().count()
}

fn pad(s: &str, target: usize) -> String {
    format!("{}{}", s, " ".repeat(target.saturating_sub(width(s))))
}

/// One-line summary of a tool, prefixed with its selection mark
pub fn tool_line(tool: &ToolRecord, selection: &SelectionSet) -> String {
    let mark = if selection.contains(&tool.id) { "[x]".green() } else { "[ ]".normal() };
    format!(
        "{} {} {} {} {:.1}  {} · {}",
        mark,
        tool.name.bold(),
        format!("({})", tool.id).dimmed(),
        stars(tool).yellow(),
        tool.rating,
        label_or_unspecified(tool.category.as_deref()),
        label_or_unspecified(tool.pricing_type.as_deref()),
    )
}

/// Per-category sections with their preview tools
pub fn sections(sections: &[CategorySection], selection: &SelectionSet) -> String {
    if sections.is_empty() {
        return "No tools in the catalog yet".yellow().to_string();
    }

    let mut out = Vec::new();
    for section in sections {
        out.push(format!("{} ({})", format_label(&section.category).cyan().bold(), section.total));
        for tool in &section.preview {
            out.push(format!("  {}", tool_line(tool, selection)));
        }
        if section.has_more() {
            out.push(
                format!("  … see all with: toolshelf list -k {}", section.category)
                    .dimmed()
                    .to_string(),
            );
        }
    }
    out.join("\n")
}

/// Flat result list for an active filter
pub fn results(tools: &[ToolRecord], selection: &SelectionSet) -> String {
    if tools.is_empty() {
        return "No tools match the current filters".yellow().to_string();
    }

    let mut out = vec![format!("{} tools found", tools.len()).cyan().to_string()];
    out.extend(tools.iter().map(|tool| tool_line(tool, selection)));
    out.join("\n")
}

/// Footer shown while tools are selected for comparison
pub fn selection_footer(selection: &SelectionSet) -> Option<String> {
    if selection.is_empty() {
        return None;
    }
    Some(format!(
        "{} selected for comparison, run: toolshelf compare {}",
        selection.len(),
        selection.to_query()
    ))
}

pub fn tool_detail(tool: &ToolRecord) -> String {
    let mut out = vec![
        format!("{} {}", tool.name.bold(), format!("({})", tool.id).dimmed()),
        format!("{} {:.1}/5", stars(tool).yellow(), tool.rating),
        format!("Category: {}", label_or_unspecified(tool.category.as_deref())),
        format!("Pricing:  {}", label_or_unspecified(tool.pricing_type.as_deref())),
    ];
    if let Some(details) = &tool.pricing_details {
        out.push(format!("          {}", details));
    }
    if let Some(url) = &tool.website_url {
        out.push(format!("Website:  {}", url.underline()));
    }
    if !tool.description.is_empty() {
        out.push(String::new());
        out.push(tool.description.clone());
    }

    for (title, items, bullet) in [
        ("Features", &tool.features, "•".normal()),
        ("Pros", &tool.pros, "+".green()),
        ("Cons", &tool.cons, "-".red()),
    ] {
        if !items.is_empty() {
            out.push(String::new());
            out.push(title.cyan().bold().to_string());
            out.extend(items.iter().map(|item| format!("  {} {}", bullet, item)));
        }
    }
    out.join("\n")
}

/// Side-by-side table with one column per tool
pub fn comparison(table: &ComparisonTable) -> String {
    if table.is_empty() {
        return "No tools selected for comparison".yellow().to_string();
    }

    let mut rows: Vec<(String, Vec<String>)> = vec![
        (
            "Category".to_string(),
            table.categories.iter().map(|c| label_or_unspecified(c.as_deref())).collect(),
        ),
        (
            "Rating".to_string(),
            table.ratings.iter().map(|r| format!("{:.1}/5", r)).collect(),
        ),
        (
            "Pricing".to_string(),
            table.pricing.iter().map(|p| label_or_unspecified(p.as_deref())).collect(),
        ),
    ];
    let feature_start = rows.len();
    for row in &table.features {
        let cells = row
            .present
            .iter()
            .map(|present| if *present { "✓" } else { "✗" }.to_string())
            .collect();
        rows.push((row.feature.clone(), cells));
    }
    rows.push(("Pros".to_string(), table.pros_counts.iter().map(|n| n.to_string()).collect()));
    rows.push(("Cons".to_string(), table.cons_counts.iter().map(|n| n.to_string()).collect()));

    let label_width = rows.iter().map(|(label, _)| width(label)).max().unwrap_or(0);
    let column_widths: Vec<usize> = (0..table.columns())
        .map(|i| {
            rows.iter()
                .map(|(_, cells)| width(&cells[i]))
                .chain(std::iter::once(width(&table.names[i])))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = Vec::new();
    let header: Vec<String> = table
        .names
        .iter()
        .zip(&column_widths)
        .map(|(name, w)| pad(name, *w).bold().to_string())
        .collect();
    out.push(format!("{}  {}", pad("", label_width), header.join("  ")));

    for (index, (label, cells)) in rows.iter().enumerate() {
        let rendered: Vec<String> = cells
            .iter()
            .zip(&column_widths)
            .map(|(cell, w)| {
                let padded = pad(cell, *w);
                match cell.as_str() {
                    "✓" => padded.green().to_string(),
                    "✗" => padded.red().to_string(),
                    _ => padded,
                }
            })
            .collect();
        let label = if index >= feature_start && index < feature_start + table.features.len() {
            pad(label, label_width).normal()
        } else {
            pad(label, label_width).cyan()
        };
        out.push(format!("{}  {}", label, rendered.join("  ")));
    }
    out.join("\n")
}

pub fn article_line(article: &Article, liked: bool) -> String {
    let heart = if liked { "♥".red() } else { "♡".normal() };
    let date = article.date.map(|d| d.to_string()).unwrap_or_default();
    format!(
        "{} {} {} {}  {}",
        heart,
        article.title.bold(),
        format!("({})", article.id).dimmed(),
        article.likes,
        date.dimmed(),
    )
}

pub fn articles(articles: &[Article], liked: &[String]) -> String {
    if articles.is_empty() {
        return "No articles found".yellow().to_string();
    }
    articles
        .iter()
        .map(|a| article_line(a, liked.iter().any(|id| id == &a.id)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn article_detail(article: &Article, liked: bool) -> String {
    let mut out = vec![article_line(article, liked)];
    let byline: Vec<String> = [article.author.clone(), article.category.as_deref().map(format_label)]
        .into_iter()
        .flatten()
        .collect();
    if !byline.is_empty() {
        out.push(byline.join(" · ").dimmed().to_string());
    }
    if !article.summary.is_empty() {
        out.push(String::new());
        out.push(article.summary.italic().to_string());
    }
    if !article.content.is_empty() {
        out.push(String::new());
        out.push(article.content.clone());
    }
    if !article.tags.is_empty() {
        out.push(String::new());
        out.push(format!("Tags: {}", article.tags.join(", ")));
    }
    out.join("\n")
}
