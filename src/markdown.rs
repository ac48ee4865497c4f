//! Text and Markdown rendering of extracted content.
//!
//! Downstream consumers (prompt builders, search indexers) usually want one
//! string rather than a record list. `to_text` produces plain text with one
//! block per record; `to_markdown` produces GitHub Flavored Markdown with
//! headings, links, lists and pipe tables.

use crate::result::{ContentRecord, PageExtractionResult};

/// Characters that have special meaning in Markdown and need escaping.
const MARKDOWN_SPECIAL_CHARS: &[char] = &['\\', '*', '_', '[', ']', '<', '>', '`'];

/// Separator between rendered blocks.
const BLOCK_SEPARATOR: &str = "\n\n";

/// Escape Markdown special characters in text content.
///
/// # Characters Escaped
///
/// - `\` → `\\` (backslash)
/// - `*` → `\*` (asterisk - prevents italic/bold)
/// - `_` → `\_` (underscore - prevents italic/bold)
/// - `[` `]` → `\[` `\]` (brackets - prevent links)
/// - `<` `>` → `\<` `\>` (angle brackets - prevent HTML and blockquotes)
/// - `` ` `` → ``\` `` (backtick - prevents inline code)
///
/// # Examples
///
/// ```
/// use rs_webscrape::markdown::escape_markdown;
///
/// assert_eq!(escape_markdown("*not italic*"), r"\*not italic\*");
/// assert_eq!(escape_markdown("my_variable_name"), r"my\_variable\_name");
/// ```
#[must_use]
pub fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 4);

    for ch in text.chars() {
        if MARKDOWN_SPECIAL_CHARS.contains(&ch) {
            result.push('\\');
        }
        result.push(ch);
    }

    result
}

/// Escape a table cell: Markdown escapes, pipes, and no line breaks.
fn escape_table_cell(text: &str) -> String {
    escape_markdown(text)
        .replace('|', r"\|")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render records as plain text, one block per record.
///
/// Lists become `- item` / `1. item` lines, table rows become cells joined
/// with ` | `, links keep their target in parentheses. Records without any
/// text are left out.
///
/// # Examples
///
/// ```
/// use rs_webscrape::extract_page;
/// use rs_webscrape::markdown::to_text;
///
/// let page = extract_page("<body><h1>Hi</h1><ol><li>a</li><li>b</li></ol></body>");
/// assert_eq!(to_text(&page.content), "Hi\n\n1. a\n2. b");
/// ```
#[must_use]
pub fn to_text(records: &[ContentRecord]) -> String {
    records
        .iter()
        .map(record_to_text)
        .filter(|block| !block.is_empty())
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

fn record_to_text(record: &ContentRecord) -> String {
    match record {
        ContentRecord::Header { text, .. }
        | ContentRecord::Paragraph { text }
        | ContentRecord::Text { text } => text.clone(),
        ContentRecord::Link { text, href } => match (text.is_empty(), href.is_empty()) {
            (_, true) => text.clone(),
            (true, false) => href.clone(),
            (false, false) => format!("{text} ({href})"),
        },
        ContentRecord::List { items, ordered } => list_lines(items, *ordered, str::to_string),
        ContentRecord::Table { rows } => rows
            .iter()
            .filter(|row| !row.is_empty())
            .map(|row| row.join(" | "))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Render a whole page as GitHub Flavored Markdown.
///
/// The page title becomes a level-1 heading unless the page had none.
///
/// # Examples
///
/// ```
/// use rs_webscrape::extract_page;
/// use rs_webscrape::markdown::to_markdown;
///
/// let page = extract_page(
///     r#"<title>Docs</title><body><h2>Intro</h2><a href="/start">Start</a></body>"#,
/// );
/// assert_eq!(to_markdown(&page), "# Docs\n\n## Intro\n\n[Start](/start)");
/// ```
#[must_use]
pub fn to_markdown(page: &PageExtractionResult) -> String {
    let title = page
        .has_title()
        .then(|| format!("# {}", escape_markdown(&page.title)));

    title
        .into_iter()
        .chain(page.content.iter().map(record_to_markdown))
        .filter(|block| !block.is_empty())
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

/// Render a single record as Markdown.
#[must_use]
pub fn record_to_markdown(record: &ContentRecord) -> String {
    match record {
        ContentRecord::Header { level, text } => {
            if text.is_empty() {
                return String::new();
            }
            format!("{} {}", "#".repeat(usize::from(level.rank())), escape_markdown(text))
        }
        ContentRecord::Paragraph { text } | ContentRecord::Text { text } => escape_markdown(text),
        ContentRecord::Link { text, href } => link_to_markdown(text, href),
        ContentRecord::List { items, ordered } => list_lines(items, *ordered, escape_markdown),
        ContentRecord::Table { rows } => table_to_markdown(rows),
    }
}

fn link_to_markdown(text: &str, href: &str) -> String {
    if href.is_empty() {
        return escape_markdown(text);
    }
    let label = if text.is_empty() { href } else { text };
    // Angle brackets allow spaces and parentheses in the destination.
    if href.contains([' ', '(', ')']) {
        format!("[{}](<{href}>)", escape_markdown(label))
    } else {
        format!("[{}]({href})", escape_markdown(label))
    }
}

fn list_lines(items: &[String], ordered: bool, render: impl Fn(&str) -> String) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if ordered {
                format!("{}. {}", i + 1, render(item))
            } else {
                format!("- {}", render(item))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// GFM pipe table; the first row is used as the header row.
///
/// Short rows are padded with empty cells so every row has as many columns
/// as the widest one.
fn table_to_markdown(rows: &[Vec<String>]) -> String {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    if width == 0 {
        return String::new();
    }

    let render_row = |row: &Vec<String>| {
        let cells: Vec<String> = (0..width)
            .map(|i| row.get(i).map(|c| escape_table_cell(c)).unwrap_or_default())
            .collect();
        format!("| {} |", cells.join(" | "))
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    let mut rows_iter = rows.iter().filter(|row| !row.is_empty());
    if let Some(header) = rows_iter.next() {
        lines.push(render_row(header));
        lines.push(format!("|{}", " --- |".repeat(width)));
    }
    lines.extend(rows_iter.map(render_row));
    lines.join("\n")
}
