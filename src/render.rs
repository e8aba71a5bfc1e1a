//! Terminal rendering of result cards and stored lists.
//!
//! Pure text formatting, no I/O. API-sourced text is untrusted: everything
//! passes through [`sanitize`] before it reaches the terminal so embedded
//! control sequences cannot mangle the display.

use crate::api::Book;

const DESCRIPTION_MAX_CHARS: usize = 220;

/// Strip control characters (including escape) from untrusted text,
/// preserving ordinary Unicode. Newlines and tabs collapse to spaces.
#[must_use]
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|c| !c.is_control())
        .collect()
}

/// Render one numbered result card.
#[must_use]
pub fn format_card(index: usize, book: &Book) -> String {
    let mut card = String::new();
    card.push_str(&format!("{:2}. {}\n", index + 1, sanitize(&book.title)));
    card.push_str(&format!("    by {}\n", sanitize(&book.authors.join(", "))));
    card.push_str(&format!("    {}\n", truncate(&sanitize(&book.description), DESCRIPTION_MAX_CHARS)));
    if let Some(cover) = &book.thumbnail {
        card.push_str(&format!("    cover: {}\n", sanitize(cover)));
    }
    if let Some(link) = &book.preview_link {
        card.push_str(&format!("    preview: {}\n", sanitize(link)));
    }
    card
}

/// Render a full result set for `query`.
#[must_use]
pub fn format_results(query: &str, books: &[Book]) -> String {
    if books.is_empty() {
        return format!("No books found for \"{}\".\n", sanitize(query));
    }

    let mut out = format!("Results for \"{}\":\n\n", sanitize(query));
    for (index, book) in books.iter().enumerate() {
        out.push_str(&format_card(index, book));
        out.push('\n');
    }
    out
}

/// Render the search history, most-recent-first.
#[must_use]
pub fn format_history(entries: &[String]) -> String {
    if entries.is_empty() {
        return "Search history is empty.\n".to_owned();
    }

    let mut out = String::from("Recent searches:\n");
    for (index, entry) in entries.iter().enumerate() {
        out.push_str(&format!("{:2}. {}\n", index + 1, sanitize(entry)));
    }
    out
}

/// Render the reading list, most-recently-added-first.
#[must_use]
pub fn format_reading_list(titles: &[String]) -> String {
    if titles.is_empty() {
        return "Reading list is empty.\n".to_owned();
    }

    let mut out = String::from("Reading list:\n");
    for (index, title) in titles.iter().enumerate() {
        out.push_str(&format!("{:2}. {}\n", index + 1, sanitize(title)));
    }
    out
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
