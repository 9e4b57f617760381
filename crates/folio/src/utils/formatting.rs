//! Formatting utilities for human-readable UI text.

/// Result header text, e.g. `25 results for "katze"`.
pub fn format_result_count(found: u64, query: &str) -> String {
    let word = if found == 1 { "result" } else { "results" };
    format!("{} {} for \"{}\"", found, word, query.trim())
}

/// Pagination label, e.g. `Page 2 of 3`.
pub fn format_page_label(current_page: usize, total_pages: usize) -> String {
    format!("Page {} of {}", current_page, total_pages)
}
