//! Output formatting for search results.
//!
//! Supports both human-readable terminal output and JSON for scripting.
//! Highlighted spans are bracketed in terminal output and kept as segments
//! in JSON.

use folio_core::controller::ResultsPage;
use folio_core::highlight::{render_segments, Segment};
use folio_core::view::ResultCard;
use serde::Serialize;

/// JSON output structure for one page of results
#[derive(Serialize)]
pub struct JsonOutput<'a> {
    pub query: &'a str,
    pub found: u64,
    pub page: usize,
    pub total_pages: usize,
    pub results: Vec<JsonHit<'a>>,
}

/// One result card in JSON format
#[derive(Serialize)]
pub struct JsonHit<'a> {
    pub title: &'a str,
    pub source: &'a str,
    /// Snippet with highlights bracketed, for quick reading
    pub snippet: String,
    /// Snippet as highlight segments
    pub segments: &'a [Segment],
    pub snippet_is_fallback: bool,
    pub original_url: Option<&'a str>,
    pub image_url: Option<&'a str>,
}

impl<'a> From<&'a ResultCard> for JsonHit<'a> {
    fn from(card: &'a ResultCard) -> Self {
        Self {
            title: &card.title,
            source: &card.source,
            snippet: bracketed(&card.snippet),
            segments: &card.snippet,
            snippet_is_fallback: card.snippet_is_fallback,
            original_url: card.original_url.as_deref(),
            image_url: card.image_url.as_deref(),
        }
    }
}

/// Formats a results page as JSON.
pub fn format_json(page: &ResultsPage) -> String {
    let output = JsonOutput {
        query: &page.query,
        found: page.found,
        page: page.pagination.current_page,
        total_pages: page.pagination.total_pages,
        results: page.cards.iter().map(JsonHit::from).collect(),
    };
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

/// Formats a results page for human-readable terminal output.
///
/// `per_page` numbers the cards across pages.
pub fn format_human(page: &ResultsPage, per_page: usize) -> String {
    if page.cards.is_empty() {
        return format!("No results found for \"{}\"", page.query);
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{} result{} for \"{}\" (page {} of {}):\n\n",
        page.found,
        if page.found == 1 { "" } else { "s" },
        page.query,
        page.pagination.current_page,
        page.pagination.total_pages
    ));

    let first_rank = (page.pagination.current_page - 1) * per_page + 1;
    for (i, card) in page.cards.iter().enumerate() {
        output.push_str(&format!("{}. {} [{}]\n", first_rank + i, card.title, card.source));
        output.push_str(&format!("   {}\n", bracketed(&card.snippet)));

        if let Some(url) = &card.original_url {
            output.push_str(&format!("   Original: {}\n", url));
        }
        if let Some(url) = &card.image_url {
            output.push_str(&format!("   Image:    {}\n", url));
        }

        output.push('\n');
    }

    output.trim_end().to_string()
}

/// Snippet text on one line, with highlighted spans wrapped in `[` `]`.
fn bracketed(segments: &[Segment]) -> String {
    render_segments(segments, "[", "]")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::pagination::Pagination;
    use folio_core::test_utils::{hit, hit_with_snippet};
    use folio_core::view::build_cards;
    use folio_core::SearchResponse;

    fn results_page(found: u64, current_page: usize, per_page: usize) -> ResultsPage {
        let mut plain = hit("wrz", "4");
        plain.document.ocr_text_original = "Die Katze\nsaß auf der Matte".into();
        let response = SearchResponse {
            found,
            hits: vec![hit_with_snippet("ibn", "2", "eine <mark>Katze</mark> im Sack"), plain],
        };
        ResultsPage {
            query: "katze".into(),
            found,
            cards: build_cards(&response, per_page, "katze"),
            pagination: Pagination::new(found, per_page, current_page),
        }
    }

    #[test]
    fn test_format_human_empty() {
        let page = ResultsPage {
            query: "katze".into(),
            found: 0,
            cards: Vec::new(),
            pagination: Pagination::new(0, 10, 1),
        };
        let output = format_human(&page, 10);
        assert!(output.contains("No results found"));
    }

    #[test]
    fn test_format_human() {
        let output = format_human(&results_page(12, 2, 10), 10);
        assert!(output.starts_with("12 results for \"katze\" (page 2 of 2):"));
        assert!(output.contains("11. ibn - Page 2 [anno.onb.ac.at]"));
        assert!(output.contains("eine [Katze] im Sack"));
        // Fallback excerpt, highlighted and flattened onto one line
        assert!(output.contains("12. wrz - Page 4"));
        assert!(output.contains("Die [Katze] saß auf der Matte"));
        assert!(output.contains("Original: https://anno.onb.ac.at/cgi-content/anno?aid=ibn&seite=2"));
    }

    #[test]
    fn test_format_human_single_result() {
        let output = format_human(&results_page(1, 1, 10), 10);
        assert!(output.starts_with("1 result for"));
    }

    #[test]
    fn test_format_json() {
        let output = format_json(&results_page(12, 2, 10));
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["query"], "katze");
        assert_eq!(value["found"], 12);
        assert_eq!(value["page"], 2);
        assert_eq!(value["total_pages"], 2);
        assert_eq!(value["results"][0]["title"], "ibn - Page 2");
        assert_eq!(value["results"][0]["snippet"], "eine [Katze] im Sack");
        assert_eq!(value["results"][0]["segments"][1]["highlighted"], true);
        assert_eq!(value["results"][1]["snippet_is_fallback"], true);
    }
}
