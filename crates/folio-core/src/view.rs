//! View models for rendered results.
//!
//! The UI and the CLI both render from these types, so the rules for titles,
//! snippets, fallback excerpts, and links live in one place.

use crate::config::FALLBACK_SNIPPET_CHARS;
use crate::highlight::{highlight_snippet, highlight_text, Highlighter, Segment};
use crate::search::{Hit, SearchResponse};
use serde::Serialize;
use url::Url;

/// One result card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultCard {
    /// Stable key for list rendering
    pub key: String,
    /// `"{title_id} - Page {page_number}"`
    pub title: String,
    pub source: String,
    pub snippet: Vec<Segment>,
    /// True when the snippet is a raw-text excerpt rather than a service highlight
    pub snippet_is_fallback: bool,
    /// Link to the page at the holding library
    pub original_url: Option<String>,
    /// Link to the scanned page image
    pub image_url: Option<String>,
    /// Complete OCR text for the full-text overlay
    pub full_text: String,
}

impl ResultCard {
    pub fn from_hit(index: usize, hit: &Hit, highlighter: Option<&Highlighter>) -> Self {
        let doc = &hit.document;

        let (snippet, snippet_is_fallback) = match hit.best_snippet() {
            Some(snippet) => (highlight_snippet(snippet, highlighter), false),
            None => (
                highlight_text(
                    &fallback_excerpt(&doc.ocr_text_original, FALLBACK_SNIPPET_CHARS),
                    highlighter,
                ),
                true,
            ),
        };

        Self {
            key: format!(
                "{}/{}/{}#{}",
                doc.source, doc.title_id, doc.page_number, index
            ),
            title: format!("{} - Page {}", doc.title_id, doc.page_number),
            source: doc.source.clone(),
            snippet,
            snippet_is_fallback,
            original_url: web_link(&doc.remote_path),
            image_url: web_link(&doc.image_url),
            full_text: doc.ocr_text_original.clone(),
        }
    }
}

/// Cards for a response: at most `per_page`, in response order.
pub fn build_cards(response: &SearchResponse, per_page: usize, query: &str) -> Vec<ResultCard> {
    let highlighter = Highlighter::new(query);
    response
        .hits
        .iter()
        .take(per_page)
        .enumerate()
        .map(|(idx, hit)| ResultCard::from_hit(idx, hit, highlighter.as_ref()))
        .collect()
}

/// First `max_chars` characters of `text`, with `...` appended when cut.
pub fn fallback_excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Keeps only absolute http(s) links.
fn web_link(raw: &str) -> Option<String> {
    let url = Url::parse(raw.trim()).ok()?;
    matches!(url.scheme(), "http" | "https").then(|| url.to_string())
}

/// Contents of the full-text overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum FullText {
    /// Text with every occurrence of the query highlighted
    Highlighted {
        segments: Vec<Segment>,
        matches: usize,
    },
    /// The document carries no OCR text
    Unavailable,
}

impl FullText {
    pub fn for_card(card: &ResultCard, query: &str) -> Self {
        if card.full_text.trim().is_empty() {
            return FullText::Unavailable;
        }

        let highlighter = Highlighter::new(query);
        let segments = highlight_text(&card.full_text, highlighter.as_ref());
        let matches = highlighter.as_ref().map_or(0, |h| h.count(&card.full_text));
        FullText::Highlighted { segments, matches }
    }
}

/// A card opened in the full-text overlay, paired with the query that
/// found it. Later searches do not change what the overlay highlights.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenedText {
    pub card: ResultCard,
    pub query: String,
}

impl OpenedText {
    pub fn new(card: ResultCard, query: impl Into<String>) -> Self {
        Self {
            card,
            query: query.into(),
        }
    }

    pub fn content(&self) -> FullText {
        FullText::for_card(&self.card, &self.query)
    }
}
