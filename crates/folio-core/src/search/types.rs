//! Wire types for search responses.
//!
//! Only the fields the front-end renders are modelled; everything else the
//! service returns (`out_of`, `search_time_ms`, `text_match`, ...) is ignored.

use serde::{Deserialize, Deserializer, Serialize};

/// A page of search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Total number of matching documents across all pages
    #[serde(default)]
    pub found: u64,
    /// Matches on the requested page, best first
    #[serde(default)]
    pub hits: Vec<Hit>,
}

/// One matched document paired with its highlight snippets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    pub document: Document,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

impl Hit {
    /// First service-supplied snippet that actually has content.
    pub fn best_snippet(&self) -> Option<&str> {
        self.highlights
            .iter()
            .filter_map(|h| h.snippet.as_deref())
            .find(|s| !s.trim().is_empty())
    }
}

/// A scanned page as stored in the search service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub title_id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub page_number: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub ocr_text_original: String,
    #[serde(default)]
    pub remote_path: String,
    #[serde(default)]
    pub image_url: String,
}

/// Excerpt of matched text with `<mark>` markers inserted by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub snippet: Option<String>,
}

/// Page numbers are indexed as strings but older imports stored integers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(s)) => s,
        Some(Raw::Integer(n)) => n.to_string(),
        Some(Raw::Float(f)) => f.to_string(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_service_response() {
        let json = r#"{
            "facet_counts": [],
            "found": 25,
            "out_of": 120000,
            "page": 1,
            "search_time_ms": 3,
            "hits": [{
                "document": {
                    "id": "42",
                    "title_id": "wrz",
                    "page_number": "3",
                    "source": "anno.onb.ac.at",
                    "ocr_text_original": "Die Katze sass auf der Mauer.",
                    "remote_path": "https://anno.onb.ac.at/cgi-content/anno?aid=wrz&datum=18480101&seite=3",
                    "image_url": "https://anno.onb.ac.at/cgi-content/annoshow?call=wrz|18480101|3"
                },
                "highlights": [{
                    "field": "ocr_text_original",
                    "matched_tokens": ["Katze"],
                    "snippet": "Die <mark>Katze</mark> sass auf der Mauer."
                }],
                "text_match": 578730123365187705
            }]
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.found, 25);
        assert_eq!(response.hits.len(), 1);

        let hit = &response.hits[0];
        assert_eq!(hit.document.title_id, "wrz");
        assert_eq!(hit.document.page_number, "3");
        assert_eq!(
            hit.best_snippet(),
            Some("Die <mark>Katze</mark> sass auf der Mauer.")
        );
    }

    #[test]
    fn test_numeric_page_number_and_missing_fields() {
        let json = r#"{"found": 1, "hits": [{"document": {"title_id": "x", "page_number": 12}}]}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        let hit = &response.hits[0];
        assert_eq!(hit.document.page_number, "12");
        assert!(hit.highlights.is_empty());
        assert_eq!(hit.document.ocr_text_original, "");
        assert_eq!(hit.best_snippet(), None);
    }

    #[test]
    fn test_null_page_number() {
        let json = r#"{"document": {"page_number": null}}"#;
        let hit: Hit = serde_json::from_str(json).unwrap();
        assert_eq!(hit.document.page_number, "");
    }

    #[test]
    fn test_best_snippet_skips_empty_highlights() {
        let hit = Hit {
            document: Document::default(),
            highlights: vec![
                Highlight {
                    field: "ocr_text_original".into(),
                    snippet: Some("  ".into()),
                },
                Highlight {
                    field: "ocr_text_original".into(),
                    snippet: Some("a <mark>b</mark>".into()),
                },
            ],
        };
        assert_eq!(hit.best_snippet(), Some("a <mark>b</mark>"));
    }
}
