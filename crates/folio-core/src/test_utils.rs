//! Test utilities for folio-core.
//!
//! A scripted [`MockBackend`] and hit fixtures shared by unit tests, the
//! integration tests, and (through the `test-utils` feature) other crates.

use crate::error::SearchError;
use crate::search::{Document, Highlight, Hit, SearchBackend, SearchRequest, SearchResponse};
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Backend that replays queued results and records every request.
///
/// When the queue runs dry, searches fail with a request error.
#[derive(Debug, Default)]
pub struct MockBackend {
    replies: RefCell<VecDeque<Result<SearchResponse, SearchError>>>,
    requests: RefCell<Vec<SearchRequest>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response.
    pub fn respond(&self, response: SearchResponse) -> &Self {
        self.replies.borrow_mut().push_back(Ok(response));
        self
    }

    /// Queues a failure.
    pub fn fail(&self, error: SearchError) -> &Self {
        self.replies.borrow_mut().push_back(Err(error));
        self
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl SearchBackend for MockBackend {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        self.requests.borrow_mut().push(request.clone());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(SearchError::Request("no scripted reply".into())))
    }
}

/// An ANNO page without highlights or OCR text.
pub fn hit(title_id: &str, page_number: &str) -> Hit {
    Hit {
        document: Document {
            title_id: title_id.to_string(),
            page_number: page_number.to_string(),
            source: "anno.onb.ac.at".to_string(),
            ocr_text_original: String::new(),
            remote_path: format!(
                "https://anno.onb.ac.at/cgi-content/anno?aid={}&seite={}",
                title_id, page_number
            ),
            image_url: format!(
                "https://anno.onb.ac.at/cgi-content/annoshow?call={}-{}",
                title_id, page_number
            ),
        },
        highlights: Vec::new(),
    }
}

/// An ANNO page with one service snippet.
pub fn hit_with_snippet(title_id: &str, page_number: &str, snippet: &str) -> Hit {
    let mut hit = hit(title_id, page_number);
    hit.highlights.push(Highlight {
        field: "ocr_text_original".to_string(),
        snippet: Some(snippet.to_string()),
    });
    hit
}

/// A response reporting `found` matches and carrying `hit_count` hits.
pub fn response(found: u64, hit_count: usize) -> SearchResponse {
    SearchResponse {
        found,
        hits: (0..hit_count)
            .map(|i| hit_with_snippet("wrz", &(i + 1).to_string(), "die <mark>Katze</mark>"))
            .collect(),
    }
}
