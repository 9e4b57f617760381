//! The request contract sent to the search service.

use crate::config::{SEARCH_FIELD, SORT_BY_RELEVANCE};

/// Parameters of one search request.
///
/// Built by the controller from its query state; see
/// [`QueryState::to_request`](crate::controller::QueryState::to_request).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Query text as typed by the user
    pub text: String,
    /// Field the text is matched against
    pub query_by: String,
    pub per_page: usize,
    /// 1-based page number
    pub page: usize,
    /// Field returned with full-length highlighting
    pub highlight_field: String,
    pub sort_by: String,
    /// Exact-match filter on the `source` field
    pub source_filter: Option<String>,
}

impl SearchRequest {
    /// Request for `text` with the fixed field, highlight, and sort settings.
    pub fn new(text: impl Into<String>, per_page: usize, page: usize) -> Self {
        Self {
            text: text.into(),
            query_by: SEARCH_FIELD.to_string(),
            per_page,
            page,
            highlight_field: SEARCH_FIELD.to_string(),
            sort_by: SORT_BY_RELEVANCE.to_string(),
            source_filter: None,
        }
    }

    pub fn with_source_filter(mut self, source: Option<String>) -> Self {
        self.source_filter = source;
        self
    }

    /// `filter_by` expression for the source filter, if any.
    pub fn filter_expression(&self) -> Option<String> {
        self.source_filter.as_deref().map(source_filter_expression)
    }

    /// Query-string parameters in the service's naming.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("q", self.text.clone()),
            ("query_by", self.query_by.clone()),
            ("per_page", self.per_page.to_string()),
            ("page", self.page.to_string()),
            ("highlight_full_fields", self.highlight_field.clone()),
            ("sort_by", self.sort_by.clone()),
        ];
        if let Some(filter) = self.filter_expression() {
            pairs.push(("filter_by", filter));
        }
        pairs
    }
}

/// Exact-match filter on `source`.
///
/// Source values contain dots and may contain commas, so the value is wrapped
/// in backticks. Backticks cannot be escaped inside such a value and are
/// dropped.
pub fn source_filter_expression(source: &str) -> String {
    let value: String = source.chars().filter(|c| *c != '`').collect();
    format!("source:=`{}`", value)
}
