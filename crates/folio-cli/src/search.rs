//! Search command implementation.
//!
//! Runs one search through the same controller the front-end uses, so
//! paging, clamping and highlighting behave identically.

use anyhow::{Context, Result};
use folio_core::config::DEFAULT_RESULTS_PER_PAGE;
use folio_core::controller::ResultsPage;
use folio_core::{
    QueryState, SearchBackend, SearchConfig, SearchController, SearchOutcome, TypesenseClient,
};
use tracing::info;

/// Query parameters taken from the command line.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub source: Option<String>,
    pub per_page: usize,
    /// 1-based; clamped to the last page by the controller
    pub page: usize,
}

impl SearchOptions {
    /// Page size actually requested; zero falls back to the default.
    pub fn effective_per_page(&self) -> usize {
        if self.per_page == 0 {
            DEFAULT_RESULTS_PER_PAGE
        } else {
            self.per_page
        }
    }
}

/// Builds a client from `config` and runs the search.
///
/// Returns `None` when the query is empty.
pub async fn execute_search(
    config: &SearchConfig,
    query: &str,
    options: &SearchOptions,
) -> Result<Option<ResultsPage>> {
    let client = TypesenseClient::new(config).context("Failed to create search client")?;
    info!("Searching {}", client.endpoint());
    run_search(client, query, options).await
}

/// Runs one search against any backend.
pub async fn run_search<B: SearchBackend>(
    backend: B,
    query: &str,
    options: &SearchOptions,
) -> Result<Option<ResultsPage>> {
    let state = QueryState {
        query_text: query.to_string(),
        source_filter: options
            .source
            .as_ref()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
        results_per_page: options.effective_per_page(),
        current_page: options.page.max(1),
    };

    let mut controller = SearchController::with_state(backend, state);
    match controller.search().await {
        SearchOutcome::Cleared => Ok(None),
        SearchOutcome::Updated { .. } => Ok(controller.display().results().cloned()),
        SearchOutcome::Failed(e) => Err(e).context("Search failed"),
    }
}
