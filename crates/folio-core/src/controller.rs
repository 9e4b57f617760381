//! Query controller.
//!
//! [`SearchController`] owns everything that changes while the page is open:
//! the [`QueryState`] built from user input, the backend handle, and the
//! [`DisplayState`] currently on screen. UI handlers never touch that state
//! directly; they turn DOM events into [`QueryEvent`]s and let the controller
//! decide whether a search is due.
//!
//! # Lifecycle
//!
//! ```ignore
//! let mut controller = SearchController::new(client);
//! if controller.apply(QueryEvent::Text("katze".into())) {
//!     match controller.search().await {
//!         SearchOutcome::Updated { .. } => render(controller.display()),
//!         SearchOutcome::Cleared => render(controller.display()),
//!         SearchOutcome::Failed(_) => { /* previous display stays */ }
//!     }
//! }
//! ```

use crate::config::DEFAULT_RESULTS_PER_PAGE;
use crate::error::SearchError;
use crate::pagination::Pagination;
use crate::search::{SearchBackend, SearchRequest, SearchResponse};
use crate::view::{build_cards, ResultCard};
use tracing::{error, info, warn};

/// User-controlled query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub query_text: String,
    /// Exact `source` value to restrict to, `None` for all sources
    pub source_filter: Option<String>,
    pub results_per_page: usize,
    /// 1-based
    pub current_page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            query_text: String::new(),
            source_filter: None,
            results_per_page: DEFAULT_RESULTS_PER_PAGE,
            current_page: 1,
        }
    }
}

impl QueryState {
    /// Whether there is anything to search for. Whitespace does not count.
    pub fn has_query(&self) -> bool {
        !self.query_text.trim().is_empty()
    }

    /// The request for the current state, or `None` when the query is empty.
    pub fn to_request(&self) -> Option<SearchRequest> {
        self.has_query().then(|| {
            SearchRequest::new(
                self.query_text.clone(),
                self.results_per_page,
                self.current_page,
            )
            .with_source_filter(self.source_filter.clone())
        })
    }
}

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryEvent {
    /// The search box settled on new text (already debounced)
    Text(String),
    /// The source selector changed; empty means all sources
    SourceFilter(Option<String>),
    /// The results-per-page selector changed
    PageSize(usize),
    PreviousPage,
    NextPage,
}

/// What the results and pagination regions show.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DisplayState {
    /// Both regions empty
    #[default]
    Empty,
    Results(ResultsPage),
}

impl DisplayState {
    pub fn results(&self) -> Option<&ResultsPage> {
        match self {
            DisplayState::Results(page) => Some(page),
            DisplayState::Empty => None,
        }
    }
}

/// One rendered page of results.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsPage {
    /// Query text the page was fetched for
    pub query: String,
    pub found: u64,
    pub cards: Vec<ResultCard>,
    pub pagination: Pagination,
}

/// Result of [`SearchController::search`].
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Empty query: display cleared, no request sent
    Cleared,
    /// Display replaced with a fresh page
    Updated { found: u64, shown: usize },
    /// Request failed; the previous display is untouched
    Failed(SearchError),
}

/// Owns the query state and the display for one session.
pub struct SearchController<B> {
    backend: B,
    state: QueryState,
    display: DisplayState,
}

impl<B: SearchBackend> SearchController<B> {
    pub fn new(backend: B) -> Self {
        Self::with_state(backend, QueryState::default())
    }

    pub fn with_state(backend: B, state: QueryState) -> Self {
        Self {
            backend,
            state,
            display: DisplayState::Empty,
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Applies an event to the query state.
    ///
    /// Returns whether a search should run. Paging past either end of the
    /// current results is ignored and returns `false`.
    pub fn apply(&mut self, event: QueryEvent) -> bool {
        match event {
            QueryEvent::Text(text) => {
                if text != self.state.query_text {
                    self.state.query_text = text;
                    self.state.current_page = 1;
                }
                true
            }
            QueryEvent::SourceFilter(source) => {
                self.state.source_filter = source
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty());
                self.state.current_page = 1;
                true
            }
            QueryEvent::PageSize(per_page) => {
                self.state.results_per_page = if per_page == 0 {
                    DEFAULT_RESULTS_PER_PAGE
                } else {
                    per_page
                };
                self.state.current_page = 1;
                true
            }
            QueryEvent::PreviousPage => self.move_to(|p| p.previous_page()),
            QueryEvent::NextPage => self.move_to(|p| p.next_page()),
        }
    }

    fn move_to(&mut self, target: impl FnOnce(&Pagination) -> Option<usize>) -> bool {
        let page = self.display.results().and_then(|r| target(&r.pagination));
        match page {
            Some(page) => {
                self.state.current_page = page;
                true
            }
            None => false,
        }
    }

    /// Runs the search for the current state.
    pub async fn search(&mut self) -> SearchOutcome {
        let Some(request) = self.state.to_request() else {
            self.state.current_page = 1;
            self.display = DisplayState::Empty;
            return SearchOutcome::Cleared;
        };

        match self.fetch(request).await {
            Ok((request, response)) => {
                let per_page = request.per_page;
                let pagination = Pagination::new(response.found, per_page, request.page);
                self.state.current_page = pagination.current_page;

                let cards = build_cards(&response, per_page, &request.text);
                let shown = cards.len();
                info!(
                    "Search '{}' page {}/{}: {} found, {} shown",
                    request.text,
                    pagination.current_page,
                    pagination.total_pages,
                    response.found,
                    shown
                );

                self.display = DisplayState::Results(ResultsPage {
                    query: request.text,
                    found: response.found,
                    cards,
                    pagination,
                });
                SearchOutcome::Updated {
                    found: response.found,
                    shown,
                }
            }
            Err(e) => {
                error!("Search error: {}", e);
                SearchOutcome::Failed(e)
            }
        }
    }

    /// Sends `request`, re-requesting the last page once when the requested
    /// page lies past the end of the results.
    async fn fetch(
        &self,
        mut request: SearchRequest,
    ) -> Result<(SearchRequest, SearchResponse), SearchError> {
        let response = self.backend.search(&request).await?;

        let last_page =
            Pagination::new(response.found, request.per_page, request.page).current_page;
        if last_page == request.page {
            return Ok((request, response));
        }

        warn!(
            "Page {} is past the last page; fetching page {}",
            request.page, last_page
        );
        request.page = last_page;
        let response = self.backend.search(&request).await?;
        Ok((request, response))
    }

    /// Applies `event` and searches if it calls for one.
    pub async fn handle(&mut self, event: QueryEvent) -> Option<SearchOutcome> {
        if self.apply(event) {
            Some(self.search().await)
        } else {
            None
        }
    }
}
