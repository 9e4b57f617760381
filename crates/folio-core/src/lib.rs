//! # Folio Core
//!
//! Platform-independent library behind the Folio search front-end.
//!
//! Folio is a thin client for an external Typesense-compatible search service
//! holding OCR'd newspaper and book pages. Retrieval, ranking, and service-side
//! highlighting all happen in that service; this crate owns everything between
//! the user's input and the rendered page:
//!
//! - [`config`] - Connection parameters and the typed config payload loader
//! - [`search`] - Wire types, request building, and the HTTP client
//! - [`controller`] - Query state, events, and the search/display cycle
//! - [`debounce`] - Quiet-period debouncing for text input
//! - [`highlight`] - Escaped, case-insensitive term highlighting
//! - [`pagination`] - Page arithmetic for the Previous/Next control
//! - [`view`] - Result card view models consumed by the UI and CLI
//! - [`error`] - Error types for configuration and search failures
//!
//! The crate is shared by the Dioxus application (`folio`) and the
//! command-line client (`folio-cli`), so it carries no UI dependencies.

#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod highlight;
pub mod pagination;
pub mod search;
pub mod view;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::SearchConfig;
pub use controller::{DisplayState, QueryEvent, QueryState, SearchController, SearchOutcome};
pub use error::{ConfigError, SearchError};
pub use search::{SearchBackend, SearchRequest, SearchResponse, TypesenseClient};
