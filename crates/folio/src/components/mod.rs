//! UI components for the Folio application.
//!
//! - `app_shell`: Footer
//! - `search`: SearchView, SearchCard, HitCard, PaginationControl,
//!   FullTextOverlay
//!
//! # Context Providers
//!
//! [`App`] owns the session and shares it through Dioxus context:
//!
//! ```ignore
//! // Send user events to the query controller
//! let controller = use_query_sender();
//! controller.send(QueryEvent::NextPage);
//!
//! // Read what the results and pagination regions should show
//! let display = use_display_state();
//!
//! // Check whether the search service is reachable
//! match use_service_status().read().clone() {
//!     ServiceStatus::Ready => { /* ... */ }
//!     ServiceStatus::Connecting => { /* ... */ }
//!     ServiceStatus::Failed(err) => { /* ... */ }
//! }
//! ```

mod app_shell;
pub mod search;

pub use app_shell::Footer;
pub use search::SearchView;

use crate::platform;
use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use folio_core::config::load_config;
use folio_core::{
    ConfigError, DisplayState, QueryEvent, SearchController, SearchOutcome, TypesenseClient,
};
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;

/// Search service availability for UI display.
#[derive(Clone, PartialEq)]
pub enum ServiceStatus {
    /// Configuration is being fetched
    Connecting,
    /// Client handle built; searches can run
    Ready,
    /// Configuration could not be loaded; no retry
    Failed(String),
}

// Query controller context provider
pub fn use_query_sender() -> Coroutine<QueryEvent> {
    use_context::<Coroutine<QueryEvent>>()
}

// Display state context provider
pub fn use_display_state() -> Signal<DisplayState> {
    use_context::<Signal<DisplayState>>()
}

// Service status context provider
pub fn use_service_status() -> Signal<ServiceStatus> {
    use_context::<Signal<ServiceStatus>>()
}

/// Loads the configuration and builds the client handle.
///
/// Every failure is logged exactly once, so callers only update the status.
async fn connect(config_url: &str) -> Result<TypesenseClient, ConfigError> {
    let http = reqwest::Client::new();
    // load_config logs its own failures
    let config = load_config(&http, config_url).await?;
    TypesenseClient::new(&config)
        .inspect_err(|e| error!("Failed to build search client: {}", e))
}

#[component]
pub fn App() -> Element {
    let service_status = use_signal(|| ServiceStatus::Connecting);
    use_context_provider(|| service_status);

    let display_state = use_signal(DisplayState::default);
    use_context_provider(|| display_state);

    // Controller coroutine - sole owner of the query state. Events are handled
    // one at a time, so responses are applied in the order requests were made.
    let controller = use_coroutine({
        let mut status = service_status;
        let mut display = display_state;

        move |mut rx: UnboundedReceiver<QueryEvent>| async move {
            let config_url = platform::config_url();
            info!("Loading search configuration from {}", config_url);

            let client = match connect(&config_url).await {
                Ok(client) => {
                    info!("Search client ready: {}", client.endpoint());
                    status.set(ServiceStatus::Ready);
                    client
                }
                Err(e) => {
                    status.set(ServiceStatus::Failed(e.to_string()));
                    return;
                }
            };

            let mut controller = SearchController::new(client);

            while let Some(event) = rx.next().await {
                match controller.handle(event).await {
                    Some(SearchOutcome::Updated { .. }) | Some(SearchOutcome::Cleared) => {
                        display.set(controller.display().clone());
                    }
                    // Already logged by the controller; stale results stay up
                    Some(SearchOutcome::Failed(_)) | None => {}
                }
            }
        }
    });
    use_context_provider(|| controller);

    rsx! {
        div { class: "fo-app",
            header { class: "fo-appbar",
                h1 { class: "fo-appbar-title", "Folio" }
                span { class: "fo-appbar-subtitle", "Full-text search in historical newspapers and books" }
            }
            main { class: "fo-main",
                SearchView {}
            }
            Footer {}
        }
    }
}
