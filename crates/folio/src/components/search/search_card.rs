use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use dioxus::core::Task;
use folio_core::config::{KNOWN_SOURCES, RESULTS_PER_PAGE_OPTIONS, SEARCH_DEBOUNCE};
use folio_core::debounce::Debouncer;
use folio_core::QueryEvent;

use crate::components::{use_query_sender, use_service_status, ServiceStatus};
use crate::platform;

/// `None` for the "All sources" option, otherwise the source value.
fn parse_source_choice(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Search card with the query input, source filter and page-size selector.
///
/// Keystrokes are debounced: only the last value typed within the debounce
/// window reaches the controller. Filter and page-size changes apply at once.
#[component]
pub fn SearchCard() -> Element {
    let controller = use_query_sender();
    let service_status = use_service_status();

    let mut query_text = use_signal(String::new);
    let mut pending_task = use_signal(|| None::<Task>);
    let debouncer = use_hook(|| Debouncer::new(SEARCH_DEBOUNCE));

    let handle_input = move |evt: FormEvent| {
        let text = evt.value();
        query_text.set(text.clone());

        if let Some(task) = pending_task.write().take() {
            task.cancel();
        }

        let pending = debouncer.schedule();
        let delay = debouncer.delay();
        let task = spawn(async move {
            if pending.settled(platform::sleep(delay)).await {
                debug!("Query settled: '{}'", text);
                controller.send(QueryEvent::Text(text));
            }
        });
        pending_task.set(Some(task));
    };

    let handle_source = move |evt: FormEvent| {
        controller.send(QueryEvent::SourceFilter(parse_source_choice(&evt.value())));
    };

    let handle_page_size = move |evt: FormEvent| {
        if let Ok(size) = evt.value().parse::<usize>() {
            controller.send(QueryEvent::PageSize(size));
        }
    };

    let status_hint = match service_status.read().clone() {
        ServiceStatus::Connecting => "Connecting to the search service…".to_string(),
        ServiceStatus::Ready => "Full-text search across OCR'd pages".to_string(),
        ServiceStatus::Failed(err) => format!("Search unavailable: {}", err),
    };
    let status_failed = matches!(*service_status.read(), ServiceStatus::Failed(_));

    rsx! {
        section { class: "fo-search-card",
            div { class: "fo-search-input-row",
                input {
                    id: "search-box",
                    class: "fo-search-input",
                    r#type: "search",
                    placeholder: "Search the full text…",
                    autocomplete: "off",
                    value: "{query_text}",
                    oninput: handle_input,
                }
            }
            div { class: "fo-search-options",
                label { class: "fo-option",
                    span { class: "fo-option-label", "Source" }
                    select {
                        id: "source-filter",
                        class: "fo-select",
                        onchange: handle_source,
                        option { value: "", "All sources" }
                        for (value, label) in KNOWN_SOURCES {
                            option { key: "{value}", value: "{value}", "{label}" }
                        }
                    }
                }
                label { class: "fo-option",
                    span { class: "fo-option-label", "Results per page" }
                    select {
                        id: "results-per-page",
                        class: "fo-select",
                        onchange: handle_page_size,
                        for size in RESULTS_PER_PAGE_OPTIONS {
                            option { key: "{size}", value: "{size}", "{size}" }
                        }
                    }
                }
            }
            div {
                class: if status_failed { "fo-search-hints fo-search-hints--error" } else { "fo-search-hints" },
                span { "{status_hint}" }
            }
        }
    }
}
