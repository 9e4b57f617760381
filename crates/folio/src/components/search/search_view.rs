use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use folio_core::view::{OpenedText, ResultCard};
use folio_core::DisplayState;

use crate::components::use_display_state;
use crate::utils::formatting::format_result_count;

use super::{FullTextOverlay, HitCard, PaginationControl, SearchCard};

/// Main search view: search card, results region and pagination region.
#[component]
pub fn SearchView() -> Element {
    let display = use_display_state();
    let mut opened_text = use_signal(|| None::<OpenedText>);

    let display_val = display.read().clone();
    let page = match &display_val {
        DisplayState::Results(page) => Some(page.clone()),
        DisplayState::Empty => None,
    };

    // The overlay keeps the query of the page the card was opened from
    let handle_show_text = move |card: ResultCard| {
        info!("Show full text for: {}", card.title);
        let query = display
            .read()
            .results()
            .map(|p| p.query.clone())
            .unwrap_or_default();
        opened_text.set(Some(OpenedText::new(card, query)));
    };

    let handle_close_text = move |_| {
        opened_text.set(None);
    };

    rsx! {
        section { class: "fo-view fo-view--search",
            SearchCard {}

            div { id: "results", class: "fo-results",
                if let Some(page) = page.clone() {
                    header { class: "fo-results-header",
                        span { class: "fo-results-count",
                            "{format_result_count(page.found, &page.query)}"
                        }
                    }

                    if page.cards.is_empty() {
                        p { class: "fo-no-results", "No results found." }
                    }

                    for card in page.cards.iter() {
                        HitCard {
                            key: "{card.key}",
                            card: card.clone(),
                            on_show_text: handle_show_text,
                        }
                    }
                }
            }

            div { id: "pagination", class: "fo-pagination-region",
                if let Some(page) = page {
                    if page.pagination.is_visible() {
                        PaginationControl { pagination: page.pagination }
                    }
                }
            }

            FullTextOverlay {
                opened: opened_text,
                on_close: handle_close_text,
            }
        }
    }
}
