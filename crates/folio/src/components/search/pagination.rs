use dioxus::prelude::*;
use folio_core::pagination::Pagination;
use folio_core::QueryEvent;

use crate::components::use_query_sender;
use crate::utils::formatting::format_page_label;

/// Previous / Next controls with a "Page X of Y" label.
#[component]
pub fn PaginationControl(pagination: Pagination) -> Element {
    let controller = use_query_sender();
    let label = format_page_label(pagination.current_page, pagination.total_pages);

    rsx! {
        nav { class: "fo-pagination",
            button {
                class: "fo-btn fo-btn--secondary",
                disabled: pagination.previous_disabled(),
                onclick: move |_| controller.send(QueryEvent::PreviousPage),
                "Previous"
            }
            span { class: "fo-page-label", "{label}" }
            button {
                class: "fo-btn fo-btn--secondary",
                disabled: pagination.next_disabled(),
                onclick: move |_| controller.send(QueryEvent::NextPage),
                "Next"
            }
        }
    }
}
