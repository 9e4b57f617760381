use dioxus::prelude::*;
use folio_core::view::{FullText, OpenedText};

use super::Segments;

/// Overlay showing a page's complete OCR text with every query match marked.
#[component]
pub fn FullTextOverlay(
    opened: ReadSignal<Option<OpenedText>>,
    on_close: EventHandler<()>,
) -> Element {
    let opened_data = opened.read();

    let Some(opened) = opened_data.as_ref() else {
        return rsx! { div {} };
    };

    let card = &opened.card;
    let content = opened.content();

    rsx! {
        div {
            id: "text-popup",
            class: "fo-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "fo-text-panel",
                onclick: move |e| e.stop_propagation(), // clicks inside keep it open

                header { class: "fo-text-panel-header",
                    h2 { "{card.title}" }
                    button {
                        class: "fo-icon-button",
                        onclick: move |_| on_close.call(()),
                        "aria-label": "Close full text",
                        "✕"
                    }
                }

                {match content {
                    FullText::Highlighted { segments, matches } => rsx! {
                        div { class: "fo-text-panel-meta",
                            if matches == 1 {
                                "1 match"
                            } else {
                                "{matches} matches"
                            }
                        }
                        div { class: "fo-text-panel-content",
                            pre { class: "fo-full-text",
                                Segments { segments }
                            }
                        }
                    },
                    FullText::Unavailable => rsx! {
                        div { class: "fo-text-panel-content",
                            p { class: "fo-empty-text", "No text available." }
                        }
                    },
                }}
            }
        }
    }
}
