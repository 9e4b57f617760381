use dioxus::prelude::*;
use folio_core::config::KNOWN_SOURCES;
use folio_core::view::ResultCard;

use super::Segments;

/// Display label for a source value, falling back to the raw value.
fn source_label(source: &str) -> &str {
    KNOWN_SOURCES
        .iter()
        .find(|(value, _)| *value == source)
        .map(|(_, label)| *label)
        .unwrap_or(source)
}

/// One search hit: title, source, snippet and the three actions.
#[component]
pub fn HitCard(card: ResultCard, on_show_text: EventHandler<ResultCard>) -> Element {
    let label = source_label(&card.source).to_string();
    let card_for_text = card.clone();

    let snippet_class = if card.snippet_is_fallback {
        "fo-hit-snippet fo-hit-snippet--excerpt"
    } else {
        "fo-hit-snippet"
    };

    rsx! {
        article { class: "fo-hit",
            header { class: "fo-hit-header",
                h3 { class: "fo-hit-title", "{card.title}" }
                span { class: "fo-hit-source", title: "{card.source}", "{label}" }
            }

            p { class: snippet_class,
                Segments { segments: card.snippet.clone() }
            }

            footer { class: "fo-hit-actions",
                if let Some(url) = card.original_url.clone() {
                    a {
                        class: "fo-btn fo-btn--ghost",
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "View Original"
                    }
                }
                if let Some(url) = card.image_url.clone() {
                    a {
                        class: "fo-btn fo-btn--ghost",
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "View Image"
                    }
                }
                button {
                    class: "fo-btn fo-btn--ghost",
                    onclick: move |_| on_show_text.call(card_for_text.clone()),
                    "View Full Text"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_label() {
        assert_eq!(source_label("anno.onb.ac.at"), "ANNO");
        assert_eq!(source_label("api.digitale-sammlungen.de"), "MDZ");
        assert_eq!(source_label("example.org"), "example.org");
    }
}
