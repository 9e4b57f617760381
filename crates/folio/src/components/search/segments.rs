use dioxus::prelude::*;
use folio_core::highlight::Segment;

/// Renders highlighted text as text nodes and `mark` elements.
///
/// Segment text is always inserted as text, never parsed as markup.
#[component]
pub fn Segments(segments: Vec<Segment>) -> Element {
    rsx! {
        for (idx, segment) in segments.iter().enumerate() {
            if segment.highlighted {
                mark { key: "{idx}", class: "fo-mark", "{segment.text}" }
            } else {
                span { key: "{idx}", "{segment.text}" }
            }
        }
    }
}
