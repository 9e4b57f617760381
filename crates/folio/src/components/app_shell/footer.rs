use dioxus::prelude::*;

/// Footer crediting the holding libraries
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "fo-footer",
            span { class: "fo-footer-text",
                "Page scans and OCR text courtesy of ANNO, ABO, DigiPress and the MDZ."
            }
        }
    }
}
