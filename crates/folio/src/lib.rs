//! Folio - search front-end for digitised newspapers and books.
//!
//! A Dioxus application that queries an external Typesense-compatible search
//! service and renders the matching pages with highlighted snippets,
//! pagination, and a full-text viewer. Retrieval and ranking happen in the
//! service; query state, highlighting, and view models come from
//! [`folio_core`].
//!
//! # Platform Support
//!
//! - **Web (WASM)**: the primary target, built with `dx serve --platform web`
//! - **Desktop**: same UI in a native window, config URL from `FOLIO_CONFIG_URL`

#![forbid(unsafe_code)]

pub mod components;
pub mod platform;
pub mod utils;
