//! Search service access.
//!
//! - [`types`] - Response wire types (`SearchResponse`, `Hit`, `Document`)
//! - [`request`] - The request contract sent for every query
//! - [`client`] - The [`SearchBackend`] seam and its Typesense implementation

pub mod client;
pub mod request;
pub mod types;

pub use client::{SearchBackend, TypesenseClient};
pub use request::SearchRequest;
pub use types::{Document, Highlight, Hit, SearchResponse};
