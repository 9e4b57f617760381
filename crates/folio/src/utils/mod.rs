//! Utility modules for common patterns.

pub mod formatting;

pub use formatting::{format_page_label, format_result_count};
