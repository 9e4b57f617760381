//! App shell components: Footer
//!
//! These components form the persistent UI framework around the main content area.

mod footer;

pub use footer::Footer;
