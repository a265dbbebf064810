//! Shared types for the portfolio site.
//!
//! Nothing here touches the browser, so the contact flow and the page
//! content can be exercised with plain `cargo test`.

pub mod config;
pub mod content;
pub mod usecases;
