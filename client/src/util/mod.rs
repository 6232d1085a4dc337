//! Helpers shared by the pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Formatting and select-value parsing stay free of Leptos so they can be
//! unit-tested natively; `token_storage` is the one browser-facing piece.

pub mod display;
pub mod filter;
pub mod token_storage;
