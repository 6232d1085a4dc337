//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome (sidebar, guard outcomes, banners) and
//! read the session from the auth context provided by the app root.

pub mod error_banner;
pub mod guard;
pub mod layout;
pub mod loading;
pub mod report_form;
pub mod stat_card;
