//! Shared reactive state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` holds the one session signal and the auth context built on it;
//! `remote` is the per-view fetch state every data screen uses.

pub mod auth;
pub mod remote;
