//! Shared session, access-control, and API plumbing for the chaos console.
//!
//! This crate owns everything the browser app and the CLI have in common:
//! the closed [`Role`] set, the backend response envelope, the canonical
//! entity model, the transport-agnostic [`ApiClient`], the injected-session
//! [`AuthContext`], and the route guard that decides what a session may see.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` (Leptos) plugs in a `gloo-net` transport and a `localStorage`
//! token store; `cli` uses the `reqwest` transport from the `native` feature
//! and a token file. Neither front end talks to the backend directly.

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod guard;
pub mod leaderboard;
pub mod model;
pub mod navigation;
pub mod role;
pub mod session;
pub mod storage;
pub mod transport;
mod wire;

#[cfg(test)]
mod test_support;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use guard::GuardState;
pub use navigation::{Access, Screen};
pub use role::Role;
pub use session::{AuthContext, Session, SessionSlot, SharedSession};
pub use storage::{MemoryTokenStore, TokenStore};
pub use transport::{Transport, TransportError};
