//! Browser networking.
//!
//! SYSTEM CONTEXT
//! ==============
//! All backend traffic goes through `console_core::ApiClient`; this module
//! only provides the `gloo-net` transport it runs on.

pub mod transport;
