//! Networking modules for the host server's HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the requests and `types` parses their replies.

pub mod api;
pub mod types;
