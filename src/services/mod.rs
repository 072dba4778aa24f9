//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own validation and backend transport so route handlers can
//! stay focused on protocol translation.

pub mod catalog;
pub mod recognition;
