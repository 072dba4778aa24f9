//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page lays out its route and delegates rendering details to
//! `components`.

pub mod creation;
pub mod recognition;
