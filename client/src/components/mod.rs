//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the editor and recognition surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod palette;
pub mod recognition;
pub mod sketch_canvas;
pub mod toast;
pub mod toolbar;
