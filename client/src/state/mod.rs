//! Reactive state shared through Leptos context.
//!
//! The editor itself (`canvas::engine::EditorState`) and the palette
//! (`canvas::palette::Palette`) are provided directly as signals; the modules
//! here hold the page-level state the canvas crate does not know about.

pub mod recognition;
pub mod toast;
