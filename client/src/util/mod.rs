//! Browser glue helpers: event mapping, drag payloads, editor dispatch, and sketch download.

pub mod canvas_input;
pub mod download;
pub mod drag;
pub mod editor_actions;
