//! Editor core for the composite face-sketch board.
//!
//! This crate holds everything about the sketch editor that does not need a
//! browser: the feature catalog and palette, the placed-feature store, the
//! selection / drag / resize state machine, hit testing, and the PNG export
//! rasterizer. The Leptos client wires DOM events into [`engine::EditorState`]
//! and applies the returned [`engine::Action`]s to the page.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::EditorState`] and its transitions |
//! | [`doc`] | Placed features and the in-memory store |
//! | [`catalog`] | Ordered category → image file mapping |
//! | [`palette`] | Collapsible thumbnail groups built from the catalog |
//! | [`viewport`] | Canvas placement, coordinate conversion, clamping |
//! | [`input`] | Drag payloads, keys, wheel deltas, gesture state |
//! | [`hit`] | Topmost-feature hit testing |
//! | [`export`] | Flattening placed features into a PNG |
//! | [`consts`] | Editor tunables (drop offset, scale step, size bounds, etc.) |

pub mod catalog;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod export;
pub mod hit;
pub mod input;
pub mod palette;
pub mod viewport;
