//! Input model: drag payloads, keys, wheel deltas, and the gesture state machine.
//!
//! `UiState` holds what outlives a gesture (the selection). `InputState` is the
//! gesture tracked between pointer-down and pointer-up; it carries the pointer
//! offset captured on press so every move can be computed from scratch.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::doc::FeatureId;
use crate::viewport::Point;

/// Data attached to a palette thumbnail when a drag starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    /// Image path of the dragged asset.
    pub source_path: String,
    /// Accessible description for the placed instance.
    pub alt_text: String,
}

impl DragPayload {
    /// A payload is usable only when it names an image.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        !self.source_path.trim().is_empty()
    }
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"Delete"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// `Delete` or `Backspace`.
    #[must_use]
    pub fn is_delete(&self) -> bool {
        matches!(self.0.as_str(), "Delete" | "Backspace")
    }

    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape"
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

impl WheelDelta {
    /// Scrolling up grows the selection; anything else shrinks it.
    #[must_use]
    pub fn grows(self) -> bool {
        self.dy < 0.0
    }
}

/// Persistent UI state visible to the host.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// The id of the currently selected feature, if any.
    pub selected_id: Option<FeatureId>,
}

impl UiState {
    /// The delete control is shown exactly when something is selected.
    #[must_use]
    pub fn delete_visible(&self) -> bool {
        self.selected_id.is_some()
    }
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is moving a placed feature.
    Dragging {
        /// Id of the feature being dragged.
        id: FeatureId,
        /// Pointer position minus the feature's top-left at press time, in canvas units.
        offset: Point,
    },
}
