//! Document model: placed features and the in-memory store that owns them.
//!
//! This module defines what is on the canvas (`PlacedFeature`), a sparse
//! update type for incremental edits (`PartialFeature`), and the runtime store
//! (`DocStore`). The store keeps features in insertion order, which is the
//! order the host adds elements to the page; `sorted_features` derives the
//! paint order from `z_index` with insertion order breaking ties.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::DEFAULT_FEATURE_WIDTH;
use crate::viewport::Point;

/// Unique identifier for a placed feature.
pub type FeatureId = Uuid;

/// A feature image instance placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedFeature {
    /// Unique identifier for this instance.
    pub id: FeatureId,
    /// Image path the instance was dropped from.
    pub source_path: String,
    /// Accessible description carried over from the palette.
    pub alt_text: String,
    /// Left edge in canvas coordinates.
    pub left: f64,
    /// Top edge in canvas coordinates.
    pub top: f64,
    /// Rendered width in canvas units.
    pub width: f64,
    /// Rendered height in canvas units.
    pub height: f64,
    /// Natural width / height of the image, known once it has loaded.
    pub aspect_ratio: Option<f64>,
    /// Stacking order; higher values paint above lower ones.
    pub z_index: i64,
}

impl PlacedFeature {
    /// A new instance at the given top-left with the default width and a
    /// square placeholder height until the image reports its natural size.
    #[must_use]
    pub fn new(source_path: &str, alt_text: &str, left: f64, top: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            source_path: source_path.to_owned(),
            alt_text: alt_text.to_owned(),
            left,
            top,
            width: DEFAULT_FEATURE_WIDTH,
            height: DEFAULT_FEATURE_WIDTH,
            aspect_ratio: None,
            z_index: 0,
        }
    }

    /// Aspect ratio used for resizing; `1.0` while unknown or degenerate.
    #[must_use]
    pub fn effective_aspect(&self) -> f64 {
        match self.aspect_ratio {
            Some(r) if r.is_finite() && r > 0.0 => r,
            _ => 1.0,
        }
    }

    /// Center of the bounding box.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Whether a canvas-space point falls inside the bounding box (edges inclusive).
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.left + self.width && p.y >= self.top && p.y <= self.top + self.height
    }

    /// Inline CSS placing the element at its canvas coordinates. The canvas
    /// container must be the positioned ancestor.
    #[must_use]
    pub fn css_style(&self) -> String {
        format!(
            "position: absolute; left: {}px; top: {}px; width: {}px; height: {}px; z-index: {};",
            self.left, self.top, self.width, self.height, self.z_index
        )
    }
}

/// Sparse update for a placed feature. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialFeature {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i64>,
}

/// In-memory store of placed features, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct DocStore {
    features: Vec<PlacedFeature>,
}

impl DocStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { features: Vec::new() }
    }

    /// Append a feature, or replace the one with the same `id` in place.
    pub fn insert(&mut self, feature: PlacedFeature) {
        match self.features.iter_mut().find(|f| f.id == feature.id) {
            Some(existing) => *existing = feature,
            None => self.features.push(feature),
        }
    }

    /// Remove a feature by id, returning it if it was present.
    pub fn remove(&mut self, id: &FeatureId) -> Option<PlacedFeature> {
        let idx = self.features.iter().position(|f| f.id == *id)?;
        Some(self.features.remove(idx))
    }

    /// Return a reference to a feature by id.
    #[must_use]
    pub fn get(&self, id: &FeatureId) -> Option<&PlacedFeature> {
        self.features.iter().find(|f| f.id == *id)
    }

    /// Return a mutable reference to a feature by id.
    pub fn get_mut(&mut self, id: &FeatureId) -> Option<&mut PlacedFeature> {
        self.features.iter_mut().find(|f| f.id == *id)
    }

    /// Apply a partial update. Returns false if the feature doesn't exist.
    pub fn apply_partial(&mut self, id: &FeatureId, partial: &PartialFeature) -> bool {
        let Some(f) = self.get_mut(id) else {
            return false;
        };
        if let Some(left) = partial.left {
            f.left = left;
        }
        if let Some(top) = partial.top {
            f.top = top;
        }
        if let Some(w) = partial.width {
            f.width = w;
        }
        if let Some(h) = partial.height {
            f.height = h;
        }
        if let Some(r) = partial.aspect_ratio {
            f.aspect_ratio = Some(r);
        }
        if let Some(z) = partial.z_index {
            f.z_index = z;
        }
        true
    }

    /// Features in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PlacedFeature> {
        self.features.iter()
    }

    /// Features in paint order: ascending `z_index`, insertion order within ties.
    #[must_use]
    pub fn sorted_features(&self) -> Vec<&PlacedFeature> {
        let mut out: Vec<&PlacedFeature> = self.features.iter().collect();
        out.sort_by_key(|f| f.z_index);
        out
    }

    /// Number of features currently on the canvas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns `true` if the canvas holds no features.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
