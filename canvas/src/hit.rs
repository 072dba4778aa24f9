#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::{DocStore, FeatureId};
use crate::viewport::Point;

/// Return the topmost feature whose box contains `canvas_pt`.
///
/// Walks paint order back to front so the feature drawn last wins, matching
/// what the pointer would land on in the page.
#[must_use]
pub fn hit_test(canvas_pt: Point, doc: &DocStore) -> Option<FeatureId> {
    doc.sorted_features()
        .into_iter()
        .rev()
        .find(|f| f.contains(canvas_pt))
        .map(|f| f.id)
}
