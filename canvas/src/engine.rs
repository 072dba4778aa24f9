use crate::consts::{DROP_OFFSET, MAX_FEATURE_WIDTH, MIN_FEATURE_WIDTH, SCALE_STEP, Z_INDEX_BASE};
use crate::doc::{DocStore, FeatureId, PartialFeature, PlacedFeature};
use crate::export::ExportPlan;
use crate::hit::hit_test;
use crate::input::{DragPayload, InputState, Key, UiState, WheelDelta};
use crate::viewport::{Point, Viewport};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    FeatureCreated(PlacedFeature),
    FeatureUpdated { id: FeatureId, fields: PartialFeature },
    FeatureDeleted { id: FeatureId },
    SelectionChanged(Option<FeatureId>),
    RenderNeeded,
}

/// Editor state for one page load: placed features, selection, and the gesture in flight.
///
/// Every transition is a method returning the actions the host must apply to
/// the page. Nothing here touches the DOM.
pub struct EditorState {
    pub doc: DocStore,
    pub viewport: Viewport,
    pub ui: UiState,
    pub input: InputState,
    z_counter: i64,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            doc: DocStore::new(),
            viewport: Viewport::default(),
            ui: UiState::default(),
            input: InputState::default(),
            z_counter: Z_INDEX_BASE,
        }
    }
}

impl EditorState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Viewport ---

    /// Record where the canvas sits in the page and how large it is.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    // --- Placement ---

    /// Place a new feature centered-ish under the drop point.
    ///
    /// A missing payload, or one without a source path, creates nothing.
    pub fn on_drop(&mut self, client_pt: Point, payload: Option<&DragPayload>) -> Vec<Action> {
        let Some(payload) = payload.filter(|p| p.is_usable()) else {
            log::debug!("drop ignored: no usable payload");
            return vec![];
        };
        let canvas_pt = self.viewport.client_to_canvas(client_pt);
        let feature = PlacedFeature::new(
            &payload.source_path,
            &payload.alt_text,
            canvas_pt.x - DROP_OFFSET,
            canvas_pt.y - DROP_OFFSET,
        );
        log::debug!("placed {} at ({}, {})", feature.source_path, feature.left, feature.top);
        self.doc.insert(feature.clone());
        vec![Action::FeatureCreated(feature), Action::RenderNeeded]
    }

    /// Lock a feature's aspect ratio once its image reports a natural size.
    pub fn on_image_loaded(&mut self, id: &FeatureId, natural_width: f64, natural_height: f64) -> Vec<Action> {
        if !(natural_width.is_finite() && natural_height.is_finite() && natural_width > 0.0 && natural_height > 0.0) {
            log::warn!("image for {id} reported unusable size {natural_width}x{natural_height}");
            return vec![];
        }
        let Some(f) = self.doc.get(id) else {
            return vec![];
        };
        let aspect = natural_width / natural_height;
        let fields = PartialFeature { height: Some(f.width / aspect), aspect_ratio: Some(aspect), ..Default::default() };
        self.doc.apply_partial(id, &fields);
        vec![Action::FeatureUpdated { id: *id, fields }, Action::RenderNeeded]
    }

    // --- Pointer ---

    /// Select and start dragging the topmost feature under the pointer, or clear the selection.
    pub fn on_pointer_down(&mut self, client_pt: Point) -> Vec<Action> {
        let canvas_pt = self.viewport.client_to_canvas(client_pt);
        let Some(id) = hit_test(canvas_pt, &self.doc) else {
            self.input = InputState::Idle;
            return self.deselect();
        };
        let Some(f) = self.doc.get(&id) else {
            return vec![];
        };
        let offset = Point::new(canvas_pt.x - f.left, canvas_pt.y - f.top);

        let mut actions = Vec::new();
        if self.ui.selected_id != Some(id) {
            self.ui.selected_id = Some(id);
            actions.push(Action::SelectionChanged(Some(id)));
        }
        self.z_counter += 1;
        let fields = PartialFeature { z_index: Some(self.z_counter), ..Default::default() };
        self.doc.apply_partial(&id, &fields);
        actions.push(Action::FeatureUpdated { id, fields });
        actions.push(Action::RenderNeeded);

        self.input = InputState::Dragging { id, offset };
        actions
    }

    /// Move the dragged feature so the grab point follows the pointer, kept inside the canvas.
    pub fn on_pointer_move(&mut self, client_pt: Point) -> Vec<Action> {
        let InputState::Dragging { id, offset } = self.input else {
            return vec![];
        };
        let Some(f) = self.doc.get(&id) else {
            self.input = InputState::Idle;
            return vec![];
        };
        let canvas_pt = self.viewport.client_to_canvas(client_pt);
        let pos = self
            .viewport
            .clamp_top_left(canvas_pt.x - offset.x, canvas_pt.y - offset.y, f.width, f.height);
        let fields = PartialFeature { left: Some(pos.x), top: Some(pos.y), ..Default::default() };
        self.doc.apply_partial(&id, &fields);
        vec![Action::FeatureUpdated { id, fields }, Action::RenderNeeded]
    }

    /// End any drag. The feature stays selected where it is.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        vec![]
    }

    // --- Wheel / keyboard ---

    /// Scale the selected feature one step about its center.
    ///
    /// Returns no actions when nothing is selected; the host should then let
    /// the wheel event scroll the page.
    pub fn on_wheel(&mut self, delta: WheelDelta) -> Vec<Action> {
        let Some(id) = self.ui.selected_id else {
            return vec![];
        };
        let Some(f) = self.doc.get(&id) else {
            return vec![];
        };
        let aspect = f.effective_aspect();
        let center = f.center();
        // Clamp only in the direction of the step: a feature already past a
        // bound stays put instead of jumping the other way.
        let width = if delta.grows() {
            (f.width * SCALE_STEP).min(self.max_width(aspect).max(f.width))
        } else {
            (f.width / SCALE_STEP).max(MIN_FEATURE_WIDTH.min(f.width))
        };
        let height = width / aspect;
        let fields = PartialFeature {
            left: Some(center.x - width / 2.0),
            top: Some(center.y - height / 2.0),
            width: Some(width),
            height: Some(height),
            ..Default::default()
        };
        self.doc.apply_partial(&id, &fields);
        vec![Action::FeatureUpdated { id, fields }, Action::RenderNeeded]
    }

    /// `Delete` / `Backspace` remove the selection; `Escape` clears it.
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if key.is_delete() {
            self.delete_selected()
        } else if key.is_escape() {
            self.deselect()
        } else {
            vec![]
        }
    }

    // --- Commands ---

    /// Remove the selected feature. No-op without a selection.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        let Some(id) = self.ui.selected_id.take() else {
            return vec![];
        };
        if matches!(self.input, InputState::Dragging { id: dragged, .. } if dragged == id) {
            self.input = InputState::Idle;
        }
        if self.doc.remove(&id).is_none() {
            log::warn!("selected feature {id} was already gone");
        } else {
            log::debug!("deleted feature {id}");
        }
        vec![Action::FeatureDeleted { id }, Action::SelectionChanged(None), Action::RenderNeeded]
    }

    /// Clear the selection, if any.
    pub fn deselect(&mut self) -> Vec<Action> {
        if self.ui.selected_id.take().is_none() {
            return vec![];
        }
        vec![Action::SelectionChanged(None), Action::RenderNeeded]
    }

    /// First half of a save: drop the selection so no outline is captured.
    pub fn begin_export(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        self.deselect()
    }

    /// Snapshot of what to rasterize, taken after the settle delay.
    #[must_use]
    pub fn export_plan(&self) -> ExportPlan {
        ExportPlan::from_doc(&self.doc, &self.viewport)
    }

    // --- Queries ---

    /// The currently selected feature, if any.
    #[must_use]
    pub fn selection(&self) -> Option<FeatureId> {
        self.ui.selected_id
    }

    #[must_use]
    pub fn is_selected(&self, id: &FeatureId) -> bool {
        self.ui.selected_id.as_ref() == Some(id)
    }

    /// Whether the delete control should be shown.
    #[must_use]
    pub fn delete_visible(&self) -> bool {
        self.ui.delete_visible()
    }

    /// Look up a feature by ID.
    #[must_use]
    pub fn feature(&self, id: &FeatureId) -> Option<&PlacedFeature> {
        self.doc.get(id)
    }

    /// Widest a feature of the given aspect may grow while still fitting the canvas.
    fn max_width(&self, aspect: f64) -> f64 {
        if !self.viewport.is_measured() {
            return MAX_FEATURE_WIDTH;
        }
        self.viewport
            .width
            .min(self.viewport.height * aspect)
            .max(MIN_FEATURE_WIDTH)
    }
}
