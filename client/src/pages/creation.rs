//! Creation page: palette on the left, the sketch canvas and its controls on the right.

use leptos::prelude::*;

use crate::components::palette::FeaturePalette;
use crate::components::sketch_canvas::SketchCanvas;
use crate::components::toolbar::EditorToolbar;

#[component]
pub fn CreationPage() -> impl IntoView {
    view! {
        <div class="creation-page">
            <FeaturePalette/>
            <section class="canvas-area">
                <EditorToolbar/>
                <SketchCanvas/>
                <p class="canvas-hint">
                    "Drag features onto the canvas. Click to select, drag to move, scroll to resize, Delete to remove."
                </p>
            </section>
        </div>
    }
}
