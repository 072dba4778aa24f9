//! Recognition page: whole-face and component search, plus person enrollment.

use leptos::prelude::*;

use crate::components::recognition::{AddPersonForm, ComponentForm, PanelSlot, RecognizeForm, ResultsPanelView};

#[component]
pub fn RecognitionPage() -> impl IntoView {
    view! {
        <div class="recognition-page">
            <section class="card">
                <h2>"Recognize a Sketch"</h2>
                <RecognizeForm/>
                <ResultsPanelView slot=PanelSlot::Face/>
            </section>
            <section class="card">
                <h2>"Recognize a Component"</h2>
                <ComponentForm/>
                <ResultsPanelView slot=PanelSlot::Component/>
            </section>
            <section class="card">
                <h2>"Add a Person"</h2>
                <AddPersonForm/>
            </section>
        </div>
    }
}
