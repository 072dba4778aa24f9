//! Recognition page forms and results panels.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submissions go through `net::api` to the gateway, which relays them to the
//! recognition backend. Each results panel shows an analyzing status while a
//! request is in flight; `ResultsPanel` generations make sure only the latest
//! submission's reply is displayed.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::types::MatchCard;
use crate::state::recognition::{COMPONENT_PARTS, PanelView, RecognitionState};
#[cfg(feature = "hydrate")]
use crate::state::recognition::{ANALYZING_COMPONENT, ANALYZING_FACE, MISSING_COMPONENT_SKETCH, MISSING_SKETCH};
use crate::state::toast::ToastState;

/// Shown in place of a match photo that fails to load.
pub const PHOTO_PLACEHOLDER: &str = "data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' width='160' height='160'><rect width='100%' height='100%' fill='%23222'/><text x='50%' y='50%' fill='%23fff' font-size='14' text-anchor='middle' dominant-baseline='central'>No Image</text></svg>";

#[cfg(feature = "hydrate")]
fn alert(message: &str) {
    let Some(w) = web_sys::window() else {
        log::warn!("no window for alert: {message}");
        return;
    };
    if let Err(e) = w.alert_with_message(message) {
        log::warn!("alert failed: {e:?}");
    }
}

#[cfg(feature = "hydrate")]
fn selected_file(input: &NodeRef<leptos::html::Input>) -> Option<web_sys::File> {
    input.get_untracked()?.files()?.get(0)
}

/// Whole-face sketch upload.
#[component]
pub fn RecognizeForm() -> impl IntoView {
    let state = expect_context::<RwSignal<RecognitionState>>();
    let file_ref = NodeRef::<leptos::html::Input>::new();

    let on_submit = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                let Some(file) = selected_file(&file_ref) else {
                    alert(MISSING_SKETCH);
                    return;
                };
                let mut generation = 0;
                state.update(|s| generation = s.face.begin(ANALYZING_FACE));
                leptos::task::spawn_local(async move {
                    let outcome = crate::net::api::recognize(&file).await;
                    if let Err(e) = &outcome {
                        log::warn!("recognition failed: {e}");
                    }
                    state.update(|s| {
                        s.face.resolve(generation, outcome);
                    });
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = state;
            move |_ev: leptos::ev::SubmitEvent| {}
        }
    };

    view! {
        <form class="recognize-form" on:submit=on_submit>
            <label for="sketch-file">"Upload Sketch"</label>
            <input type="file" id="sketch-file" name="sketch" accept="image/*" node_ref=file_ref/>
            <button type="submit" class="btn btn-primary">"Recognize"</button>
        </form>
    }
}

/// Single-component sketch upload with a part selector.
#[component]
pub fn ComponentForm() -> impl IntoView {
    let state = expect_context::<RwSignal<RecognitionState>>();
    let file_ref = NodeRef::<leptos::html::Input>::new();
    let part = RwSignal::new(COMPONENT_PARTS[0].0.to_owned());

    let on_submit = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                let Some(file) = selected_file(&file_ref) else {
                    alert(MISSING_COMPONENT_SKETCH);
                    return;
                };
                let part = part.get_untracked();
                let mut generation = 0;
                state.update(|s| generation = s.component.begin(ANALYZING_COMPONENT));
                leptos::task::spawn_local(async move {
                    let outcome = crate::net::api::recognize_component(&file, &part).await;
                    if let Err(e) = &outcome {
                        log::warn!("component recognition failed ({part}): {e}");
                    }
                    state.update(|s| {
                        s.component.resolve(generation, outcome);
                    });
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = state;
            move |_ev: leptos::ev::SubmitEvent| {}
        }
    };

    view! {
        <form class="recognize-component-form" on:submit=on_submit>
            <label for="component-sketch-file">"Upload Component Sketch"</label>
            <input type="file" id="component-sketch-file" name="sketch" accept="image/*" node_ref=file_ref/>
            <label for="component-type">"Component"</label>
            <select id="component-type" name="part" on:change=move |ev| part.set(event_target_value(&ev))>
                {COMPONENT_PARTS
                    .iter()
                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                    .collect_view()}
            </select>
            <button type="submit" class="btn btn-primary">"Recognize Component"</button>
        </form>
    }
}

/// Which panel of `RecognitionState` to display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelSlot {
    Face,
    Component,
}

#[component]
pub fn ResultsPanelView(slot: PanelSlot) -> impl IntoView {
    let state = expect_context::<RwSignal<RecognitionState>>();
    let view_of = move || {
        state.with(|s| match slot {
            PanelSlot::Face => s.face.view.clone(),
            PanelSlot::Component => s.component.view.clone(),
        })
    };

    view! {
        <Show when=move || view_of() != PanelView::Hidden>
            <div class="results-container">
                <h2>"Recognition Result"</h2>
                <div class="results-content">
                    {move || match view_of() {
                        PanelView::Match(card) => view! { <ProfileCard card=card/> }.into_any(),
                        error @ PanelView::Error(_) => {
                            view! { <p class="error-message">{error.status_text()}</p> }.into_any()
                        }
                        other => view! { <p class="status-message">{other.status_text()}</p> }.into_any(),
                    }}
                </div>
            </div>
        </Show>
    }
}

#[component]
fn ProfileCard(card: MatchCard) -> impl IntoView {
    let photo = RwSignal::new(card.photo_path.clone().unwrap_or_else(|| PHOTO_PLACEHOLDER.to_owned()));
    let alt = format!("Photo of {}", card.name);
    let on_error = move |_| {
        if photo.get_untracked() != PHOTO_PLACEHOLDER {
            photo.set(PHOTO_PLACEHOLDER.to_owned());
        }
    };

    view! {
        <div class="profile-card">
            <img class="profile-photo" src=move || photo.get() alt=alt on:error=on_error/>
            <div class="profile-details">
                <h3>
                    {card.name.clone()}
                    {card.part.clone().map(|p| view! { " " <small>"(" {p} ")"</small> })}
                </h3>
                {card.age.clone().map(|age| view! { <p><strong>"Age: "</strong>{age}</p> })}
                {card
                    .criminal_record
                    .clone()
                    .map(|record| view! { <p><strong>"Criminal Record: "</strong>{record}</p> })}
                <p class="score">
                    <strong>"Similarity: "</strong>
                    {card.similarity.clone()}
                    <span class="unit">"%"</span>
                </p>
                <p class="score"><strong>"Distance: "</strong>{card.distance.clone()}</p>
            </div>
        </div>
    }
}

/// Enroll a new person with a reference photo.
#[component]
pub fn AddPersonForm() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form_ref = NodeRef::<leptos::html::Form>::new();

    let on_submit = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::SubmitEvent| {
                use crate::components::toast::show_toast;
                use crate::state::toast::ToastCategory;

                ev.prevent_default();
                let Some(form) = form_ref.get_untracked() else {
                    return;
                };
                leptos::task::spawn_local(async move {
                    match crate::net::api::add_person(&form).await {
                        Ok(message) => {
                            show_toast(toasts, message, ToastCategory::Success);
                            form.reset();
                        }
                        Err(e) => {
                            log::warn!("add person failed: {e}");
                            show_toast(toasts, format!("Error: {e}"), ToastCategory::Error);
                        }
                    }
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = toasts;
            move |_ev: leptos::ev::SubmitEvent| {}
        }
    };

    view! {
        <form class="add-person-form" node_ref=form_ref on:submit=on_submit>
            <label for="person-name">"Name"</label>
            <input type="text" id="person-name" name="name" required=true/>
            <label for="person-age">"Age"</label>
            <input type="number" id="person-age" name="age" required=true/>
            <label for="person-record">"Criminal Record"</label>
            <textarea id="person-record" name="record" required=true></textarea>
            <label for="person-photo">"Photo"</label>
            <input type="file" id="person-photo" name="photo" accept="image/*" required=true/>
            <button type="submit" class="btn btn-primary">"Add Person"</button>
        </form>
    }
}
