//! Toast stack rendered in the page corner.

use leptos::prelude::*;

use crate::state::toast::{ToastCategory, ToastState};
#[cfg(feature = "hydrate")]
use crate::state::toast::{TOAST_HIDE_MS, TOAST_VISIBLE_MS};

/// Show a toast and schedule its dismissal.
pub fn show_toast(toasts: RwSignal<ToastState>, message: impl Into<String>, category: ToastCategory) {
    let mut id = 0;
    toasts.update(|t| id = t.push(message, category));

    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(TOAST_VISIBLE_MS, move || hide_toast(toasts, id)).forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Start the hide animation, then remove the toast. Repeated calls are no-ops.
pub fn hide_toast(toasts: RwSignal<ToastState>, id: u64) {
    let mut started = false;
    toasts.update(|t| started = t.begin_hide(id));
    if !started {
        return;
    }

    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(TOAST_HIDE_MS, move || {
            toasts.update(|t| {
                t.remove(id);
            });
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        toasts.update(|t| {
            t.remove(id);
        });
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-container">
            <For
                each=move || toasts.get().toasts
                key=|t| (t.id, t.hiding)
                children=move |t| {
                    let id = t.id;
                    let class = format!("toast {} {}", t.category.class(), if t.hiding { "hide" } else { "show" });
                    view! {
                        <div class=class>
                            <div class="toast-body">{t.message}</div>
                            <button class="toast-close" aria-label="close" on:click=move |_| hide_toast(toasts, id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
