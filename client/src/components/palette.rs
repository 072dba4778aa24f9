//! Feature palette: collapsible category groups of draggable thumbnails.
//!
//! SYSTEM CONTEXT
//! ==============
//! The catalog is fetched once on mount. Dragging a thumbnail attaches a
//! `DragPayload` to the drag event; the sketch canvas reads it on drop.

use leptos::prelude::*;

use canvas::catalog::FeatureAsset;
use canvas::palette::Palette;

use crate::net::api::asset_url;
use crate::state::toast::ToastState;

#[component]
pub fn FeaturePalette() -> impl IntoView {
    let palette = expect_context::<RwSignal<Palette>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = toasts;
    }

    #[cfg(feature = "hydrate")]
    {
        let loaded = RwSignal::new(false);
        Effect::new(move || {
            if loaded.get() {
                return;
            }
            loaded.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_catalog().await {
                    Ok(catalog) => {
                        log::info!("catalog loaded ({} categories)", catalog.len());
                        palette.set(Palette::from_catalog(&catalog));
                    }
                    Err(e) => {
                        log::warn!("catalog load failed: {e}");
                        crate::components::toast::show_toast(
                            toasts,
                            format!("Could not load features: {e}"),
                            crate::state::toast::ToastCategory::Error,
                        );
                    }
                }
            });
        });
    }

    view! {
        <aside class="feature-palette">
            <For
                each=move || palette.get().groups().to_vec()
                key=|g| g.category.clone()
                children=move |group| {
                    let category = group.category.clone();
                    let toggle_category = category.clone();
                    let expanded = move || palette.get().is_expanded(&category);
                    view! {
                        <div class="category">
                            <button
                                class="category-header"
                                class:active=expanded.clone()
                                on:click=move |_| {
                                    palette.update(|p| {
                                        p.toggle(&toggle_category);
                                    });
                                }
                            >
                                {group.label}
                            </button>
                            <div class="category-items" class:show=expanded>
                                {group.items.into_iter().map(|asset| view! { <Thumbnail asset=asset/> }).collect_view()}
                            </div>
                        </div>
                    }
                }
            />
        </aside>
    }
}

#[component]
fn Thumbnail(asset: FeatureAsset) -> impl IntoView {
    let alt = asset.alt_text();
    let src = asset_url(&asset.path);

    let on_drag_start = {
        #[cfg(feature = "hydrate")]
        {
            let payload = asset.drag_payload();
            move |ev: leptos::ev::DragEvent| {
                crate::util::drag::write_payload(&ev, &payload);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::DragEvent| {}
        }
    };

    view! {
        <img class="feature-thumb" src=src alt=alt draggable="true" on:dragstart=on_drag_start/>
    }
}
