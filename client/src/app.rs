//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

use canvas::engine::EditorState;
use canvas::palette::Palette;

use crate::components::toast::ToastHost;
use crate::pages::{creation::CreationPage, recognition::RecognitionPage};
use crate::state::{recognition::RecognitionState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the editor, palette, toast, and recognition contexts and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let editor = RwSignal::new(EditorState::new());
    let palette = RwSignal::new(Palette::default());
    let toasts = RwSignal::new(ToastState::default());
    let recognition = RwSignal::new(RecognitionState::default());

    provide_context(editor);
    provide_context(palette);
    provide_context(toasts);
    provide_context(recognition);

    view! {
        <Stylesheet id="leptos" href="/pkg/sketchboard.css"/>
        <Title text="Face Sketch"/>

        <Router>
            <nav class="main-nav">
                <A href="/">"Create Sketch"</A>
                <A href="/recognition">"Recognition"</A>
                <span class="nav-session">
                    <a href="/login" rel="external">"Sign in"</a>
                    <a href="/logout" rel="external">"Sign out"</a>
                </span>
            </nav>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=CreationPage/>
                    <Route path=StaticSegment("recognition") view=RecognitionPage/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
