//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! catalog is loaded once at startup and never changes; the recognition
//! backend is a shared handle behind a trait object so tests can swap it out.

use std::sync::Arc;

use canvas::catalog::Catalog;

use crate::services::recognition::RecognitionBackend;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub backend: Arc<dyn RecognitionBackend>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Catalog, backend: Arc<dyn RecognitionBackend>) -> Self {
        Self { catalog: Arc::new(catalog), backend }
    }
}
