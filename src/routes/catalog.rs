//! Feature catalog route.

use axum::extract::State;
use axum::response::Json;

use canvas::catalog::Catalog;

use crate::state::AppState;

/// `GET /api/catalog`: the feature catalog in authored order.
pub async fn get_catalog(State(state): State<AppState>) -> Json<Catalog> {
    Json(Catalog::clone(&state.catalog))
}
