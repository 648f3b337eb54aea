//! API routes: thesis search plus uniform CRUD per catalog path segment.
//! `/search` is static and takes precedence over the `/:path_segment` parameter.

use crate::handlers::{create, delete as delete_handler, list, search, update};
use crate::state::AppState;
use axum::{routing::get, routing::put, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/search", get(search))
        .route("/:path_segment", get(list).post(create))
        .route("/:path_segment/:id", put(update).delete(delete_handler))
        .with_state(state)
}
