//! API endpoints.

pub mod data;

use std::sync::Arc;

use axum::{Router, routing::get};
use data_store::DataStore;

use crate::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router<S: DataStore + 'static>() -> Router<Arc<AppState<S>>> {
    Router::new()
        .route("/data", get(data::list_data::<S>).post(data::create_data::<S>))
        .route(
            "/data/:date",
            get(data::get_data::<S>)
                .put(data::update_data::<S>)
                .delete(data::delete_data::<S>),
        )
        // Health check
        .route("/health", get(health_check))
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
