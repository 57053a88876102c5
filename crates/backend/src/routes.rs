use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handlers;
use crate::shared::config::MenuSettings;

/// All application routes
pub fn configure_routes(settings: MenuSettings) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Menu handlers
        .route("/api/menu", get(handlers::a001_menu::get_tree))
        .route(
            "/api/menu/testdata",
            post(handlers::a001_menu::insert_test_data),
        )
        .with_state(Arc::new(settings))
}
