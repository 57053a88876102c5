use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::shared::menu_tree::MenuItem;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::a001_menu;
use crate::shared::config::MenuSettings;

/// GET /api/menu?role=..&route=..&<params>
///
/// Query parameters other than `role` and `route` are matched against item route parameters.
pub async fn get_tree(
    State(settings): State<Arc<MenuSettings>>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<Vec<MenuItem>>, StatusCode> {
    let (role, ctx) = settings.from_query(query);

    match a001_menu::service::menu_tree(&role, &ctx).await {
        Ok(items) => Ok(Json(items)),
        Err(e) => {
            tracing::error!("Failed to build menu for role '{}': {:#}", role, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/menu/testdata
pub async fn insert_test_data() -> StatusCode {
    match a001_menu::service::insert_test_data().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::error!("Failed to insert menu test data: {:#}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
