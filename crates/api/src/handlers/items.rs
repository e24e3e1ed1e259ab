use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};

use crate::dto::request::ItemsQueryParams;
use crate::dto::response::ItemsResponse;
use crate::errors::ApiError;
use crate::state::AppState;

// =============================================================================
// List Items Handler
// =============================================================================

/// `GET /api/items`: one page of the filtered, ordered collection.
pub async fn list_items(
    State(state): State<AppState>,
    params: Result<Query<ItemsQueryParams>, QueryRejection>,
) -> Result<Json<ItemsResponse>, ApiError> {
    let Query(params) = params?;
    let query = params.into_query(&state.paging)?;

    let result = state.catalog.query(&query);

    tracing::debug!(
        page = query.page().page(),
        limit = query.page().limit(),
        search = query.search().as_str(),
        total = result.total,
        "Served item page"
    );

    Ok(Json(ItemsResponse::from(result)))
}

// =============================================================================
// Tests
// =============================================================================
