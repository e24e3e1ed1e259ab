use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::dto::request::SelectRequest;
use crate::dto::response::SuccessResponse;
use crate::errors::ApiError;
use crate::state::AppState;

// =============================================================================
// Select Item Handler
// =============================================================================

/// `POST /api/select`: marks or unmarks one id.
///
/// Ids are not checked against the collection.
pub async fn select_item(
    State(state): State<AppState>,
    body: Result<Json<SelectRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let Json(request) = body?;

    state.catalog.set_selected(request.id, request.selected);

    Ok(Json(SuccessResponse::ok()))
}

// =============================================================================
// Tests
// =============================================================================
