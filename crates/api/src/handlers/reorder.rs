use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::dto::request::ReorderRequest;
use crate::dto::response::SuccessResponse;
use crate::errors::ApiError;
use crate::state::AppState;

// =============================================================================
// Reorder Items Handler
// =============================================================================

/// `POST /api/reorder`: replaces the custom order with the given ids.
///
/// An empty or missing list clears it.
pub async fn reorder_items(
    State(state): State<AppState>,
    body: Result<Json<ReorderRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let Json(request) = body?;

    state.catalog.set_overlay(request.into_ids());

    Ok(Json(SuccessResponse::ok()))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PagingConfig;
    use crate::dto::request::ItemReference;
    use item_browser_domain::{Catalog, ItemId, ItemStore, Query};
    use rstest::{fixture, rstest};

    #[fixture]
    fn state() -> AppState {
        AppState::new(
            Catalog::new(ItemStore::generate(5, 1)),
            PagingConfig::default(),
        )
    }

    fn request(ids: &[u64]) -> ReorderRequest {
        ReorderRequest {
            items: Some(
                ids.iter()
                    .map(|id| ItemReference {
                        id: ItemId::new(*id),
                    })
                    .collect(),
            ),
        }
    }

    fn first_page(state: &AppState) -> Vec<u64> {
        state
            .catalog
            .query(&Query::new(1, 5, "").unwrap())
            .items
            .iter()
            .map(|item| item.id.value())
            .collect()
    }

    #[rstest]
    #[tokio::test]
    async fn applies_overlay(state: AppState) {
        let Json(response) = reorder_items(State(state.clone()), Ok(Json(request(&[3, 1]))))
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(first_page(&state), vec![3, 1, 2, 4, 5]);
    }

    #[rstest]
    #[tokio::test]
    async fn missing_items_clear_overlay(state: AppState) {
        reorder_items(State(state.clone()), Ok(Json(request(&[5]))))
            .await
            .unwrap();

        reorder_items(State(state.clone()), Ok(Json(ReorderRequest::default())))
            .await
            .unwrap();

        assert!(!state.catalog.overlay().is_active());
        assert_eq!(first_page(&state), vec![1, 2, 3, 4, 5]);
    }
}
