//! Request DTOs for API endpoints.

use serde::{Deserialize, Serialize};

use item_browser_domain::{ItemId, PageRequest, Query, QueryError, SearchTerm};

use crate::config::PagingConfig;

// =============================================================================
// Item Query
// =============================================================================

/// Query parameters for listing items.
///
/// ```text
/// GET /api/items?page=2&limit=20&search=item%201
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemsQueryParams {
    /// 1-based page number. Defaults to 1.
    #[serde(default)]
    pub page: Option<i64>,

    /// Page size. Defaults to the configured page size and is clamped to the
    /// configured maximum.
    #[serde(default)]
    pub limit: Option<i64>,

    #[serde(default)]
    pub search: Option<String>,
}

impl ItemsQueryParams {
    /// Applies defaults and the page size cap, then validates.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] when the page or limit is below 1.
    pub fn into_query(self, paging: &PagingConfig) -> Result<Query, QueryError> {
        let page = self.page.unwrap_or(1);
        let limit = self
            .limit
            .unwrap_or_else(|| i64::try_from(paging.default_page_size).unwrap_or(i64::MAX));

        let page = PageRequest::new(page, limit)?.with_limit_cap(paging.max_page_size);

        Ok(Query::from_parts(
            page,
            SearchTerm::new(self.search.unwrap_or_default()),
        ))
    }
}

// =============================================================================
// Selection
// =============================================================================

/// Body of `POST /api/select`.
///
/// A missing `selected` flag deselects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectRequest {
    pub id: ItemId,

    #[serde(default)]
    pub selected: bool,
}

// =============================================================================
// Reorder
// =============================================================================

/// Body of `POST /api/reorder`.
///
/// Clients send whole items; only their ids matter. An absent, null or empty
/// list clears the custom order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReorderRequest {
    #[serde(default)]
    pub items: Option<Vec<ItemReference>>,
}

impl ReorderRequest {
    pub fn into_ids(self) -> impl Iterator<Item = ItemId> {
        self.items
            .into_iter()
            .flatten()
            .map(|reference| reference.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemReference {
    pub id: ItemId,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn paging() -> PagingConfig {
        PagingConfig {
            default_page_size: 20,
            max_page_size: 100,
        }
    }

    mod items_query_params {
        use super::*;

        #[rstest]
        fn defaults_apply_when_absent(paging: PagingConfig) {
            let query = ItemsQueryParams::default().into_query(&paging).unwrap();

            assert_eq!(query.page().page(), 1);
            assert_eq!(query.page().limit(), 20);
            assert!(query.search().is_empty());
        }

        #[rstest]
        fn limit_is_clamped_to_maximum(paging: PagingConfig) {
            let params = ItemsQueryParams {
                limit: Some(5000),
                ..ItemsQueryParams::default()
            };

            assert_eq!(params.into_query(&paging).unwrap().page().limit(), 100);
        }

        #[rstest]
        #[case(Some(0), None, "page")]
        #[case(Some(-4), None, "page")]
        #[case(None, Some(0), "limit")]
        #[case(None, Some(-1), "limit")]
        fn rejects_non_positive_values(
            paging: PagingConfig,
            #[case] page: Option<i64>,
            #[case] limit: Option<i64>,
            #[case] field: &str,
        ) {
            let params = ItemsQueryParams {
                page,
                limit,
                search: None,
            };

            assert_eq!(params.into_query(&paging).unwrap_err().field(), field);
        }

        #[rstest]
        fn search_is_kept_verbatim(paging: PagingConfig) {
            let params = ItemsQueryParams {
                search: Some(" Item 7".to_string()),
                ..ItemsQueryParams::default()
            };

            assert_eq!(params.into_query(&paging).unwrap().search().as_str(), " Item 7");
        }
    }

    mod select_request {
        use super::*;

        #[rstest]
        fn deserialize_with_flag() {
            let request: SelectRequest =
                serde_json::from_str(r#"{"id": 3, "selected": true}"#).unwrap();

            assert_eq!(request.id, ItemId::new(3));
            assert!(request.selected);
        }

        #[rstest]
        fn missing_flag_deselects() {
            let request: SelectRequest = serde_json::from_str(r#"{"id": 3}"#).unwrap();

            assert!(!request.selected);
        }
    }

    mod reorder_request {
        use super::*;

        #[rstest]
        fn ignores_extra_item_fields() {
            let json = r#"{"items": [
                {"id": 3, "value": "c", "additional": "x", "random": 1},
                {"id": 1, "value": "a", "additional": "y", "random": 2}
            ]}"#;
            let request: ReorderRequest = serde_json::from_str(json).unwrap();

            assert_eq!(
                request.into_ids().collect::<Vec<_>>(),
                vec![ItemId::new(3), ItemId::new(1)]
            );
        }

        #[rstest]
        #[case(r"{}")]
        #[case(r#"{"items": null}"#)]
        #[case(r#"{"items": []}"#)]
        fn absent_null_or_empty_yields_no_ids(#[case] json: &str) {
            let request: ReorderRequest = serde_json::from_str(json).unwrap();

            assert_eq!(request.into_ids().count(), 0);
        }
    }
}
