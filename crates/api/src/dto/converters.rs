use item_browser_domain::QueryResult;

use super::response::ItemsResponse;

impl From<QueryResult> for ItemsResponse {
    fn from(result: QueryResult) -> Self {
        Self {
            items: result.items,
            total: result.total,
            selected_items: result.selected_ids,
            has_more: result.has_more,
        }
    }
}
