//! Response DTOs for API endpoints.

use serde::{Deserialize, Serialize};

use item_browser_domain::{Item, ItemId};

// =============================================================================
// Item Responses
// =============================================================================

/// Response for `GET /api/items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemsResponse {
    /// The requested page.
    pub items: Vec<Item>,

    /// Number of items matching the search, before pagination.
    pub total: u64,

    /// Every selected id, ascending, regardless of search and page.
    pub selected_items: Vec<ItemId>,

    pub has_more: bool,
}

/// Acknowledgement for selection and reorder writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    #[must_use]
    pub const fn ok() -> Self {
        Self { success: true }
    }
}

// =============================================================================
// Health Responses
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatusResponse,

    pub version: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatusResponse {
    Healthy,
}

// =============================================================================
// Error Responses
// =============================================================================

/// Error body returned with every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,

    /// Human-readable error message.
    pub message: String,

    /// The request field that failed validation, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
        }
    }

    #[must_use]
    pub fn with_field(self, field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            ..self
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
