//! Error conversion implementations.
//!
//! Maps domain validation failures and axum extractor rejections onto
//! [`ApiError`] so handlers can use `?` throughout.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use item_browser_domain::QueryError;

use super::api_error::ApiError;

// =============================================================================
// From<QueryError> for ApiError
// =============================================================================

impl From<QueryError> for ApiError {
    fn from(error: QueryError) -> Self {
        Self::validation_field(error.field(), error.to_string())
    }
}

// =============================================================================
// Extractor Rejections
// =============================================================================

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::malformed(rejection.body_text())
    }
}

// =============================================================================
// Tests
// =============================================================================
