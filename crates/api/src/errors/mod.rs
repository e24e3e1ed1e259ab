//! API error handling and response conversion.
//!
//! - [`ApiError`]: the error type returned by every handler
//! - [`conversion`]: conversions from domain errors and extractor rejections

pub mod api_error;
pub mod conversion;

pub use api_error::ApiError;
