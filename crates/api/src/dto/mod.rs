pub mod converters;
pub mod request;
pub mod response;

pub use request::{ItemReference, ItemsQueryParams, ReorderRequest, SelectRequest};
pub use response::{
    ErrorResponse, HealthResponse, HealthStatusResponse, ItemsResponse, SuccessResponse,
};
