//! API request/response types

pub mod coach;
pub mod documents;
pub mod error;
pub mod json;

pub use coach::{CoachingRequest, CoachingResponse};
pub use documents::{DocumentStatusResponse, RefreshResponse, SearchQueryParams};
pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
