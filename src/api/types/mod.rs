//! API request/response types

pub mod error;
pub mod json;
pub mod recommendation;

pub use error::{status_for, ApiError, ApiErrorResponse};
pub use json::Json;
pub use recommendation::{BoundsResponse, OptionsResponse, RecommendationResponse};
