//! HTTP route handlers.

pub mod health;
pub mod metrics;
pub mod order_items;
pub mod products;

use std::str::FromStr;

use axum::http::Uri;
use domain::ValidationError;

use crate::error::ApiError;

/// Parses a path segment into a typed identifier.
fn parse_id<T: FromStr>(field: &'static str, value: &str) -> Result<T, ValidationError> {
    value.parse().map_err(|_| ValidationError::InvalidId {
        field,
        value: value.to_string(),
    })
}

/// Fallback for requests that match no route.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
