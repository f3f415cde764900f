use std::fmt;

use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::Deserialize;

use crate::errors::internal::InternalError;
use crate::types::internal::BoundParseError;

/// Standardized error response for catalog endpoints.
///
/// Also deserializable so the browse client can read the body of a failed
/// response.
#[derive(Object, Debug, Deserialize)]
pub struct CatalogErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Catalog error types
#[derive(ApiResponse, Debug)]
pub enum CatalogError {
    /// A provided attribute bound is not a non-negative integer
    #[oai(status = 400)]
    InvalidBound(Json<CatalogErrorResponse>),

    /// The backing store could not be reached or the query failed
    #[oai(status = 500)]
    StoreUnavailable(Json<CatalogErrorResponse>),
}

impl CatalogError {
    /// Create an InvalidBound error naming the offending parameter
    pub fn invalid_bound(err: &BoundParseError) -> Self {
        CatalogError::InvalidBound(Json(CatalogErrorResponse {
            error: "invalid_bound".to_string(),
            message: format!(
                "Query parameter {} must be a non-negative integer, got {:?}",
                err.attribute, err.raw
            ),
            status_code: 400,
        }))
    }

    /// Convert InternalError to CatalogError
    ///
    /// This is the explicit conversion point from internal errors to API
    /// errors. Internal error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Database(_) => {
                tracing::error!("Store query failed: {}", err);
            }
            InternalError::Parse { value_type, .. } => {
                tracing::error!("Corrupt record field {}: {}", value_type, err);
            }
        }
        Self::store_unavailable()
    }

    fn store_unavailable() -> Self {
        CatalogError::StoreUnavailable(Json(CatalogErrorResponse {
            error: "store_unavailable".to_string(),
            message: "Error fetching items".to_string(),
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            CatalogError::InvalidBound(json) => json.0.message.clone(),
            CatalogError::StoreUnavailable(json) => json.0.message.clone(),
        }
    }
}

impl From<BoundParseError> for CatalogError {
    fn from(err: BoundParseError) -> Self {
        CatalogError::invalid_bound(&err)
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
