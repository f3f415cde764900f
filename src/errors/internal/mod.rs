use thiserror::Error;

pub mod database;

pub use database::DatabaseError;

/// Internal error type for store operations
///
/// Not exposed via API - endpoints must convert to CatalogError before
/// responding.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Parse error: failed to parse {value_type}: {message}")]
    Parse {
        value_type: String,
        message: String,
    },
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    pub fn parse(value_type: &str, message: impl std::fmt::Display) -> InternalError {
        InternalError::Parse {
            value_type: value_type.to_string(),
            message: message.to_string(),
        }
    }
}
