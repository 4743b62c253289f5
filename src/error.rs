//! Error types for company store operations

use thiserror::Error;

/// Errors that can occur while talking to the company table
///
/// The clause builder never produces one of these; invalid sort and paging
/// input is filtered out instead.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("No rows were affected: {0}")]
    NoRowsAffected(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),
}

impl StoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn no_rows_affected(msg: impl Into<String>) -> Self {
        Self::NoRowsAffected(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StoreError::validation("name is empty").to_string(),
            "Validation error: name is empty"
        );
        assert_eq!(
            StoreError::not_found("company 7").to_string(),
            "Not found: company 7"
        );
        assert_eq!(
            StoreError::no_rows_affected("update company 7").to_string(),
            "No rows were affected: update company 7"
        );
    }

    #[test]
    fn test_from_sqlx_error() {
        let err: StoreError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, StoreError::Sql(sqlx::Error::RowNotFound)));
    }
}
