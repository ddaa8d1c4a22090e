//! Error handling utilities for repositories

use authn_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError, logging it at the repository boundary
pub fn map_db_error(e: SqlxError) -> DomainError {
    tracing::error!(error = %e, "Database query failed");
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}
