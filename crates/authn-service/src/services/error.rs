//! Service layer error types
//!
//! A sign-in either completes or fails for one of two reasons: the store
//! could not answer, or the stored record could not be turned into a profile.

use authn_core::DomainError;
use std::fmt;

use crate::dto::MappingError;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain or storage failure
    Domain(DomainError),

    /// Stored record could not be turned into a profile
    Mapping(MappingError),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::Mapping(e) => write!(f, "Profile mapping failed: {e}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::Mapping(e) => Some(e),
        }
    }
}

impl ServiceError {
    /// Get the error code recorded alongside the failure
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::Mapping(_) => "MAPPING_ERROR",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<MappingError> for ServiceError {
    fn from(err: MappingError) -> Self {
        Self::Mapping(err)
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
