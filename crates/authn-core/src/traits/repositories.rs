//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{SignInCredentials, User};
use crate::error::DomainError;
use crate::value_objects::PhoneNumber;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find the user whose number and password both match the credentials
    ///
    /// Returns `Ok(None)` when nothing matches, whether the number is unknown
    /// or the password is wrong. `Err` is reserved for storage failures.
    async fn find_by_credentials(&self, credentials: &SignInCredentials)
        -> RepoResult<Option<User>>;

    /// Find user by phone number
    async fn find_by_number(&self, number: PhoneNumber) -> RepoResult<Option<User>>;

    /// Create a new user and return it with its assigned id and defaulted fields
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<User>;
}
