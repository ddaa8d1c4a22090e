//! # authn-core
//!
//! Domain layer containing the user entity, sign-in credentials, value objects,
//! and the repository trait the persistence layer implements.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{SignInCredentials, User, DEFAULT_ROLE};
pub use error::DomainError;
pub use traits::{RepoResult, UserRepository};
pub use value_objects::{PhoneNumber, PhoneNumberError};
