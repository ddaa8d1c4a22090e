//! Integration test utilities for the sign-in API
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API, with either PostgreSQL or an in-memory user store behind it.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
pub use memory::InMemoryUserRepository;
