//! Route handlers

pub mod authentication;
pub mod health;
