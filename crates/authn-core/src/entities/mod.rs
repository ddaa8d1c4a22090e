//! Domain entities - core business objects

mod credentials;
mod user;

pub use credentials::SignInCredentials;
pub use user::{User, DEFAULT_ROLE};
