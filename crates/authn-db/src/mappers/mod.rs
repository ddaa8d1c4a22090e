//! Entity to model mappers
//!
//! - `From<UserModel> for User`: convert database rows to domain objects
//! - `UserInsert`: prepare entity data for an insert

mod user;

pub use user::UserInsert;
