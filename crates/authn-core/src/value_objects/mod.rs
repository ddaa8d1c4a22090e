//! Value objects - immutable types that represent domain concepts

mod phone_number;

pub use phone_number::{PhoneNumber, PhoneNumberError};
