//! Sign-in credentials - the number/password pair submitted by a client

use std::fmt;

use crate::value_objects::PhoneNumber;

/// Credentials for a single sign-in attempt
///
/// Only lives for the duration of one request. `Debug` never prints the password.
#[derive(Clone, PartialEq, Eq)]
pub struct SignInCredentials {
    pub number: PhoneNumber,
    pub password: String,
}

impl SignInCredentials {
    pub fn new(number: PhoneNumber, password: impl Into<String>) -> Self {
        Self {
            number,
            password: password.into(),
        }
    }
}

impl fmt::Debug for SignInCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInCredentials")
            .field("number", &self.number)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
