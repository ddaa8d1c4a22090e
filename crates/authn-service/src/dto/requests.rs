//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError};

use authn_common::check_password_complexity;
use authn_core::entities::SignInCredentials;
use authn_core::value_objects::{PhoneNumber, PhoneNumberError};

// ============================================================================
// Auth Requests
// ============================================================================

/// Sign-in form submitted to `POST /Authentication/signin`
///
/// Fields are read as text so that a missing or non-numeric value is reported
/// against its own field.
#[derive(Clone, Deserialize, Validate)]
pub struct SignInRequest {
    #[serde(rename = "Number", default)]
    #[validate(custom(function = "validate_number"))]
    pub number: String,

    #[serde(rename = "Password", default)]
    #[validate(
        length(min = 8, max = 100, message = "Password must be between 8 and 100 characters."),
        custom(function = "validate_password_complexity")
    )]
    pub password: String,
}

impl std::fmt::Debug for SignInRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignInRequest")
            .field("number", &self.number)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

fn validate_number(number: &str) -> Result<(), ValidationError> {
    PhoneNumber::parse(number).map(|_| ()).map_err(|_| {
        ValidationError::new("range").with_message(Cow::Borrowed(
            "Mobile number must be a valid 10-digit number.",
        ))
    })
}

fn validate_password_complexity(password: &str) -> Result<(), ValidationError> {
    check_password_complexity(password).map_err(|_| {
        ValidationError::new("password_complexity").with_message(Cow::Borrowed(
            "Password must contain at least one uppercase letter, one lowercase letter, \
             one digit, and one special character.",
        ))
    })
}

impl TryFrom<SignInRequest> for SignInCredentials {
    type Error = PhoneNumberError;

    fn try_from(request: SignInRequest) -> Result<Self, Self::Error> {
        Ok(SignInCredentials::new(
            PhoneNumber::parse(&request.number)?,
            request.password,
        ))
    }
}
