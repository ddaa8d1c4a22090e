//! Response types and error handling for API endpoints
//!
//! Provides unified error handling and JSON response formatting.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use authn_service::{AuthenticationResponse, ServiceError};
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// Key used in the field map when the form as a whole could not be read
pub const FORM_BODY_FIELD: &str = "body";

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid form body: {0}")]
    InvalidForm(String),

    #[error("Invalid number or password")]
    InvalidCredentials,

    #[error("Sign-in failed: {0}")]
    SignIn(#[source] ServiceError),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidForm(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::SignIn(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidForm(_) => "INVALID_FORM",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::SignIn(e) => e.error_code(),
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }

    /// Create an invalid form error
    pub fn invalid_form(msg: impl Into<String>) -> Self {
        Self::InvalidForm(msg.into())
    }
}

/// Field-level validation messages keyed by form field name
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Convert a Rust field name to the PascalCase name clients submit
fn form_field_name(field: &str) -> String {
    field
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect()
}

/// Flatten validator errors into `{Field: [messages]}`
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map_or_else(|| e.code.to_string(), ToString::to_string)
                })
                .collect();
            (form_field_name(&field), messages)
        })
        .collect()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            Self::Validation(errors) => (status, Json(field_errors(&errors))).into_response(),
            Self::InvalidForm(message) => {
                let body = FieldErrors::from([(FORM_BODY_FIELD.to_string(), vec![message])]);
                (status, Json(body)).into_response()
            }
            Self::InvalidCredentials => (
                status,
                Json(AuthenticationResponse::message(
                    AuthenticationResponse::INVALID_CREDENTIALS,
                )),
            )
                .into_response(),
            Self::SignIn(e) => {
                // Cause is logged, never returned
                error!(error = %e, code = e.error_code(), "Sign-in failed");
                (
                    status,
                    Json(AuthenticationResponse::message(
                        AuthenticationResponse::SIGN_IN_FAILED,
                    )),
                )
                    .into_response()
            }
            Self::Internal(e) => {
                error!(error = ?e, "Server error occurred");
                (
                    status,
                    Json(AuthenticationResponse::message(
                        AuthenticationResponse::SIGN_IN_FAILED,
                    )),
                )
                    .into_response()
            }
        }
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Accepted response (202) with JSON body
pub struct Accepted<T>(pub T);

impl<T: IntoResponse> IntoResponse for Accepted<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::ACCEPTED;
        response
    }
}
