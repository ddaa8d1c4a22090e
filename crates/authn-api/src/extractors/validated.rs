//! Validated form extractor
//!
//! Extracts and validates `application/x-www-form-urlencoded` request bodies
//! using the validator crate.

use axum::{
    async_trait,
    extract::{rejection::FormRejection, FromRequest, Request},
    Form,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::{field_errors, ApiError};

/// Validated form extractor
///
/// Extracts a form body and validates it using the `validator` crate.
/// The inner type must implement both `Deserialize` and `Validate`.
/// Rejects with a 400 before the handler runs.
#[derive(Debug, Clone)]
pub struct ValidatedForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Extract form
        let Form(value) = Form::<T>::from_request(req, state).await.map_err(|e| {
            let message = match &e {
                FormRejection::FailedToDeserializeForm(_)
                | FormRejection::FailedToDeserializeFormBody(_) => e.body_text(),
                FormRejection::InvalidFormContentType(_) => {
                    "Expected an application/x-www-form-urlencoded body".to_string()
                }
                _ => "Invalid form body".to_string(),
            };
            tracing::info!(reason = %message, "Rejected unreadable form");
            ApiError::invalid_form(message)
        })?;

        // Validate
        if let Err(errors) = value.validate() {
            tracing::info!(fields = ?field_errors(&errors), "Rejected invalid form");
            return Err(errors.into());
        }

        Ok(ValidatedForm(value))
    }
}
