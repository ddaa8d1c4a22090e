//! Authentication handlers
//!
//! Sign-in endpoint taking a phone number and password as a form.

use axum::{extract::State, Json};
use authn_core::entities::SignInCredentials;
use authn_service::{AuthService, AuthenticationResponse, SignInRequest};
use tracing::{info, warn};

use crate::extractors::ValidatedForm;
use crate::response::{Accepted, ApiError, ApiResult};
use crate::state::AppState;

/// Sign in with phone number and password
///
/// POST /Authentication/signin
///
/// - 202 with the user profile when the credentials match
/// - 400 with field messages when the form is invalid
/// - 401 when nothing matches, without saying which part was wrong
/// - 500 when the lookup could not be completed
pub async fn sign_in(
    State(state): State<AppState>,
    ValidatedForm(request): ValidatedForm<SignInRequest>,
) -> ApiResult<Accepted<Json<AuthenticationResponse>>> {
    // Number was checked by the extractor
    let credentials = SignInCredentials::try_from(request).map_err(ApiError::internal)?;
    let number = credentials.number.into_inner();

    let service = AuthService::new(state.service_context());
    match service.login(credentials).await {
        Ok(Some(profile)) => {
            info!(number, user_id = profile.id, "Sign-in succeeded");
            Ok(Accepted(Json(AuthenticationResponse::success(profile))))
        }
        Ok(None) => {
            warn!(number, "Sign-in rejected: invalid number or password");
            Err(ApiError::InvalidCredentials)
        }
        Err(e) => Err(ApiError::SignIn(e)),
    }
}
