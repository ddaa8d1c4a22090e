//! Authentication service
//!
//! Decides whether a set of sign-in credentials matches a stored user.

use tracing::{info, instrument};

use authn_core::entities::SignInCredentials;

use crate::dto::UserProfileResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Look up the user matching `credentials` and build their profile
    ///
    /// `Ok(None)` means nothing matched: the number is unknown or the
    /// password is wrong, and callers must not tell the two apart. Storage
    /// and mapping failures are returned as errors.
    #[instrument(skip(self, credentials), fields(number = %credentials.number))]
    pub async fn login(
        &self,
        credentials: SignInCredentials,
    ) -> ServiceResult<Option<UserProfileResponse>> {
        let Some(user) = self.ctx.user_repo().find_by_credentials(&credentials).await? else {
            info!("No user matches the supplied credentials");
            return Ok(None);
        };

        let profile = UserProfileResponse::try_from(&user)?;

        info!(user_id = user.id, "User signed in");
        Ok(Some(profile))
    }
}
