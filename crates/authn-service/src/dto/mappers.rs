//! Entity to DTO mappers
//!
//! Converts stored users into the public profile. Stored timestamps are epoch
//! seconds and are converted to UTC instants without rounding.

use chrono::{DateTime, Utc};

use authn_core::entities::User;

use super::responses::UserProfileResponse;

/// Failure to build a profile from a stored user
///
/// Both cases mean the stored record is corrupt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    #[error("stored user has no {0} timestamp")]
    MissingTimestamp(&'static str),

    #[error("{field} value {value} is not a representable timestamp")]
    TimestampOutOfRange { field: &'static str, value: i64 },
}

/// Convert epoch seconds to a UTC instant
pub fn epoch_to_utc(field: &'static str, seconds: i64) -> Result<DateTime<Utc>, MappingError> {
    DateTime::<Utc>::from_timestamp(seconds, 0)
        .ok_or(MappingError::TimestampOutOfRange { field, value: seconds })
}

fn required_epoch(field: &'static str, value: Option<i64>) -> Result<DateTime<Utc>, MappingError> {
    let seconds = value.ok_or(MappingError::MissingTimestamp(field))?;
    epoch_to_utc(field, seconds)
}

// ============================================================================
// User Mappers
// ============================================================================

impl TryFrom<&User> for UserProfileResponse {
    type Error = MappingError;

    fn try_from(user: &User) -> Result<Self, Self::Error> {
        Ok(Self {
            id: user.id,
            name: user.name.clone(),
            number: user.number.into_inner(),
            mail: user.email.clone(),
            gender: user.gender,
            dob: epoch_to_utc("dob", user.dob)?,
            location: user.location.clone(),
            profile_picture_url: None,
            bio: user.bio.clone(),
            interests: user.interests.clone(),
            last_login: required_epoch("last_login", user.last_login)?,
            created_at: required_epoch("created_at", user.created_at)?,
            is_active: user.is_active,
        })
    }
}

impl TryFrom<User> for UserProfileResponse {
    type Error = MappingError;

    fn try_from(user: User) -> Result<Self, Self::Error> {
        Self::try_from(&user)
    }
}
