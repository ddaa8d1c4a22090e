//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Authentication Responses
// ============================================================================

/// Public profile of a signed-in user
///
/// Never carries the password or its hash. Wire names are PascalCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserProfileResponse {
    pub id: i64,
    pub name: String,
    pub number: i64,
    pub mail: String,
    pub gender: i16,
    pub dob: DateTime<Utc>,
    pub location: String,
    /// Pictures are not served, so this is always `null`
    pub profile_picture_url: Option<String>,
    pub bio: Option<String>,
    pub interests: Option<String>,
    pub last_login: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Envelope returned by the sign-in endpoint
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticationResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfileResponse>,
}

impl AuthenticationResponse {
    pub const SUCCESS: &'static str = "Login successful";
    pub const INVALID_CREDENTIALS: &'static str = "Invalid number or password";
    pub const SIGN_IN_FAILED: &'static str = "An error occurred during sign-in";

    /// Successful sign-in carrying the profile
    pub fn success(user: UserProfileResponse) -> Self {
        Self {
            message: Self::SUCCESS.to_string(),
            user: Some(user),
        }
    }

    /// Message-only response
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            user: None,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
