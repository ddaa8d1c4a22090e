//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};
use serde::Deserialize;

use authn_core::entities::User;
use authn_core::value_objects::PhoneNumber;

/// Number of the seeded account
pub const SEEDED_NUMBER: i64 = 8_428_558_275;

/// Password of the seeded account
pub const SEEDED_PASSWORD: &str = "8428Ss827$";

/// Epoch seconds used for every seeded timestamp
pub const SEEDED_EPOCH: i64 = 1_762_620_187;

/// A valid number that is never seeded
pub const UNKNOWN_NUMBER: i64 = 8_428_558_276;

/// A valid password that does not belong to the seeded account
pub const WRONG_PASSWORD: &str = "8428S$827s";

/// Counter for unique test data
static COUNTER: AtomicI64 = AtomicI64::new(0);

/// The "SRNP" account every sign-in scenario is written against
pub fn seeded_user() -> User {
    let mut user = User::new(
        "SRNP".to_string(),
        PhoneNumber::from_stored(SEEDED_NUMBER),
        "naren000000000@gmail.com".to_string(),
        1,
        SEEDED_EPOCH,
        "Asia".to_string(),
    );
    user.pic = vec![0];
    user.bio = Some(String::new());
    user.interests = Some(String::new());
    user.last_login = Some(SEEDED_EPOCH);
    user.created_at = Some(SEEDED_EPOCH);
    user.updated_at = Some(SEEDED_EPOCH);
    user
}

/// A user with a number and email no other test uses
pub fn unique_user() -> User {
    let nanos = i64::from(Utc::now().timestamp_subsec_nanos() % 1_000_000);
    let suffix = COUNTER.fetch_add(1, Ordering::SeqCst) % 1000;
    let number = 3_000_000_000 + nanos * 1000 + suffix;

    let mut user = seeded_user();
    user.number = PhoneNumber::from_stored(number);
    user.email = format!("user{number}@example.com");
    user.name = format!("user{number}");
    user
}

/// Sign-in form as the client sends it
#[derive(Debug, Clone)]
pub struct SignInForm {
    pub number: String,
    pub password: String,
}

impl SignInForm {
    pub fn new(number: impl ToString, password: impl Into<String>) -> Self {
        Self {
            number: number.to_string(),
            password: password.into(),
        }
    }

    /// Credentials of the seeded account
    pub fn seeded() -> Self {
        Self::new(SEEDED_NUMBER, SEEDED_PASSWORD)
    }

    /// Form fields in wire order
    pub fn pairs(&self) -> [(&'static str, String); 2] {
        [
            ("Number", self.number.clone()),
            ("Password", self.password.clone()),
        ]
    }
}

/// Sign-in response envelope
#[derive(Debug, Deserialize)]
pub struct AuthenticationBody {
    pub message: String,
    pub user: Option<ProfileBody>,
}

/// Public user profile
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProfileBody {
    pub id: i64,
    pub name: String,
    pub number: i64,
    pub mail: String,
    pub gender: i16,
    pub dob: DateTime<Utc>,
    pub location: String,
    pub profile_picture_url: Option<String>,
    pub bio: Option<String>,
    pub interests: Option<String>,
    pub last_login: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Health response
#[derive(Debug, Deserialize)]
pub struct HealthBody {
    pub status: String,
    pub version: String,
}

/// Readiness response
#[derive(Debug, Deserialize)]
pub struct ReadinessBody {
    pub status: String,
    pub checks: ReadinessChecks,
}

/// Readiness checks
#[derive(Debug, Deserialize)]
pub struct ReadinessChecks {
    pub database: String,
}
