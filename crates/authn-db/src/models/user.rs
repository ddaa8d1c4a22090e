//! User database model

use sqlx::FromRow;

/// Database model for the users table
///
/// Timestamps are stored as epoch seconds (`BIGINT`).
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub name: String,
    pub number: i64,
    pub mail: String,
    pub password_hash: String,
    pub gender: i16,
    pub dob: i64,
    pub location: String,
    pub pic: Vec<u8>,
    pub bio: Option<String>,
    pub interests: Option<String>,
    pub last_login: Option<i64>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
    pub is_active: bool,
    pub role: i16,
}
