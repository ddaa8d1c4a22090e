//! User entity - represents an account that can sign in

use crate::value_objects::PhoneNumber;

/// Role code assigned to ordinary accounts
pub const DEFAULT_ROLE: i16 = 1;

/// User entity as persisted in the credential store
///
/// Timestamps are kept in their stored form (seconds since the Unix epoch).
/// The password hash never leaves the persistence layer, so it is not part of
/// the entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub number: PhoneNumber,
    pub email: String,
    pub gender: i16,
    /// Date of birth, epoch seconds
    pub dob: i64,
    pub location: String,
    pub pic: Vec<u8>,
    pub bio: Option<String>,
    pub interests: Option<String>,
    /// Epoch seconds; defaulted by the store on insert
    pub last_login: Option<i64>,
    /// Epoch seconds; defaulted by the store on insert
    pub created_at: Option<i64>,
    /// Epoch seconds; defaulted by the store on insert
    pub updated_at: Option<i64>,
    pub is_active: bool,
    pub role: i16,
}

impl User {
    /// Create a new, not yet persisted User with required fields
    ///
    /// The identifier is assigned by the store, so it is `0` until the user is
    /// saved. Timestamps are left unset for the store to default.
    pub fn new(
        name: String,
        number: PhoneNumber,
        email: String,
        gender: i16,
        dob: i64,
        location: String,
    ) -> Self {
        Self {
            id: 0,
            name,
            number,
            email,
            gender,
            dob,
            location,
            pic: Vec::new(),
            bio: None,
            interests: None,
            last_login: None,
            created_at: None,
            updated_at: None,
            is_active: true,
            role: DEFAULT_ROLE,
        }
    }

    /// Check if the account is active
    #[inline]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Check if the user has a profile picture
    #[inline]
    pub fn has_picture(&self) -> bool {
        !self.pic.is_empty()
    }

    /// Check if the user has been saved to the store
    #[inline]
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}
