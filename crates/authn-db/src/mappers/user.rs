//! User entity <-> model mapper

use authn_core::entities::User;
use authn_core::value_objects::PhoneNumber;

use crate::models::UserModel;

/// Convert UserModel to User entity, dropping the password hash
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            name: model.name,
            number: PhoneNumber::from_stored(model.number),
            email: model.mail,
            gender: model.gender,
            dob: model.dob,
            location: model.location,
            pic: model.pic,
            bio: model.bio,
            interests: model.interests,
            last_login: model.last_login,
            created_at: model.created_at,
            updated_at: model.updated_at,
            is_active: model.is_active,
            role: model.role,
        }
    }
}

/// Borrowed column values for inserting a User
pub struct UserInsert<'a> {
    pub name: &'a str,
    pub number: i64,
    pub mail: &'a str,
    pub password_hash: &'a str,
    pub gender: i16,
    pub dob: i64,
    pub location: &'a str,
    pub pic: &'a [u8],
    pub bio: Option<&'a str>,
    pub interests: Option<&'a str>,
    pub last_login: Option<i64>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
    pub is_active: bool,
    pub role: i16,
}

impl<'a> UserInsert<'a> {
    pub fn new(user: &'a User, password_hash: &'a str) -> Self {
        Self {
            name: &user.name,
            number: user.number.into_inner(),
            mail: &user.email,
            password_hash,
            gender: user.gender,
            dob: user.dob,
            location: &user.location,
            pic: &user.pic,
            bio: user.bio.as_deref(),
            interests: user.interests.as_deref(),
            last_login: user.last_login,
            created_at: user.created_at,
            updated_at: user.updated_at,
            is_active: user.is_active,
            role: user.role,
        }
    }
}
