//! Password hashing, verification, and policy
//!
//! Uses Argon2id for secure password hashing (OWASP recommended).

use std::sync::LazyLock;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Special characters a password must draw at least one of
pub const PASSWORD_SPECIAL_CHARS: &str = "@$!%*?&#";

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a hash
///
/// `Ok(false)` means the password does not match. `Err` means the stored hash
/// itself is unreadable.
///
/// # Errors
/// Returns an error if the hash is invalid
fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Password checked when no account matches the submitted number
const DUMMY_PASSWORD: &str = "Dummy-Passw0rd!";

static DUMMY_HASH: LazyLock<Option<String>> = LazyLock::new(|| hash_password(DUMMY_PASSWORD).ok());

/// Compute the fixed hash used for missing accounts ahead of the first lookup
pub fn warm_up_dummy_hash() {
    LazyLock::force(&DUMMY_HASH);
}

/// Verify a password against a stored hash, or against a fixed hash when
/// there is no stored account
///
/// Exactly one Argon2 verification runs either way. A missing account always
/// yields `Ok(false)`.
///
/// # Errors
/// Returns an error if the stored hash is invalid
pub fn verify_stored_password(password: &str, stored_hash: Option<&str>) -> Result<bool, AppError> {
    match stored_hash {
        Some(hash) => verify_password(password, hash),
        None => {
            let hash = DUMMY_HASH.as_deref().ok_or_else(|| {
                AppError::Internal(anyhow::anyhow!("Dummy password hash unavailable"))
            })?;
            verify_password(password, hash)?;
            Ok(false)
        }
    }
}

fn is_special(c: char) -> bool {
    PASSWORD_SPECIAL_CHARS.contains(c)
}

/// Check the character rules of the password policy
///
/// - Contains at least one uppercase letter
/// - Contains at least one lowercase letter
/// - Contains at least one digit
/// - Contains at least one of `@$!%*?&#`
/// - Uses only ASCII letters, digits, and those special characters
///
/// # Errors
/// Returns a validation error describing the first rule that fails
pub fn check_password_complexity(password: &str) -> Result<(), AppError> {
    if let Some(c) = password
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || is_special(*c)))
    {
        return Err(AppError::Validation(format!(
            "Password contains a disallowed character: {c:?}"
        )));
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(AppError::Validation(
            "Password must contain at least one uppercase letter".to_string(),
        ));
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(AppError::Validation(
            "Password must contain at least one lowercase letter".to_string(),
        ));
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(AppError::Validation(
            "Password must contain at least one digit".to_string(),
        ));
    }

    if !password.chars().any(is_special) {
        return Err(AppError::Validation(format!(
            "Password must contain at least one special character ({PASSWORD_SPECIAL_CHARS})"
        )));
    }

    Ok(())
}
