//! Phone number - the 10-digit mobile number a user signs in with
//!
//! Numbers are stored and compared as integers. The valid range is
//! `1000000000..=9999999999`, i.e. every 10-digit number without a leading zero.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated 10-digit phone number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhoneNumber(i64);

impl PhoneNumber {
    /// Smallest accepted number
    pub const MIN: i64 = 1_000_000_000;

    /// Largest accepted number
    pub const MAX: i64 = 9_999_999_999;

    /// Create a phone number, rejecting values outside the 10-digit range
    pub fn new(value: i64) -> Result<Self, PhoneNumberError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PhoneNumberError::OutOfRange(value))
        }
    }

    /// Wrap a value read back from storage without re-validating it
    #[inline]
    pub const fn from_stored(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, PhoneNumberError> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|_| PhoneNumberError::InvalidFormat)?;
        Self::new(value)
    }
}

/// Error when building a PhoneNumber
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PhoneNumberError {
    #[error("phone number is not numeric")]
    InvalidFormat,

    #[error("phone number {0} is not a 10-digit number")]
    OutOfRange(i64),
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for PhoneNumber {
    type Error = PhoneNumberError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PhoneNumber> for i64 {
    fn from(number: PhoneNumber) -> Self {
        number.0
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = PhoneNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PhoneNumber::parse(s)
    }
}

// Serialized as a plain JSON number
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        PhoneNumber::new(value).map_err(serde::de::Error::custom)
    }
}
