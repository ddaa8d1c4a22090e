//! Password utilities

mod password;

pub use password::{
    check_password_complexity, hash_password, verify_stored_password, warm_up_dummy_hash,
    PASSWORD_SPECIAL_CHARS,
};
