//! Demo authentication.
//!
//! There is no credential store: any seeded user can sign in with their
//! lowercased first name and the shared demo password.

use crate::domain::User;
use crate::error::{QcError, Result};

/// Password accepted for every demo account
pub const DEMO_PASSWORD: &str = "password123";

/// Resolves a username/password pair to one of the given users.
///
/// Usernames are trimmed and compared case-insensitively.
pub fn authenticate<'a>(users: &'a [User], username: &str, password: &str) -> Result<&'a User> {
    let username = username.trim().to_lowercase();
    if username.is_empty() || password != DEMO_PASSWORD {
        return Err(QcError::InvalidCredentials);
    }

    users
        .iter()
        .find(|user| user.username() == username)
        .ok_or(QcError::InvalidCredentials)
}
