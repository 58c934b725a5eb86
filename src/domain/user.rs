use crate::domain::id::UserId;
use serde::{Deserialize, Serialize};

/// A demo user. Users are seed data and never change at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub avatar: String,
}

impl User {
    /// Creates a user whose avatar is generated from the display name
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        let avatar = format!(
            "https://ui-avatars.com/api/?name={}",
            name.split_whitespace().collect::<Vec<_>>().join("+")
        );
        Self {
            id: UserId::new(id),
            name,
            avatar,
        }
    }

    /// Login handle: the lowercased first word of the display name
    pub fn username(&self) -> String {
        self.name
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }
}
