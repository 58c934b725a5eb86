use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Length of generated ids, matching the short ids the demo data uses.
const GENERATED_ID_LEN: usize = 9;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the string representation
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

entity_id!(
    /// Identifier of a demo user (e.g., u1)
    UserId
);
entity_id!(
    /// Identifier of a ticket (e.g., t1, or a generated `k3f9a0b2c`)
    TicketId
);
entity_id!(
    /// Identifier of a sprint
    SprintId
);
entity_id!(
    /// Identifier of an alert
    AlertId
);

/// Draws a short random id that `is_taken` does not reject.
///
/// Ids are lowercase alphanumerics taken from a v4 UUID, re-drawn on
/// collision so the result is unique among the ids the caller knows about.
pub(crate) fn generate_id(is_taken: impl Fn(&str) -> bool) -> String {
    loop {
        let candidate: String = Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(GENERATED_ID_LEN)
            .collect();
        if !is_taken(&candidate) {
            return candidate;
        }
    }
}
