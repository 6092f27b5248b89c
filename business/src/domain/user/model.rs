use serde::{Deserialize, Serialize};

use crate::domain::shared::value_objects::UserId;

/// Role assignment of an account. Transitions are unconditional in either
/// direction; no other state exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    User,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::User => write!(f, "user"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// Account record as held in the document store. Created externally by the
/// identity provider; only `role` is ever mutated from here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub role: Role,
}

impl User {
    /// Constructor for data already persisted in the repository.
    pub fn from_repository(id: UserId, email: String, role: Role) -> Self {
        Self { id, email, role }
    }
}
