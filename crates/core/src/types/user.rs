//! Session-local user identity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A session-local user.
///
/// There is no authentication server; "login" installs one of these in the
/// store and "logout" removes it (along with the cart). No identity is ever
/// verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Locally generated identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address, unverified.
    pub email: String,
    /// Optional phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl User {
    /// Create a new session-local user with a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            phone,
        }
    }
}
