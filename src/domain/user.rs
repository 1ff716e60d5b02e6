//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique user identifier, assigned by the store
    #[schema(example = 1)]
    pub id: i64,
    /// Display name, unique case-insensitively
    #[schema(example = "alice")]
    pub username: String,
    /// Age in years
    #[schema(example = 30)]
    pub age: i32,
    /// Email address
    #[schema(example = "alice@example.com")]
    pub email: String,
}

impl User {
    /// Create a new user record
    pub fn new(id: i64, username: String, age: i32, email: String) -> Self {
        Self {
            id,
            username,
            age,
            email,
        }
    }
}

/// Validated user fields, ready for create or update.
///
/// Produced from a request payload after validation; username and email
/// are already trimmed.
#[derive(Debug, Clone)]
pub struct UserDraft {
    pub username: String,
    pub age: i32,
    pub email: String,
}
