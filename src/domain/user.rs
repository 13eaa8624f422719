use serde::{Deserialize, Serialize};

/// Represents a registered user in the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// Payload for creating a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct UserCreate {
    pub username: String,
}
