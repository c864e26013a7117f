//! Teacher account model.

use serde::{Deserialize, Serialize};

use crate::models::Document;

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Teacher,
    Admin,
}

/// Teacher account stored in the teachers collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Login name (also used as document ID)
    #[serde(rename = "_id")]
    pub username: String,
    /// Name shown in the UI
    pub display_name: String,
    /// Argon2 PHC hash string, never plaintext
    pub password: String,
    pub role: Role,
}

impl Document for Teacher {
    fn id(&self) -> &str {
        &self.username
    }
}
