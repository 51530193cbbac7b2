//! Panel user data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A panel user account.
///
/// Only identity data; credentials are never retained after validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl PanelUser {
    /// Creates a user with a fresh id, stamped now.
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username: username.into(),
            email: email.into(),
            created_at: Utc::now(),
        }
    }
}
