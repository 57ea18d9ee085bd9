//! Account records for the session layer.
//!
//! # Invariants
//! - `email` is stored trimmed and lowercased; uniqueness is checked
//!   case-insensitively at registration.
//! - `UserRecord` is the only shape that carries the password; the session
//!   snapshot never does.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// A registered account as stored under the `registeredUsers` key.
///
/// Passwords are kept in plaintext to match the persisted layout; hardening
/// the credential store is an explicit non-goal of this system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    /// Unix epoch milliseconds at registration time.
    #[serde(rename = "createdAt")]
    pub created_at_ms: i64,
}

impl UserRecord {
    /// Builds a new account record, normalizing name and email.
    pub fn new(name: &str, email: &str, password: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            password: password.to_string(),
            created_at_ms: now_epoch_ms(),
        }
    }

    /// Strips the credential fields down to the session snapshot.
    pub fn to_session(&self) -> SessionUser {
        SessionUser {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// The logged-in user snapshot stored under the `currentUser` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
