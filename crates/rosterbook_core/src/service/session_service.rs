//! Account registration and session state.
//!
//! # Responsibility
//! - Manage the `registeredUsers` and `currentUser` keys.
//! - Give the collaborator typed auth errors it can render.
//!
//! # Invariants
//! - Email uniqueness is checked case-insensitively.
//! - A corrupt session value is cleared and treated as logged out.
//! - The session snapshot never carries the password.

use crate::model::user::{SessionUser, UserRecord};
use crate::repo::kv::{KeyValueStore, RepoError, RepoResult};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Key holding the serialized array of registered accounts.
pub const KEY_REGISTERED_USERS: &str = "registeredUsers";
/// Key holding the serialized logged-in user snapshot.
pub const KEY_CURRENT_USER: &str = "currentUser";

pub type AuthResult<T> = Result<T, AuthError>;

/// Error for registration and login flows.
#[derive(Debug)]
pub enum AuthError {
    /// An account with this email already exists.
    EmailTaken(String),
    /// No registered account matches the email/password pair.
    InvalidCredentials,
    Repo(RepoError),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmailTaken(email) => {
                write!(f, "an account with email `{email}` already exists")
            }
            Self::InvalidCredentials => write!(f, "invalid email or password"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmailTaken(_) | Self::InvalidCredentials => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for AuthError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case service for accounts and the active session.
pub struct SessionService<K: KeyValueStore> {
    kv: K,
}

impl<K: KeyValueStore> SessionService<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    /// Registers a new account and logs it in.
    ///
    /// Passwords are stored as given; hardening the credential store is an
    /// explicit non-goal. Email shape validation is the form edge's concern.
    pub fn register(&self, name: &str, email: &str, password: &str) -> AuthResult<SessionUser> {
        let mut users = self.registered_users()?;
        let normalized_email = email.trim().to_lowercase();

        if users
            .iter()
            .any(|user| user.email.eq_ignore_ascii_case(&normalized_email))
        {
            return Err(AuthError::EmailTaken(normalized_email));
        }

        let user = UserRecord::new(name, email, password);
        let session = user.to_session();
        users.push(user);
        self.save_registered_users(&users)?;
        self.save_session(&session)?;

        info!("event=auth_register module=service status=ok");
        Ok(session)
    }

    /// Logs in with an email/password pair.
    pub fn login(&self, email: &str, password: &str) -> AuthResult<SessionUser> {
        let users = self.registered_users()?;
        let normalized_email = email.trim().to_lowercase();

        let found = users
            .iter()
            .find(|user| user.email == normalized_email && user.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        let session = found.to_session();
        self.save_session(&session)?;

        info!("event=auth_login module=service status=ok");
        Ok(session)
    }

    /// Ends the active session, if any.
    pub fn logout(&self) -> RepoResult<()> {
        self.kv.remove(KEY_CURRENT_USER)?;
        info!("event=auth_logout module=service status=ok");
        Ok(())
    }

    /// Restores the active session. A corrupt stored value is cleared and
    /// reported as logged out.
    pub fn current_user(&self) -> RepoResult<Option<SessionUser>> {
        let Some(raw) = self.kv.get(KEY_CURRENT_USER)? else {
            return Ok(None);
        };

        match serde_json::from_str::<SessionUser>(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(err) => {
                warn!(
                    "event=session_load module=service status=fallback key={KEY_CURRENT_USER} error={err}"
                );
                self.kv.remove(KEY_CURRENT_USER)?;
                Ok(None)
            }
        }
    }

    /// All registered accounts; a corrupt stored value degrades to none.
    pub fn registered_users(&self) -> RepoResult<Vec<UserRecord>> {
        let Some(raw) = self.kv.get(KEY_REGISTERED_USERS)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<UserRecord>>(&raw) {
            Ok(users) => Ok(users),
            Err(err) => {
                warn!(
                    "event=users_load module=service status=fallback key={KEY_REGISTERED_USERS} error={err}"
                );
                Ok(Vec::new())
            }
        }
    }

    fn save_registered_users(&self, users: &[UserRecord]) -> RepoResult<()> {
        let raw = serde_json::to_string(users).map_err(RepoError::Serialize)?;
        self.kv.set(KEY_REGISTERED_USERS, &raw)
    }

    fn save_session(&self, session: &SessionUser) -> RepoResult<()> {
        let raw = serde_json::to_string(session).map_err(RepoError::Serialize)?;
        self.kv.set(KEY_CURRENT_USER, &raw)
    }
}
