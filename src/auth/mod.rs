//! Authentication capabilities: who is logged in and what they may see.
//!
//! `Authenticator` issues sessions, `SessionStore` keeps the single active
//! one between invocations. Neither is known to the report aggregator.

pub mod access;
pub mod mock;
pub mod store;

use crate::errors::AppResult;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use access::resolve_user_filter;
pub use mock::MockAuthenticator;
pub use store::{FileSessionStore, MemorySessionStore};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Username and password are required")]
    MissingCredentials,

    #[error("Not logged in (run `timetracker login <USERNAME>` first)")]
    NotAuthenticated,

    #[error("Access denied: {0}")]
    AccessDenied(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Employee => "employee",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// For employees this is the `userId` carried by their time records.
    pub id: String,
    pub username: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub token: String,
    pub issued_at: DateTime<Local>,
}

impl Session {
    pub fn has_role(&self, role: Role) -> bool {
        self.user.role == role
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    pub fn is_employee(&self) -> bool {
        self.has_role(Role::Employee)
    }
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

pub trait Authenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError>;
}

/// Persistence for the one active session.
pub trait SessionStore {
    fn load(&self) -> AppResult<Option<Session>>;
    fn save(&self, session: &Session) -> AppResult<()>;
    fn clear(&self) -> AppResult<()>;

    /// The active session, or `NotAuthenticated`.
    fn require(&self) -> AppResult<Session> {
        self.load()?
            .ok_or_else(|| AuthError::NotAuthenticated.into())
    }
}
