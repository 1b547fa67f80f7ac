//! Stand-in authenticator: any non-empty password is accepted and the role
//! is guessed from the username. Not a real credential check.

use crate::auth::{AuthError, Authenticator, Credentials, Role, Session, User};
use crate::models::Employee;
use chrono::Local;
use rand::{Rng, distributions::Alphanumeric};
use tracing::info;

pub const DEFAULT_EMAIL_DOMAIN: &str = "magneticplace.com";
pub const ADMIN_USER_ID: &str = "ADMIN";

pub struct MockAuthenticator {
    employees: Vec<Employee>,
    email_domain: String,
}

impl MockAuthenticator {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self {
            employees,
            email_domain: DEFAULT_EMAIL_DOMAIN.to_string(),
        }
    }

    pub fn with_domain(mut self, domain: &str) -> Self {
        self.email_domain = domain.to_string();
        self
    }

    /// Directory entry whose id or email local part equals the username.
    fn match_employee(&self, username: &str) -> Option<&Employee> {
        let wanted = username.to_lowercase();
        self.employees
            .iter()
            .find(|e| e.id.to_lowercase() == wanted || e.email_local_part() == wanted)
    }
}

impl Authenticator for MockAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let username = credentials.username.trim();
        if username.is_empty() || credentials.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let user = if username.to_lowercase().contains("admin") {
            User {
                id: ADMIN_USER_ID.to_string(),
                username: username.to_string(),
                name: "Administrator".to_string(),
                email: format!("{username}@{}", self.email_domain),
                role: Role::Admin,
            }
        } else {
            match self.match_employee(username) {
                Some(e) => User {
                    id: e.id.clone(),
                    username: username.to_string(),
                    name: e.name.clone(),
                    email: e.email.clone(),
                    role: Role::Employee,
                },
                None => User {
                    id: username.to_string(),
                    username: username.to_string(),
                    name: username.to_string(),
                    email: format!("{username}@{}", self.email_domain),
                    role: Role::Employee,
                },
            }
        };

        info!(user = %user.username, role = user.role.as_str(), "mock session issued");

        Ok(Session {
            user,
            token: mock_token(),
            issued_at: Local::now(),
        })
    }
}

fn mock_token() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(11)
        .map(char::from)
        .collect();
    format!("mock-token-{}", suffix.to_lowercase())
}
