//! Client directory: registration, credential checks, sessions.

use std::collections::HashSet;

use common::OrderId;
use thiserror::Error;
use uuid::Uuid;

use crate::client::{Client, PersonalInfo};

/// Distinct registration rejection codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// A required field is blank, or the age is not positive.
    #[error("All fields are required and the age must be positive")]
    MissingField,

    /// The password is shorter than 8 characters.
    #[error("Password too short (minimum 8 characters)")]
    PasswordTooShort,

    /// The email does not have a `local@domain.tld` shape.
    #[error("Invalid email address")]
    InvalidEmail,

    /// The email is already registered (case-insensitive).
    #[error("Email already registered")]
    DuplicateEmail,
}

/// Errors around session handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Email/password pair did not match a registered client.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The session is not (or no longer) active.
    #[error("No active session")]
    NotLoggedIn,
}

/// An explicit session value handed out by [`ClientDirectory::login`].
///
/// Session-scoped operations take a `&Session` instead of relying on
/// ambient logged-in state; the directory checks the token is still live,
/// so a logged-out session fails distinctly from business-rule errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: Uuid,
    email: String,
}

impl Session {
    /// Email of the client this session belongs to, as registered.
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Registry of registered clients and live sessions.
#[derive(Debug, Clone, Default)]
pub struct ClientDirectory {
    clients: Vec<Client>,
    live_tokens: HashSet<Uuid>,
}

impl ClientDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a directory from persisted clients. Sessions do not
    /// survive a reload.
    pub fn from_parts(clients: Vec<Client>) -> Self {
        Self {
            clients,
            live_tokens: HashSet::new(),
        }
    }

    /// Registers a new client, checking each rule in turn.
    pub fn register(
        &mut self,
        email: &str,
        password: &str,
        info: PersonalInfo,
    ) -> Result<(), RegisterError> {
        if email.trim().is_empty() || password.trim().is_empty() || !info.is_complete() {
            return Err(RegisterError::MissingField);
        }
        if password.chars().count() < 8 {
            return Err(RegisterError::PasswordTooShort);
        }
        if !Self::email_is_well_formed(email) {
            return Err(RegisterError::InvalidEmail);
        }
        if self.client(email).is_some() {
            return Err(RegisterError::DuplicateEmail);
        }
        tracing::info!(email, "client registered");
        self.clients.push(Client::new(email, password, info));
        Ok(())
    }

    // Basic `local@domain.tld` shape: non-empty local part and a dot
    // inside the domain with characters on both sides.
    fn email_is_well_formed(email: &str) -> bool {
        match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && domain
                        .rsplit_once('.')
                        .is_some_and(|(head, tld)| !head.is_empty() && !tld.is_empty())
            }
            None => false,
        }
    }

    /// Checks credentials and opens a session. The email comparison is
    /// case-insensitive; the password must match exactly. A failed
    /// attempt leaves no session behind.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Session, SessionError> {
        let client = self
            .clients
            .iter()
            .find(|c| c.email().eq_ignore_ascii_case(email) && c.password_matches(password))
            .ok_or(SessionError::InvalidCredentials)?;
        let session = Session {
            token: Uuid::new_v4(),
            email: client.email().to_string(),
        };
        tracing::info!(email = session.email.as_str(), "client logged in");
        self.live_tokens.insert(session.token);
        Ok(session)
    }

    /// Closes a session. Fails if it was never opened or already closed.
    pub fn logout(&mut self, session: &Session) -> Result<(), SessionError> {
        if !self.live_tokens.remove(&session.token) {
            return Err(SessionError::NotLoggedIn);
        }
        tracing::info!(email = session.email.as_str(), "client logged out");
        Ok(())
    }

    /// Resolves a session to its client, failing if the session is no
    /// longer live.
    pub fn client_for(&self, session: &Session) -> Result<&Client, SessionError> {
        if !self.live_tokens.contains(&session.token) {
            return Err(SessionError::NotLoggedIn);
        }
        self.clients
            .iter()
            .find(|c| c.email() == session.email)
            .ok_or(SessionError::NotLoggedIn)
    }

    /// Looks up a client by email (case-insensitive).
    pub fn client(&self, email: &str) -> Option<&Client> {
        self.clients
            .iter()
            .find(|c| c.email().eq_ignore_ascii_case(email))
    }

    /// Iterates over all registered clients, in registration order.
    pub fn clients(&self) -> impl Iterator<Item = &Client> {
        self.clients.iter()
    }

    /// Records order ownership on a client.
    pub fn attach_order(&mut self, email: &str, id: OrderId) {
        if let Some(client) = self
            .clients
            .iter_mut()
            .find(|c| c.email().eq_ignore_ascii_case(email))
        {
            client.attach_order(id);
        }
    }

    /// Removes order ownership from a client (cancellation).
    pub fn detach_order(&mut self, email: &str, id: OrderId) {
        if let Some(client) = self
            .clients
            .iter_mut()
            .find(|c| c.email().eq_ignore_ascii_case(email))
        {
            client.detach_order(id);
        }
    }
}
