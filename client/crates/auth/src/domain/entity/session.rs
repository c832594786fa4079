//! Session Entity
//!
//! The authenticated context handed to every network-calling component.
//! Acquired at sign-in, dropped at sign-out, held only in memory.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{access_token::AccessToken, email::Email};
use crate::error::{AuthError, AuthResult};
use platform::secret::SecretString;

/// Authenticated session
#[derive(Debug)]
pub struct Session {
    /// Who signed in
    pub email: Email,
    token: AccessToken,
    /// When the token was issued to us
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn new(email: Email, token: AccessToken) -> Self {
        Self {
            email,
            token,
            started_at: Utc::now(),
        }
    }

    /// Bearer secret for the `Authorization` header
    pub fn bearer(&self) -> &SecretString {
        self.token.secret()
    }

    pub fn token(&self) -> &AccessToken {
        &self.token
    }
}

/// Session lifecycle
#[derive(Debug, Default)]
pub enum SessionState {
    #[default]
    SignedOut,
    SignedIn(Session),
}

impl SessionState {
    /// Replace any current session with a new one
    pub fn sign_in(&mut self, session: Session) {
        *self = SessionState::SignedIn(session);
    }

    /// Drop the current session, returning it if there was one
    ///
    /// The token is zeroized when the returned value goes out of scope.
    pub fn sign_out(&mut self) -> Option<Session> {
        match std::mem::take(self) {
            SessionState::SignedIn(session) => Some(session),
            SessionState::SignedOut => None,
        }
    }

    pub fn current(&self) -> Option<&Session> {
        match self {
            SessionState::SignedIn(session) => Some(session),
            SessionState::SignedOut => None,
        }
    }

    /// Current session, or `NotSignedIn`
    pub fn require(&self) -> AuthResult<&Session> {
        self.current().ok_or(AuthError::NotSignedIn)
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, SessionState::SignedIn(_))
    }
}
