//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::client::ClientError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
///
/// Display strings are the messages shown to the user.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Server rejected the email/password pair
    #[error("Invalid email or password.")]
    InvalidCredentials,

    /// Input failed a local check before anything was sent
    #[error("{0}")]
    Validation(String),

    /// An operation needed a session but none is active
    #[error("Not signed in.")]
    NotSignedIn,

    /// Server no longer accepts the bearer token
    #[error("Session expired. Please log in again.")]
    SessionExpired,

    /// Server refused the password change
    #[error("{0}")]
    PasswordChangeRejected(String),

    /// No response from the server
    #[error("Unable to connect. Please try again.")]
    Unreachable(#[source] ClientError),

    /// Anything else the API did that we did not expect
    #[error("Unexpected server response: {0}")]
    Api(#[from] ClientError),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials
            | AuthError::NotSignedIn
            | AuthError::SessionExpired => ErrorKind::Unauthorized,
            AuthError::Validation(_) | AuthError::PasswordChangeRejected(_) => {
                ErrorKind::InvalidInput
            }
            AuthError::Unreachable(e) | AuthError::Api(e) => e.kind(),
        }
    }

    /// Route a transport-level failure to `Unreachable`, everything else to `Api`
    pub(crate) fn from_client(err: ClientError) -> Self {
        if err.kind().is_transport() {
            AuthError::Unreachable(err)
        } else {
            AuthError::Api(err)
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Unreachable(e) => {
                tracing::error!(error = %e, "Auth server unreachable");
            }
            AuthError::Api(e) => {
                tracing::error!(error = %e, "Auth API error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Sign-in rejected");
            }
            AuthError::SessionExpired => {
                tracing::warn!("Session token rejected by server");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        match err {
            AuthError::Unreachable(source) | AuthError::Api(source) => {
                AppError::new(kind, message).with_source(source)
            }
            _ => AppError::new(kind, message),
        }
    }
}
