//! Password Value Objects
//!
//! Clear text passwords exist only for the duration of one request and are
//! zeroized on drop (see [`platform::secret::SecretString`]). Strength policy
//! is the server's business; the client only checks presence.

use platform::secret::SecretString;

use crate::error::{AuthError, AuthResult};

/// A password as typed by the user
#[derive(Debug)]
pub struct RawPassword(SecretString);

impl RawPassword {
    /// Wrap a password; empty input is rejected
    pub fn new(raw: impl Into<SecretString>) -> AuthResult<Self> {
        let secret = raw.into();
        if secret.is_empty() {
            return Err(AuthError::Validation("Password is required.".to_string()));
        }
        Ok(Self(secret))
    }

    pub fn expose(&self) -> &str {
        self.0.expose()
    }
}

/// A validated password change request
#[derive(Debug)]
pub struct PasswordChange {
    pub old: SecretString,
    pub new: SecretString,
    pub confirm: SecretString,
}

impl PasswordChange {
    /// Check the form before it is sent
    ///
    /// Mismatch is reported before missing fields, so two empty new-password
    /// fields read as "required" rather than "do not match".
    pub fn new(
        old: impl Into<SecretString>,
        new: impl Into<SecretString>,
        confirm: impl Into<SecretString>,
    ) -> AuthResult<Self> {
        let (old, new, confirm) = (old.into(), new.into(), confirm.into());

        if new.expose() != confirm.expose() {
            return Err(AuthError::Validation(
                "New passwords do not match.".to_string(),
            ));
        }
        if old.is_empty() || new.is_empty() || confirm.is_empty() {
            return Err(AuthError::Validation("All fields are required.".to_string()));
        }

        Ok(Self { old, new, confirm })
    }
}
