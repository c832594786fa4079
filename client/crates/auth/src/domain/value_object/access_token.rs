//! Access Token Value Object
//!
//! Opaque bearer token issued by `POST /token`.

use platform::secret::SecretString;

/// Bearer token; never logged, never persisted
#[derive(Debug)]
pub struct AccessToken(SecretString);

impl AccessToken {
    /// Wrap a token; returns `None` for an empty or blank token
    pub fn new(token: impl Into<SecretString>) -> Option<Self> {
        let secret = token.into();
        if secret.is_blank() {
            None
        } else {
            Some(Self(secret))
        }
    }

    /// Borrow as a secret for the `Authorization` header
    pub fn secret(&self) -> &SecretString {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token() {
        let token = AccessToken::new("eyJ.abc.def").unwrap();
        assert_eq!(token.secret().expose(), "eyJ.abc.def");
        assert!(!format!("{token:?}").contains("eyJ"));
    }

    #[test]
    fn test_blank_token_rejected() {
        assert!(AccessToken::new("").is_none());
        assert!(AccessToken::new("  ").is_none());
    }
}
