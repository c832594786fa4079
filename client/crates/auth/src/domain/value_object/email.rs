//! Email Value Object
//!
//! The login identifier, sent as the `username` form field of `POST /token`.
//! Kept on the session for display only.

use kernel::error::app_error::{AppError, AppResult};
use std::str::FromStr;

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    ///
    /// Trims surrounding whitespace and lowercases.
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let email = email.into().trim().to_lowercase();

        if email.is_empty() {
            return Err(AppError::invalid_input("Email is required."));
        }

        if email.len() > EMAIL_MAX_LENGTH || !Self::is_valid_format(&email) {
            return Err(AppError::invalid_input("Please enter a valid email address."));
        }

        Ok(Self(email))
    }

    /// `local@domain.tld`, no whitespace
    fn is_valid_format(email: &str) -> bool {
        if email.chars().any(char::is_whitespace) {
            return false;
        }
        match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.contains('@')
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
            }
            None => false,
        }
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Email {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Email::new(s)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("lawton@example.com").is_ok());
        assert!(Email::new("user+tag@example.co.uk").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        assert!(Email::new("").is_err());
        assert!(Email::new("   ").is_err());
        assert!(Email::new("lawton.example.com").is_err());
        assert!(Email::new("lawton@").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("a@@example.com").is_err());
        assert!(Email::new("lawton@example").is_err());
        assert!(Email::new("law ton@example.com").is_err());
    }

    #[test]
    fn test_email_normalization() {
        let email = Email::new("  Lawton@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "lawton@example.com");
    }
}
