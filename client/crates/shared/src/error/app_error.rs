//! Client-wide error value
//!
//! [`AppError`] is what the auth and workout crates collapse into before the
//! CLI prints anything. It carries a [`ErrorKind`], the text shown to the
//! user, an optional hint and the underlying cause for logs.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

type Text = Cow<'static, str>;
type Cause = Box<dyn Error + Send + Sync + 'static>;

/// 画面に出すエラー
///
/// `message` は利用者にそのまま見せる文言です。`hint` があれば末尾に続けて
/// 表示し、`cause` はログにのみ出します。
///
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::new(ErrorKind::Unreachable, "Unable to connect.")
///     .with_action("Please try again.");
/// assert_eq!(err.user_message(), "Unable to connect. Please try again.");
/// ```
#[derive(Debug)]
pub struct AppError {
    kind: ErrorKind,
    message: Text,
    hint: Option<Text>,
    cause: Option<Cause>,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<Text>) -> Self {
        Self {
            kind,
            message: message.into(),
            hint: None,
            cause: None,
        }
    }

    /// Classify by the HTTP status the server answered with
    ///
    /// ```rust
    /// use kernel::error::{app_error::AppError, kind::ErrorKind};
    /// let err = AppError::from_status(404, "Couldn't load workout template.");
    /// assert_eq!(err.kind(), ErrorKind::NotFound);
    /// ```
    pub fn from_status(status: u16, message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::from_status_code(status), message)
    }

    /// 入力が不正 (送信前に弾いたもの)
    pub fn invalid_input(message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }

    pub fn not_found(message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn unreachable(message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::Unreachable, message)
    }

    /// 成功ステータスだが本文が読めない
    pub fn malformed(message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::MalformedResponse, message)
    }

    pub fn internal(message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Attach a follow-up hint, printed after the message
    pub fn with_action(self, hint: impl Into<Text>) -> Self {
        Self {
            hint: Some(hint.into()),
            ..self
        }
    }

    /// Keep the underlying error for logging
    pub fn with_source<E>(self, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            cause: Some(Box::new(cause)),
            ..self
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn action(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Message and hint joined by a space
    pub fn user_message(&self) -> String {
        self.hint.as_ref().map_or_else(
            || self.message.to_string(),
            |hint| format!("{} {hint}", self.message),
        )
    }

    pub fn is_transport(&self) -> bool {
        self.kind.is_transport()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.user_message())
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_without_hint() {
        let err = AppError::new(ErrorKind::NotFound, "Couldn't load templates.");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), "Couldn't load templates.");
        assert_eq!(err.user_message(), "Couldn't load templates.");
        assert!(err.action().is_none());
    }

    #[test]
    fn test_from_status() {
        assert_eq!(AppError::from_status(401, "x").kind(), ErrorKind::Unauthorized);
        assert_eq!(AppError::from_status(500, "x").kind(), ErrorKind::Upstream);
    }

    #[test]
    fn test_hint_is_appended() {
        let err = AppError::unreachable("Unable to connect.").with_action("Please try again.");
        assert_eq!(err.action(), Some("Please try again."));
        assert_eq!(err.user_message(), "Unable to connect. Please try again.");
        assert!(err.is_transport());
        assert!(!AppError::malformed("bad body").is_transport());
    }

    #[test]
    fn test_cause_is_exposed_as_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "day.json");
        let err = AppError::invalid_input("Failed to read payload").with_source(io);
        assert_eq!(err.source().map(|e| e.to_string()), Some("day.json".to_string()));
        assert!(AppError::internal("x").source().is_none());
    }

    #[test]
    fn test_display() {
        let err = AppError::not_found("Template not found");
        assert_eq!(err.to_string(), "[Not Found] Template not found");

        let err = AppError::invalid_input("Label and focus are required.").with_action("Fill both.");
        assert!(err.to_string().ends_with("Label and focus are required. Fill both."));
    }
}
