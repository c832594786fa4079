//! Failure classification
//!
//! [`ErrorKind`] says what went wrong in terms the CLI can act on: the
//! server refused the request, the server could not be reached, or the
//! answer made no sense.

use std::fmt;

use serde::Serialize;

/// 失敗の分類
///
/// HTTP ステータスで決まる種別と、応答そのものが得られなかった種別
/// (`Unreachable`, `Timeout`) があります。
///
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::from_status_code(404), ErrorKind::NotFound);
/// assert_eq!(ErrorKind::NotFound.to_string(), "Not Found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 送信前の検証で弾いた、またはサーバーが 400 を返した
    InvalidInput,
    /// 401
    Unauthorized,
    /// 403
    Forbidden,
    /// 404
    NotFound,
    /// 409
    Conflict,
    /// 422
    UnprocessableEntity,
    /// 429
    TooManyRequests,
    /// 5xx
    Upstream,
    /// DNS / TCP / TLS
    Unreachable,
    Timeout,
    /// 成功ステータスだが本文が想定外
    MalformedResponse,
    Internal,
}

impl ErrorKind {
    /// Classify a non-success HTTP status
    ///
    /// Unlisted 4xx fall back to `InvalidInput`, unlisted 5xx to `Upstream`.
    /// Anything outside 400..=599 is treated as a response we cannot use.
    pub const fn from_status_code(code: u16) -> Self {
        match code {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            408 => Self::Timeout,
            409 => Self::Conflict,
            422 => Self::UnprocessableEntity,
            429 => Self::TooManyRequests,
            400..=499 => Self::InvalidInput,
            500..=599 => Self::Upstream,
            _ => Self::MalformedResponse,
        }
    }

    /// No response arrived at all
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Unreachable | Self::Timeout)
    }

    const fn label(&self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid Input",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::Conflict => "Conflict",
            Self::UnprocessableEntity => "Unprocessable Entity",
            Self::TooManyRequests => "Too Many Requests",
            Self::Upstream => "Upstream Error",
            Self::Unreachable => "Unreachable",
            Self::Timeout => "Timeout",
            Self::MalformedResponse => "Malformed Response",
            Self::Internal => "Internal Error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
