//! `From` impls turning library errors into [`AppError`]

use super::app_error::AppError;
#[cfg(feature = "reqwest")]
use super::kind::ErrorKind;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Io => {
                AppError::internal("JSON serialization error").with_source(err)
            }
            _ => AppError::malformed(format!("JSON parse error: {err}")).with_source(err),
        }
    }
}

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let base = if err.is_timeout() {
            AppError::new(ErrorKind::Timeout, "Server did not respond in time")
        } else if err.is_connect() {
            AppError::unreachable("Unable to connect").with_action("Please try again.")
        } else if let Some(status) = err.status() {
            AppError::from_status(status.as_u16(), "Request rejected by server")
        } else if err.is_decode() {
            AppError::malformed("Unexpected response body")
        } else if err.is_builder() {
            AppError::internal("Invalid request")
        } else {
            AppError::new(ErrorKind::Unreachable, "Request failed")
        };
        base.with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind;

    #[test]
    fn test_truncated_json_is_malformed() {
        let err = serde_json::from_str::<serde_json::Value>("{\"hash\":").unwrap_err();
        let app: AppError = err.into();
        assert_eq!(app.kind(), ErrorKind::MalformedResponse);
        assert!(app.message().starts_with("JSON parse error"));
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        let err = serde_json::from_str::<Vec<i32>>(r#"{"hash":"abc"}"#).unwrap_err();
        assert_eq!(AppError::from(err).kind(), ErrorKind::MalformedResponse);
    }
}
