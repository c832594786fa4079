//! Workout API HTTP client
//!
//! Thin wrapper over `reqwest` that knows the base URL, attaches bearer
//! tokens and turns non-success statuses into [`ClientError::Status`].

use kernel::error::{app_error::AppError, kind::ErrorKind};
use reqwest::{Method, RequestBuilder, Response, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::{ApiConfig, ConfigError};
use crate::secret::SecretString;

/// Client result type alias
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors raised while talking to the workout API
#[derive(Debug, Error)]
pub enum ClientError {
    /// Endpoint could not be resolved against the base URL
    #[error("Invalid endpoint: {0}")]
    Endpoint(#[from] ConfigError),

    /// Request never produced a response (connect, TLS, timeout)
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server returned status {status}")]
    Status { status: u16, detail: Option<String> },

    /// Success status but the body was not what we expected
    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl ClientError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Endpoint(_) => ErrorKind::Internal,
            ClientError::Transport(e) if e.is_timeout() => ErrorKind::Timeout,
            ClientError::Transport(_) => ErrorKind::Unreachable,
            ClientError::Status { status, .. } => ErrorKind::from_status_code(*status),
            ClientError::Decode(_) => ErrorKind::MalformedResponse,
        }
    }

    /// HTTP status, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-provided `detail` message, when the server sent one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Transport(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

/// HTTP client bound to one API base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Build a client from configuration
    pub fn new(config: ApiConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(ClientError::Transport)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET` and decode a JSON body
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&SecretString>,
    ) -> ClientResult<T> {
        let request = self.request(Method::GET, path, token)?;
        let response = self.execute(request).await?;
        decode_json(response).await
    }

    /// `POST` a serializable value as JSON and decode a JSON body
    pub async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        token: Option<&SecretString>,
    ) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path, token)?.json(body);
        let response = self.execute(request).await?;
        decode_json(response).await
    }

    /// `POST` pre-serialized JSON bytes verbatim and decode a JSON body
    ///
    /// Used when the exact bytes on the wire matter (integrity digests).
    pub async fn post_raw_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: String,
        token: Option<&SecretString>,
    ) -> ClientResult<T> {
        let request = self
            .request(Method::POST, path, token)?
            .header(header::CONTENT_TYPE, "application/json")
            .body(body);
        let response = self.execute(request).await?;
        decode_json(response).await
    }

    /// `POST` an `application/x-www-form-urlencoded` body and decode a JSON body
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, &str)],
        token: Option<&SecretString>,
    ) -> ClientResult<T> {
        let request = self.request(Method::POST, path, token)?.form(form);
        let response = self.execute(request).await?;
        decode_json(response).await
    }

    /// `POST` a JSON body, ignoring whatever the server answers on success
    pub async fn post_json_discard<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        token: Option<&SecretString>,
    ) -> ClientResult<()> {
        let request = self.request(Method::POST, path, token)?.json(body);
        self.execute(request).await?;
        Ok(())
    }

    /// `PUT` a JSON body, ignoring whatever the server answers on success
    pub async fn put_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        token: Option<&SecretString>,
    ) -> ClientResult<()> {
        let request = self.request(Method::PUT, path, token)?.json(body);
        self.execute(request).await?;
        Ok(())
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&SecretString>,
    ) -> ClientResult<RequestBuilder> {
        let url = self.config.endpoint(path)?;
        tracing::debug!(method = %method, url = %url, "API request");

        let mut request = self
            .http
            .request(method, url)
            .header(header::ACCEPT, "application/json");
        if let Some(token) = token {
            request = request.bearer_auth(token.expose());
        }
        Ok(request)
    }

    async fn execute(&self, request: RequestBuilder) -> ClientResult<Response> {
        let response = request.send().await.map_err(ClientError::Transport)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Error bodies are best effort; the status alone is enough to classify.
        let body = response.text().await.unwrap_or_default();
        let detail = extract_detail(&body);
        tracing::debug!(status = status.as_u16(), detail = ?detail, "API request rejected");
        Err(ClientError::Status {
            status: status.as_u16(),
            detail,
        })
    }
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let bytes = response.bytes().await.map_err(ClientError::Transport)?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
}

/// Pull a human-readable `detail` out of an error body
///
/// Accepts `{"detail": "..."}` and `{"detail": [{"msg": "..."}]}`.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::serve_once;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct HashResponse {
        hash: String,
    }

    fn client_for(base: &str) -> ApiClient {
        ApiClient::new(ApiConfig::new(base).unwrap()).unwrap()
    }

    #[test]
    fn test_extract_detail() {
        assert_eq!(
            extract_detail(r#"{"detail":"Incorrect old password"}"#),
            Some("Incorrect old password".to_string())
        );
        assert_eq!(
            extract_detail(r#"{"detail":[{"msg":"field required"},{"msg":"bad date"}]}"#),
            Some("field required; bad date".to_string())
        );
        assert_eq!(extract_detail(r#"{"detail":""}"#), None);
        assert_eq!(extract_detail("<html>oops</html>"), None);
        assert_eq!(extract_detail(r#"{"error":"x"}"#), None);
    }

    #[test]
    fn test_status_error_kind() {
        let err = ClientError::Status {
            status: 401,
            detail: None,
        };
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert_eq!(err.status(), Some(401));

        let err = ClientError::Decode("eof".into());
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_get_json_sends_bearer_token() {
        let (base, server) = serve_once("HTTP/1.1 200 OK", r#"{"hash":"abc"}"#).await;
        let client = client_for(&base);
        let token = SecretString::from("tok-123");

        let body: HashResponse = client.get_json("/templates", Some(&token)).await.unwrap();
        assert_eq!(body.hash, "abc");

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /templates HTTP/1.1"));
        assert!(request.to_lowercase().contains("authorization: bearer tok-123"));
    }

    #[tokio::test]
    async fn test_post_raw_json_sends_exact_bytes() {
        let (base, server) = serve_once("HTTP/1.1 200 OK", r#"{"hash":"def"}"#).await;
        let client = client_for(&base);
        let payload = r#"{"date":"2024-01-01","exercises":[]}"#.to_string();

        let _: HashResponse = client.post_raw_json("submit", payload.clone(), None).await.unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /submit HTTP/1.1"));
        assert!(request.to_lowercase().contains("content-type: application/json"));
        assert!(request.ends_with(&payload));
    }

    #[tokio::test]
    async fn test_post_form_encodes_fields() {
        let (base, server) =
            serve_once("HTTP/1.1 200 OK", r#"{"hash":"x"}"#).await;
        let client = client_for(&base);

        let _: HashResponse = client
            .post_form("token", &[("username", "a@b.co"), ("password", "p w")], None)
            .await
            .unwrap();

        let request = server.await.unwrap();
        assert!(request.ends_with("username=a%40b.co&password=p+w"));
    }

    #[tokio::test]
    async fn test_non_success_status_carries_detail() {
        let (base, _server) = serve_once(
            "HTTP/1.1 400 Bad Request",
            r#"{"detail":"Incorrect old password"}"#,
        )
        .await;
        let client = client_for(&base);

        let err = client
            .put_json("account/password", &serde_json::json!({}), None)
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.detail(), Some("Incorrect old password"));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[tokio::test]
    async fn test_unexpected_body_is_decode_error() {
        let (base, _server) = serve_once("HTTP/1.1 200 OK", r#"{"nope":1}"#).await;
        let client = client_for(&base);

        let err = client.get_json::<HashResponse>("x", None).await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
