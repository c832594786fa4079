//! HTTP Auth Gateway
//!
//! Implements [`AuthGateway`] against the workout API.

use platform::client::{ApiClient, ClientError};

use crate::domain::repository::AuthGateway;
use crate::domain::value_object::{
    access_token::AccessToken,
    email::Email,
    password::{PasswordChange, RawPassword},
};
use crate::error::{AuthError, AuthResult};
use crate::infra::dto::{ChangePasswordRequest, TokenResponse};

const TOKEN_PATH: &str = "token";
const CHANGE_PASSWORD_PATH: &str = "account/password";
const CHANGE_PASSWORD_FALLBACK: &str = "Failed to change password.";

/// Auth gateway backed by [`ApiClient`]
#[derive(Debug, Clone)]
pub struct HttpAuthGateway {
    client: ApiClient,
}

impl HttpAuthGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl AuthGateway for HttpAuthGateway {
    async fn request_token(
        &self,
        email: &Email,
        password: &RawPassword,
    ) -> AuthResult<AccessToken> {
        let form = [("username", email.as_str()), ("password", password.expose())];
        let response: TokenResponse = self
            .client
            .post_form(TOKEN_PATH, &form, None)
            .await
            .map_err(map_token_error)?;

        if let Some(token_type) = response.token_type.as_deref() {
            if !token_type.eq_ignore_ascii_case("bearer") {
                tracing::warn!(token_type, "Unexpected token type");
            }
        }

        AccessToken::new(response.access_token)
            .ok_or_else(|| AuthError::Api(ClientError::Decode("empty access_token".to_string())))
    }

    async fn change_password(
        &self,
        token: &AccessToken,
        change: &PasswordChange,
    ) -> AuthResult<()> {
        let body = ChangePasswordRequest {
            old_password: change.old.expose(),
            new_password: change.new.expose(),
            confirm_password: change.confirm.expose(),
        };
        self.client
            .put_json(CHANGE_PASSWORD_PATH, &body, Some(token.secret()))
            .await
            .map_err(map_change_password_error)
    }
}

fn map_token_error(err: ClientError) -> AuthError {
    match err.status() {
        Some(400 | 401) => AuthError::InvalidCredentials,
        _ => AuthError::from_client(err),
    }
}

fn map_change_password_error(err: ClientError) -> AuthError {
    match err.status() {
        Some(401) => AuthError::SessionExpired,
        Some(_) => AuthError::PasswordChangeRejected(
            err.detail().unwrap_or(CHANGE_PASSWORD_FALLBACK).to_string(),
        ),
        None => AuthError::from_client(err),
    }
}
