//! Sign In Use Case
//!
//! Exchanges email and password for a bearer token and opens a session.

use std::sync::Arc;

use platform::secret::SecretString;

use crate::domain::entity::session::Session;
use crate::domain::repository::AuthGateway;
use crate::domain::value_object::{email::Email, password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    /// Email as typed
    pub email: String,
    /// Password as typed
    pub password: SecretString,
}

/// Sign in use case
pub struct SignInUseCase<G>
where
    G: AuthGateway,
{
    gateway: Arc<G>,
}

impl<G> SignInUseCase<G>
where
    G: AuthGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<Session> {
        let email = Email::new(input.email)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;
        let password = RawPassword::new(input.password)?;

        let token = self.gateway.request_token(&email, &password).await?;

        tracing::info!(email = %email, "User signed in");
        Ok(Session::new(email, token))
    }
}
