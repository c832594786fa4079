//! Change Password Use Case

use std::sync::Arc;

use platform::secret::SecretString;

use crate::domain::entity::session::Session;
use crate::domain::repository::AuthGateway;
use crate::domain::value_object::password::PasswordChange;
use crate::error::AuthResult;

/// Change password input
pub struct ChangePasswordInput {
    pub old_password: SecretString,
    pub new_password: SecretString,
    pub confirm_password: SecretString,
}

/// Change password use case
pub struct ChangePasswordUseCase<G>
where
    G: AuthGateway,
{
    gateway: Arc<G>,
}

impl<G> ChangePasswordUseCase<G>
where
    G: AuthGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Validate locally, then ask the server
    ///
    /// Nothing is sent when the local checks fail.
    pub async fn execute(&self, session: &Session, input: ChangePasswordInput) -> AuthResult<()> {
        let change = PasswordChange::new(
            input.old_password,
            input.new_password,
            input.confirm_password,
        )?;

        self.gateway.change_password(session.token(), &change).await?;

        tracing::info!(email = %session.email, "Password changed");
        Ok(())
    }
}
