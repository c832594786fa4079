//! Gateway Traits
//!
//! Interfaces to the remote auth endpoints. Implementation is in infrastructure layer.

use crate::domain::value_object::{
    access_token::AccessToken,
    email::Email,
    password::{PasswordChange, RawPassword},
};
use crate::error::AuthResult;

/// Auth gateway trait
#[trait_variant::make(AuthGateway: Send)]
pub trait LocalAuthGateway {
    /// Exchange credentials for a bearer token
    async fn request_token(&self, email: &Email, password: &RawPassword)
    -> AuthResult<AccessToken>;

    /// Change the signed-in user's password
    async fn change_password(
        &self,
        token: &AccessToken,
        change: &PasswordChange,
    ) -> AuthResult<()>;
}
