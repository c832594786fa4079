//! Wire Types
//!
//! Request and response bodies of the auth endpoints.

use serde::{Deserialize, Serialize};

/// `POST /token` response
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// `PUT /account/password` body
#[derive(Debug, Serialize)]
pub struct ChangePasswordRequest<'a> {
    pub old_password: &'a str,
    pub new_password: &'a str,
    pub confirm_password: &'a str,
}
