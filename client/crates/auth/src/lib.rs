//! Auth (Authentication) Client Module
//!
//! Clean Architecture structure:
//! - `domain/` - Session entity, credential value objects, gateway trait
//! - `application/` - Use cases (sign in, sign out, change password)
//! - `infra/` - HTTP implementation of the gateway
//!
//! ## Session Model
//! - A bearer token is acquired at sign-in and held only in memory
//! - Every network-calling component receives the [`Session`] explicitly
//! - Sign-out drops the session; the token is zeroized on drop
//! - Nothing is written to disk

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::{
    ChangePasswordInput, ChangePasswordUseCase, SignInInput, SignInUseCase, SignOutUseCase,
};
pub use domain::entity::session::{Session, SessionState};
pub use domain::repository::AuthGateway;
pub use error::{AuthError, AuthResult};
pub use infra::http::HttpAuthGateway;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
}
