//! Application Layer
//!
//! Use cases over the auth gateway.

pub mod change_password;
pub mod sign_in;
pub mod sign_out;

// Re-exports
pub use change_password::{ChangePasswordInput, ChangePasswordUseCase};
pub use sign_in::{SignInInput, SignInUseCase};
pub use sign_out::SignOutUseCase;
