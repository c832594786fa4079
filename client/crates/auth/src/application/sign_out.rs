//! Sign Out Use Case
//!
//! Purely local: the server keeps no session to invalidate.

use crate::domain::entity::session::SessionState;

/// Sign out use case
#[derive(Debug, Default)]
pub struct SignOutUseCase;

impl SignOutUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Clear the session; returns whether one was active
    pub fn execute(&self, state: &mut SessionState) -> bool {
        match state.sign_out() {
            Some(session) => {
                tracing::info!(email = %session.email, "User signed out");
                true
            }
            None => false,
        }
    }
}
