//! Workout Client Module
//!
//! Clean Architecture structure:
//! - `domain/` - Templates, workout days, drafts, integrity services, gateway trait
//! - `application/` - Use cases
//! - `infra/` - HTTP implementation of the gateway
//!
//! ## Integrity Model
//! - A submission is canonicalized (object keys sorted, arrays untouched,
//!   compact) and those exact bytes are both hashed and sent
//! - The server answers with its own SHA-256 of what it received
//! - Equal digests verify the round trip; a mismatch is reported as a
//!   warning and never rolls back the stored workout

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::{
    CreateExerciseUseCase, CreateTemplateUseCase, GetTemplateUseCase, ListTemplatesUseCase,
    SubmitOutput, SubmitWorkoutUseCase, WorkoutConfig,
};
pub use domain::repository::WorkoutGateway;
pub use error::{WorkoutError, WorkoutResult};
pub use infra::http::HttpWorkoutGateway;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
}
