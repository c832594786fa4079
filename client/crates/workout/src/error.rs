//! Workout Error Types
//!
//! This module provides workout-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::TemplateId;
use platform::client::ClientError;
use thiserror::Error;

/// Workout-specific result type alias
pub type WorkoutResult<T> = Result<T, WorkoutError>;

/// Workout-specific error variants
///
/// Display strings are the messages shown to the user.
#[derive(Debug, Error)]
pub enum WorkoutError {
    /// Input failed a local check before anything was sent
    #[error("{0}")]
    Validation(String),

    /// Set or exercise index outside the workout day
    #[error("No set {set} for exercise {exercise}")]
    NoSuchSet { exercise: usize, set: usize },

    /// Server no longer accepts the bearer token
    #[error("Session expired. Please log in again.")]
    SessionExpired,

    /// `GET /templates` failed
    #[error("Couldn't load templates.")]
    TemplatesUnavailable(#[source] ClientError),

    /// `GET /templates/{id}` failed
    #[error("Couldn't load workout template.")]
    TemplateUnavailable {
        id: TemplateId,
        #[source]
        source: ClientError,
    },

    /// `POST /templates` failed
    #[error("Failed to save template.")]
    TemplateSaveFailed(#[source] ClientError),

    /// `POST /exercises` failed
    #[error("Error creating exercise. Please try again.")]
    ExerciseSaveFailed(#[source] ClientError),

    /// `POST /submit` failed; no integrity comparison was made
    #[error("Unable to save workout.")]
    SaveFailed(#[source] ClientError),

    /// Submission could not be put into canonical form
    #[error("Could not serialize workout: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl WorkoutError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            WorkoutError::Validation(_) | WorkoutError::NoSuchSet { .. } => ErrorKind::InvalidInput,
            WorkoutError::SessionExpired => ErrorKind::Unauthorized,
            WorkoutError::TemplatesUnavailable(e)
            | WorkoutError::TemplateUnavailable { source: e, .. }
            | WorkoutError::TemplateSaveFailed(e)
            | WorkoutError::ExerciseSaveFailed(e)
            | WorkoutError::SaveFailed(e) => e.kind(),
            WorkoutError::Serialize(_) => ErrorKind::Internal,
        }
    }

    /// The underlying client error, if the failure came from the API
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            WorkoutError::TemplatesUnavailable(e)
            | WorkoutError::TemplateUnavailable { source: e, .. }
            | WorkoutError::TemplateSaveFailed(e)
            | WorkoutError::ExerciseSaveFailed(e)
            | WorkoutError::SaveFailed(e) => Some(e),
            _ => None,
        }
    }

    /// Wrap a client error with `wrap`, unless it is an expired session
    pub(crate) fn from_client<F>(err: ClientError, wrap: F) -> Self
    where
        F: FnOnce(ClientError) -> Self,
    {
        if err.status() == Some(401) {
            WorkoutError::SessionExpired
        } else {
            wrap(err)
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            WorkoutError::SaveFailed(e) => {
                tracing::error!(error = %e, "Submit failed");
            }
            WorkoutError::Serialize(e) => {
                tracing::error!(error = %e, "Workout serialization error");
            }
            WorkoutError::SessionExpired => {
                tracing::warn!("Session token rejected by server");
            }
            _ => match self.client_error() {
                Some(source) => {
                    tracing::error!(error = %self, source = %source, "Workout API error");
                }
                None => {
                    tracing::debug!(error = %self, "Workout error");
                }
            },
        }
    }
}

impl From<WorkoutError> for AppError {
    fn from(err: WorkoutError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        match err {
            WorkoutError::TemplatesUnavailable(source)
            | WorkoutError::TemplateUnavailable { source, .. }
            | WorkoutError::TemplateSaveFailed(source)
            | WorkoutError::ExerciseSaveFailed(source)
            | WorkoutError::SaveFailed(source) => AppError::new(kind, message).with_source(source),
            WorkoutError::Serialize(source) => AppError::new(kind, message).with_source(source),
            _ => AppError::new(kind, message),
        }
    }
}
