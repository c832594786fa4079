//! Create Exercise Use Case
//!
//! Saves a reusable exercise outside of any template.

use std::sync::Arc;

use auth::Session;

use crate::domain::repository::WorkoutGateway;
use crate::domain::value_objects::NewTemplateExercise;
use crate::error::WorkoutResult;

/// Create exercise use case
pub struct CreateExerciseUseCase<G>
where
    G: WorkoutGateway,
{
    gateway: Arc<G>,
}

impl<G> CreateExerciseUseCase<G>
where
    G: WorkoutGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, session: &Session, draft: NewTemplateExercise) -> WorkoutResult<()> {
        draft.validate()?;

        self.gateway
            .create_exercise(session.bearer(), &draft)
            .await
            .inspect_err(|e| e.log())?;

        tracing::info!(name = %draft.name, "Exercise created");
        Ok(())
    }
}
