//! Get Template Use Case
//!
//! Loads one template and, for logging a workout, expands it into a day.

use std::sync::Arc;

use auth::Session;
use kernel::id::TemplateId;

use crate::domain::entities::{WorkoutDay, WorkoutTemplate};
use crate::domain::repository::WorkoutGateway;
use crate::error::WorkoutResult;

/// Get template use case
pub struct GetTemplateUseCase<G>
where
    G: WorkoutGateway,
{
    gateway: Arc<G>,
}

impl<G> GetTemplateUseCase<G>
where
    G: WorkoutGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, session: &Session, id: TemplateId) -> WorkoutResult<WorkoutTemplate> {
        self.gateway
            .get_template(session.bearer(), id)
            .await
            .inspect_err(|e| e.log())
    }

    /// Load a template as an empty workout day
    pub async fn start_day(&self, session: &Session, id: TemplateId) -> WorkoutResult<WorkoutDay> {
        let template = self.execute(session, id).await?;
        let day = WorkoutDay::from_template(&template);

        tracing::debug!(
            template_id = %id,
            exercises = day.exercises.len(),
            "Workout day started"
        );
        Ok(day)
    }
}
