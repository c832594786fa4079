//! Create Template Use Case

use std::sync::Arc;

use auth::Session;

use crate::domain::entities::WorkoutTemplate;
use crate::domain::repository::WorkoutGateway;
use crate::domain::value_objects::NewTemplate;
use crate::error::WorkoutResult;

/// Create template use case
pub struct CreateTemplateUseCase<G>
where
    G: WorkoutGateway,
{
    gateway: Arc<G>,
}

impl<G> CreateTemplateUseCase<G>
where
    G: WorkoutGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Validate locally, then save
    ///
    /// Nothing is sent when validation fails.
    pub async fn execute(
        &self,
        session: &Session,
        draft: NewTemplate,
    ) -> WorkoutResult<Option<WorkoutTemplate>> {
        draft.validate()?;

        let created = self
            .gateway
            .create_template(session.bearer(), &draft)
            .await
            .inspect_err(|e| e.log())?;

        tracing::info!(
            label = %draft.label,
            exercises = draft.exercises.len(),
            id = ?created.as_ref().map(|t| t.id),
            "Template created"
        );
        Ok(created)
    }
}
