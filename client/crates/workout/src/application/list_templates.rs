//! List Templates Use Case

use std::sync::Arc;

use auth::Session;

use crate::domain::entities::WorkoutTemplate;
use crate::domain::repository::WorkoutGateway;
use crate::error::WorkoutResult;

/// List templates use case
pub struct ListTemplatesUseCase<G>
where
    G: WorkoutGateway,
{
    gateway: Arc<G>,
}

impl<G> ListTemplatesUseCase<G>
where
    G: WorkoutGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, session: &Session) -> WorkoutResult<Vec<WorkoutTemplate>> {
        let templates = self
            .gateway
            .list_templates(session.bearer())
            .await
            .inspect_err(|e| e.log())?;

        tracing::debug!(count = templates.len(), "Templates loaded");
        Ok(templates)
    }
}
