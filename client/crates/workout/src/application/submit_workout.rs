//! Submit Workout Use Case
//!
//! Saves a workout day and checks that the server hashed the same bytes.
//!
//! ## Flow
//! 1. Project the day onto the submission payload
//! 2. Canonicalize (sorted keys, compact) and digest locally
//! 3. `POST /submit` with exactly the canonical bytes
//! 4. Compare the returned digest with the local one
//!
//! A failed request skips step 4. A mismatch is reported, not retried:
//! the server has already stored the workout.

use std::sync::Arc;

use auth::Session;

use crate::domain::entities::{WorkoutDay, WorkoutSubmission};
use crate::domain::repository::WorkoutGateway;
use crate::domain::services::{canonical_submission, verify_integrity};
use crate::domain::value_objects::IntegrityCheck;
use crate::error::WorkoutResult;

/// Result of a successful save
#[derive(Debug, Clone)]
pub struct SubmitOutput {
    /// What was sent
    pub submission: WorkoutSubmission,
    /// Local vs server digest
    pub integrity: IntegrityCheck,
}

/// Submit workout use case
pub struct SubmitWorkoutUseCase<G>
where
    G: WorkoutGateway,
{
    gateway: Arc<G>,
}

impl<G> SubmitWorkoutUseCase<G>
where
    G: WorkoutGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, session: &Session, day: &WorkoutDay) -> WorkoutResult<SubmitOutput> {
        let submission = day.to_submission();
        let canonical = canonical_submission(&submission).inspect_err(|e| e.log())?;
        let local = canonical.sha256_hex();

        let server = self
            .gateway
            .submit(session.bearer(), &canonical)
            .await
            .inspect_err(|e| e.log())?;

        let integrity = verify_integrity(&server, &local);
        match &integrity {
            IntegrityCheck::Verified { hash } => {
                tracing::info!(hash = %hash, date = %submission.date, "Workout saved, digest verified");
            }
            IntegrityCheck::Mismatch { server, local } => {
                tracing::warn!(server = %server, local = %local, "Workout saved, digest mismatch");
            }
        }

        Ok(SubmitOutput {
            submission,
            integrity,
        })
    }
}
