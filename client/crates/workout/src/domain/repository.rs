//! Gateway Traits
//!
//! Interfaces to the remote workout endpoints. Implementation is in infrastructure layer.

use kernel::id::TemplateId;
use platform::canonical::CanonicalJson;
use platform::secret::SecretString;

use crate::domain::entities::WorkoutTemplate;
use crate::domain::value_objects::{NewTemplate, NewTemplateExercise};
use crate::error::WorkoutResult;

/// Workout gateway trait
///
/// Every call carries the bearer token of the current session.
#[trait_variant::make(WorkoutGateway: Send)]
pub trait LocalWorkoutGateway {
    /// All templates of the signed-in user
    async fn list_templates(&self, token: &SecretString) -> WorkoutResult<Vec<WorkoutTemplate>>;

    /// One template by ID
    async fn get_template(
        &self,
        token: &SecretString,
        id: TemplateId,
    ) -> WorkoutResult<WorkoutTemplate>;

    /// Store a new template; returns it when the server echoes it back
    async fn create_template(
        &self,
        token: &SecretString,
        draft: &NewTemplate,
    ) -> WorkoutResult<Option<WorkoutTemplate>>;

    /// Store a reusable exercise
    async fn create_exercise(
        &self,
        token: &SecretString,
        draft: &NewTemplateExercise,
    ) -> WorkoutResult<()>;

    /// Send the canonical submission bytes; returns the server's digest
    ///
    /// Errors only when the workout was not stored. A stored workout whose
    /// reply has no usable digest returns an empty string.
    async fn submit(&self, token: &SecretString, body: &CanonicalJson) -> WorkoutResult<String>;
}
