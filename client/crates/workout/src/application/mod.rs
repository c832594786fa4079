//! Application Layer
//!
//! Use cases over the workout gateway.

pub mod config;
pub mod create_exercise;
pub mod create_template;
pub mod get_template;
pub mod list_templates;
pub mod submit_workout;

// Re-exports
pub use config::WorkoutConfig;
pub use create_exercise::CreateExerciseUseCase;
pub use create_template::CreateTemplateUseCase;
pub use get_template::GetTemplateUseCase;
pub use list_templates::ListTemplatesUseCase;
pub use submit_workout::{SubmitOutput, SubmitWorkoutUseCase};
