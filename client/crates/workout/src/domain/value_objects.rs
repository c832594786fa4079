//! Domain Value Objects
//!
//! Drafts the user builds before saving, and the integrity verdict.

use serde::Serialize;

use crate::error::{WorkoutError, WorkoutResult};

const TEMPLATE_HEADER_REQUIRED: &str = "Label and focus are required.";
const TEMPLATE_EXERCISE_INVALID: &str =
    "Each exercise needs a name, valid weight, and at least 1 set.";
const TEMPLATE_EXERCISES_REQUIRED: &str = "Add at least one exercise.";
const EXERCISE_FIELDS_REQUIRED: &str = "Please fill in all fields.";

/// Exercise as entered in a template or reusable exercise form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTemplateExercise {
    pub name: String,
    pub target_weight: f64,
    pub num_sets: u32,
}

impl NewTemplateExercise {
    pub fn new(name: impl Into<String>, target_weight: f64, num_sets: u32) -> Self {
        Self {
            name: name.into().trim().to_string(),
            target_weight,
            num_sets,
        }
    }

    fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.target_weight.is_finite()
            && self.target_weight >= 0.0
            && self.num_sets >= 1
    }

    /// Check as a standalone reusable exercise
    pub fn validate(&self) -> WorkoutResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(WorkoutError::Validation(EXERCISE_FIELDS_REQUIRED.to_string()))
        }
    }
}

/// Template draft for `POST /templates`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTemplate {
    pub label: String,
    pub focus: String,
    pub exercises: Vec<NewTemplateExercise>,
}

impl NewTemplate {
    pub fn new(
        label: impl Into<String>,
        focus: impl Into<String>,
        exercises: Vec<NewTemplateExercise>,
    ) -> Self {
        Self {
            label: label.into().trim().to_string(),
            focus: focus.into().trim().to_string(),
            exercises,
        }
    }

    /// Header first, then every exercise row
    pub fn validate(&self) -> WorkoutResult<()> {
        if self.label.trim().is_empty() || self.focus.trim().is_empty() {
            return Err(WorkoutError::Validation(TEMPLATE_HEADER_REQUIRED.to_string()));
        }
        if self.exercises.is_empty() {
            return Err(WorkoutError::Validation(
                TEMPLATE_EXERCISES_REQUIRED.to_string(),
            ));
        }
        if !self.exercises.iter().all(NewTemplateExercise::is_valid) {
            return Err(WorkoutError::Validation(TEMPLATE_EXERCISE_INVALID.to_string()));
        }
        Ok(())
    }
}

/// Outcome of comparing the server digest with the local one
///
/// Either way the server has already stored the workout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityCheck {
    Verified { hash: String },
    Mismatch { server: String, local: String },
}

impl IntegrityCheck {
    pub fn is_verified(&self) -> bool {
        matches!(self, IntegrityCheck::Verified { .. })
    }
}
