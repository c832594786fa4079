//! Domain Entities
//!
//! Templates as the server stores them, and the workout day the user fills in.

use chrono::{Days, NaiveDate, Utc};
use kernel::id::{TemplateExerciseId, TemplateId};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{WorkoutError, WorkoutResult};

/// Random fill ranges, inclusive
pub const RANDOM_LBS_RANGE: std::ops::RangeInclusive<u32> = 50..=250;
pub const RANDOM_REPS_RANGE: std::ops::RangeInclusive<u32> = 6..=15;
pub const RANDOM_DAY_OFFSET: std::ops::RangeInclusive<i64> = -2..=2;

/// One performed set; `None` means not yet entered
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    pub lbs: Option<f64>,
    pub reps: Option<u32>,
}

impl WorkoutSet {
    pub fn new(lbs: f64, reps: u32) -> Self {
        Self {
            lbs: Some(lbs),
            reps: Some(reps),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.lbs.is_some() && self.reps.is_some()
    }
}

/// Exercise slot inside a stored template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateExercise {
    pub id: TemplateExerciseId,
    pub name: String,
    pub target_weight: f64,
    pub num_sets: u32,
    /// Display and submission order within the template
    pub position: u32,
}

/// Stored workout template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    pub id: TemplateId,
    pub label: String,
    pub focus: String,
    pub exercises: Vec<TemplateExercise>,
}

impl WorkoutTemplate {
    /// Exercises in position order; ties keep server order
    pub fn ordered_exercises(&self) -> Vec<&TemplateExercise> {
        let mut exercises: Vec<&TemplateExercise> = self.exercises.iter().collect();
        exercises.sort_by_key(|e| e.position);
        exercises
    }

    /// Total sets across all exercises
    pub fn total_sets(&self) -> u32 {
        self.exercises.iter().map(|e| e.num_sets).sum()
    }
}

/// One exercise row of a workout day
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub name: String,
    pub target_weight: f64,
    pub sets: Vec<WorkoutSet>,
}

/// A template instantiated for a date, being filled in
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutDay {
    pub template_id: TemplateId,
    pub label: String,
    pub focus: String,
    pub date: Option<NaiveDate>,
    pub exercises: Vec<Exercise>,
}

impl WorkoutDay {
    /// Expand a template into empty sets, in position order
    pub fn from_template(template: &WorkoutTemplate) -> Self {
        let exercises = template
            .ordered_exercises()
            .into_iter()
            .map(|e| Exercise {
                name: e.name.clone(),
                target_weight: e.target_weight,
                sets: vec![WorkoutSet::default(); e.num_sets as usize],
            })
            .collect();

        Self {
            template_id: template.id,
            label: template.label.clone(),
            focus: template.focus.clone(),
            date: None,
            exercises,
        }
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
    }

    /// Record weight and reps for one set; `None` clears the field
    pub fn record_set(
        &mut self,
        exercise: usize,
        set: usize,
        lbs: Option<f64>,
        reps: Option<u32>,
    ) -> WorkoutResult<()> {
        if let Some(lbs) = lbs {
            if !lbs.is_finite() || lbs < 0.0 {
                return Err(WorkoutError::Validation(format!(
                    "Weight must be a non-negative number, got {lbs}."
                )));
            }
        }

        let slot = self
            .exercises
            .get_mut(exercise)
            .and_then(|e| e.sets.get_mut(set))
            .ok_or(WorkoutError::NoSuchSet { exercise, set })?;
        *slot = WorkoutSet { lbs, reps };
        Ok(())
    }

    /// Number of sets with both weight and reps entered
    pub fn completed_sets(&self) -> usize {
        self.exercises
            .iter()
            .flat_map(|e| e.sets.iter())
            .filter(|s| s.is_complete())
            .count()
    }

    /// Fill every set and the date with plausible random values
    ///
    /// Development aid. The date lands within two days of `today`.
    pub fn random_fill<R: Rng>(&mut self, rng: &mut R, today: NaiveDate) {
        let offset = rng.random_range(RANDOM_DAY_OFFSET);
        let date = if offset < 0 {
            today.checked_sub_days(Days::new(offset.unsigned_abs()))
        } else {
            today.checked_add_days(Days::new(offset.unsigned_abs()))
        };
        self.date = Some(date.unwrap_or(today));

        for set in self.exercises.iter_mut().flat_map(|e| e.sets.iter_mut()) {
            *set = WorkoutSet::new(
                f64::from(rng.random_range(RANDOM_LBS_RANGE)),
                rng.random_range(RANDOM_REPS_RANGE),
            );
        }
    }

    /// [`WorkoutDay::random_fill`] relative to the current UTC date
    pub fn random_fill_now<R: Rng>(&mut self, rng: &mut R) {
        self.random_fill(rng, Utc::now().date_naive());
    }

    /// Project onto the payload sent to `POST /submit`
    ///
    /// Exercise and set order are kept as is. A missing date becomes `""`.
    pub fn to_submission(&self) -> WorkoutSubmission {
        WorkoutSubmission {
            date: self
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            exercises: self
                .exercises
                .iter()
                .map(|e| ExerciseSubmission {
                    name: e.name.clone(),
                    sets: e.sets.clone(),
                })
                .collect(),
        }
    }
}

/// `POST /submit` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSubmission {
    pub date: String,
    pub exercises: Vec<ExerciseSubmission>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSubmission {
    pub name: String,
    pub sets: Vec<WorkoutSet>,
}
