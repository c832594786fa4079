//! Command line definition

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use kernel::id::TemplateId;
use workout::models::NewTemplateExercise;

#[derive(Parser, Debug)]
#[command(name = "workout-cli", author, version, about = "Log workouts against your templates")]
pub struct Cli {
    /// Base URL of the workout API
    #[arg(long, env = "WORKOUT_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Account email
    #[arg(long, env = "WORKOUT_EMAIL", global = true)]
    pub email: Option<String>,

    /// Account password
    #[arg(long, env = "WORKOUT_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List your workout templates
    Templates,

    /// Show one template, exercises in order
    Show {
        id: TemplateId,
    },

    /// Create a workout template
    NewTemplate {
        #[arg(long)]
        label: String,

        #[arg(long)]
        focus: String,

        /// `NAME:WEIGHT:SETS`, repeat for each exercise
        #[arg(long = "exercise", value_parser = parse_exercise)]
        exercises: Vec<NewTemplateExercise>,
    },

    /// Create a reusable exercise
    NewExercise {
        #[arg(long)]
        name: String,

        /// Target weight in lbs
        #[arg(long)]
        weight: f64,

        /// Number of sets
        #[arg(long)]
        sets: u32,
    },

    /// Record and save a workout for a template
    Log {
        template_id: TemplateId,

        /// Workout date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// `EXERCISE:SET:LBSxREPS`, 1-based, repeat for each set
        #[arg(long = "set", value_parser = parse_set_entry)]
        sets: Vec<SetEntry>,

        /// Fill every set and the date with random values
        #[arg(long)]
        random_fill: bool,
    },

    /// Change your password
    ChangePassword {
        #[arg(long)]
        old: String,

        #[arg(long)]
        new: String,

        #[arg(long)]
        confirm: String,
    },

    /// Print the canonical JSON and SHA-256 of a document (offline)
    Hash {
        /// JSON file; stdin when omitted
        file: Option<PathBuf>,
    },
}

/// One `--set` value, indices already 0-based
#[derive(Debug, Clone, PartialEq)]
pub struct SetEntry {
    pub exercise: usize,
    pub set: usize,
    pub lbs: f64,
    pub reps: u32,
}

/// `NAME:WEIGHT:SETS`; the name may itself contain `:`
pub fn parse_exercise(raw: &str) -> Result<NewTemplateExercise, String> {
    let mut parts = raw.rsplitn(3, ':');
    let (Some(sets), Some(weight), Some(name)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected NAME:WEIGHT:SETS, got {raw:?}"));
    };

    let weight = weight
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid weight {weight:?}"))?;
    let sets = sets
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("invalid set count {sets:?}"))?;

    Ok(NewTemplateExercise::new(name, weight, sets))
}

/// `EXERCISE:SET:LBSxREPS` with 1-based positions
pub fn parse_set_entry(raw: &str) -> Result<SetEntry, String> {
    let invalid = || format!("expected EXERCISE:SET:LBSxREPS, got {raw:?}");

    let parts: Vec<&str> = raw.split(':').map(str::trim).collect();
    let [exercise, set, performed] = parts.as_slice() else {
        return Err(invalid());
    };
    let (lbs, reps) = performed
        .split_once(['x', 'X'])
        .ok_or_else(invalid)?;

    Ok(SetEntry {
        exercise: parse_position(exercise)?,
        set: parse_position(set)?,
        lbs: lbs
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("invalid weight {lbs:?}"))?,
        reps: reps
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("invalid reps {reps:?}"))?,
    })
}

fn parse_position(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("positions start at 1, got {raw:?}")),
    }
}
