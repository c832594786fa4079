//! Command execution
//!
//! Wires the HTTP gateways into the use cases and renders results.

use std::io::Read;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use auth::{
    ChangePasswordInput, ChangePasswordUseCase, HttpAuthGateway, Session, SessionState,
    SignInInput, SignInUseCase, SignOutUseCase,
};
use platform::canonical::CanonicalValue;
use platform::client::ApiClient;
use platform::config::{ApiConfig, ConfigError, ENV_API_URL};
use workout::models::{IntegrityCheck, NewTemplate, NewTemplateExercise, WorkoutTemplate};
use workout::{
    CreateExerciseUseCase, CreateTemplateUseCase, GetTemplateUseCase, HttpWorkoutGateway,
    ListTemplatesUseCase, SubmitWorkoutUseCase, WorkoutConfig,
};

use crate::cli::{Cli, Command};

/// Exit status for a saved workout whose digest did not match in strict mode
const EXIT_INTEGRITY_MISMATCH: u8 = 2;

/// Everything a signed-in command needs
pub struct App {
    auth: Arc<HttpAuthGateway>,
    workout: Arc<HttpWorkoutGateway>,
    config: WorkoutConfig,
}

impl App {
    pub fn new(api: ApiConfig, config: WorkoutConfig) -> anyhow::Result<Self> {
        tracing::debug!(base_url = %api.base_url, "Using workout API");
        let client = ApiClient::new(api).context("Failed to build HTTP client")?;
        Ok(Self {
            auth: Arc::new(HttpAuthGateway::new(client.clone())),
            workout: Arc::new(HttpWorkoutGateway::new(client)),
            config,
        })
    }

    /// Sign in, run one command, sign out
    pub async fn run(&self, cli: Cli) -> anyhow::Result<ExitCode> {
        let email = cli
            .email
            .context("Email is required (--email or WORKOUT_EMAIL).")?;
        let password = cli
            .password
            .context("Password is required (--password or WORKOUT_PASSWORD).")?;

        let mut state = SessionState::default();
        let session = SignInUseCase::new(self.auth.clone())
            .execute(SignInInput {
                email,
                password: password.into(),
            })
            .await
            .inspect_err(|e| e.log())?;
        state.sign_in(session);

        let result = match state.current() {
            Some(session) => self.dispatch(session, cli.command).await,
            None => Err(auth::AuthError::NotSignedIn.into()),
        };

        SignOutUseCase::new().execute(&mut state);
        result
    }

    async fn dispatch(&self, session: &Session, command: Command) -> anyhow::Result<ExitCode> {
        match command {
            Command::Templates => self.templates(session).await,
            Command::Show { id } => {
                let template = GetTemplateUseCase::new(self.workout.clone())
                    .execute(session, id)
                    .await?;
                print_template(&template);
                Ok(ExitCode::SUCCESS)
            }
            Command::NewTemplate {
                label,
                focus,
                exercises,
            } => self.new_template(session, NewTemplate::new(label, focus, exercises)).await,
            Command::NewExercise {
                name,
                weight,
                sets,
            } => {
                let draft = NewTemplateExercise::new(name, weight, sets);
                let label = draft.name.clone();
                CreateExerciseUseCase::new(self.workout.clone())
                    .execute(session, draft)
                    .await?;
                println!("Created exercise {label}.");
                Ok(ExitCode::SUCCESS)
            }
            Command::Log {
                template_id,
                date,
                sets,
                random_fill,
            } => {
                let mut day = GetTemplateUseCase::new(self.workout.clone())
                    .start_day(session, template_id)
                    .await?;

                if random_fill {
                    day.random_fill_now(&mut rand::rng());
                }
                if let Some(date) = date {
                    day.set_date(date);
                }
                for entry in &sets {
                    day.record_set(entry.exercise, entry.set, Some(entry.lbs), Some(entry.reps))?;
                }

                let output = SubmitWorkoutUseCase::new(self.workout.clone())
                    .execute(session, &day)
                    .await?;

                let date = if output.submission.date.is_empty() {
                    "(no date)"
                } else {
                    output.submission.date.as_str()
                };
                println!(
                    "Saved {} for {date}: {} of {} sets entered.",
                    day.label,
                    day.completed_sets(),
                    day.exercises.iter().map(|e| e.sets.len()).sum::<usize>()
                );
                Ok(ExitCode::from(self.report_integrity(&output.integrity)))
            }
            Command::ChangePassword { old, new, confirm } => {
                ChangePasswordUseCase::new(self.auth.clone())
                    .execute(
                        session,
                        ChangePasswordInput {
                            old_password: old.into(),
                            new_password: new.into(),
                            confirm_password: confirm.into(),
                        },
                    )
                    .await
                    .inspect_err(|e| e.log())?;
                println!("Password updated.");
                Ok(ExitCode::SUCCESS)
            }
            Command::Hash { file } => hash_document(file.as_deref()),
        }
    }

    async fn templates(&self, session: &Session) -> anyhow::Result<ExitCode> {
        let templates = ListTemplatesUseCase::new(self.workout.clone())
            .execute(session)
            .await?;

        if templates.is_empty() {
            println!("No templates yet.");
        }
        for t in &templates {
            println!(
                "{:>4}  {} — {}  ({} exercises, {} sets)",
                t.id.get(),
                t.label,
                t.focus,
                t.exercises.len(),
                t.total_sets()
            );
        }
        Ok(ExitCode::SUCCESS)
    }

    async fn new_template(&self, session: &Session, draft: NewTemplate) -> anyhow::Result<ExitCode> {
        let label = draft.label.clone();
        let created = CreateTemplateUseCase::new(self.workout.clone())
            .execute(session, draft)
            .await?;

        match created {
            Some(template) => println!("Created template {label} (id {}).", template.id),
            None => println!("Created template {label}."),
        }
        Ok(ExitCode::SUCCESS)
    }

    /// Print the verdict; returns the exit status it implies
    fn report_integrity(&self, check: &IntegrityCheck) -> u8 {
        match check {
            IntegrityCheck::Verified { hash } => {
                println!("Integrity verified: {hash}");
                0
            }
            IntegrityCheck::Mismatch { server, local } => {
                let server = if server.is_empty() { "returned none" } else { server.as_str() };
                println!("Warning: hash mismatch (server {server}, local {local}).");
                if self.config.strict_integrity {
                    EXIT_INTEGRITY_MISMATCH
                } else {
                    0
                }
            }
        }
    }
}

fn print_template(template: &WorkoutTemplate) {
    println!("{} — {}", template.label, template.focus);
    for (n, e) in template.ordered_exercises().iter().enumerate() {
        println!(
            "  {}. {}  {} lbs x {} sets",
            n + 1,
            e.name,
            e.target_weight,
            e.num_sets
        );
    }
}

/// API settings from the environment, with `--api-url` taking the place
/// of `WORKOUT_API_URL` when given
pub fn resolve_api_config<F>(api_url: Option<&str>, lookup: F) -> Result<ApiConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    ApiConfig::from_lookup(|name| match (name, api_url) {
        (ENV_API_URL, Some(url)) => Some(url.to_string()),
        _ => lookup(name),
    })
}

/// Canonical JSON of a document followed by its SHA-256, one per line
pub fn render_digest(raw: &str) -> anyhow::Result<String> {
    let value: serde_json::Value = serde_json::from_str(raw).context("Input is not valid JSON")?;
    let canonical = CanonicalValue::from_value(&value).to_json();
    Ok(format!("{canonical}\n{}", canonical.sha256_hex()))
}

/// Canonicalize a JSON document and print it with its digest
pub fn hash_document(file: Option<&Path>) -> anyhow::Result<ExitCode> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    println!("{}", render_digest(&raw)?);
    Ok(ExitCode::SUCCESS)
}
