//! Application Configuration
//!
//! Configuration for the workout application layer.

/// Environment variable enabling strict integrity mode
pub const ENV_STRICT_INTEGRITY: &str = "WORKOUT_STRICT_INTEGRITY";

/// Workout application configuration
#[derive(Debug, Clone, Default)]
pub struct WorkoutConfig {
    /// Treat a digest mismatch as a failed save (exit status only; the
    /// server has stored the workout either way)
    pub strict_integrity: bool,
}

impl WorkoutConfig {
    /// Create config for development (mismatches are fatal)
    pub fn development() -> Self {
        Self {
            strict_integrity: true,
        }
    }

    /// Load from process environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup
    ///
    /// Unrecognized values leave strict mode off.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let strict_integrity = lookup(ENV_STRICT_INTEGRITY)
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        Self { strict_integrity }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
