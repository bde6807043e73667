//! Generator configuration.

/// Attempt budget used when nothing else is configured.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100_000;

/// Environment variable overriding the attempt budget.
/// `0` means unbounded; an unset or unparsable value means the default.
pub const MAX_ATTEMPTS_ENV: &str = "PWD_RESET_MAX_ATTEMPTS";

/// Tuning for the candidate generation loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Maximum candidate attempts before giving up with
    /// [`crate::GenerateError::PolicyUnsatisfiable`].
    /// `None` loops until a candidate is accepted.
    pub max_attempts: Option<u32>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
        }
    }
}

impl GeneratorConfig {
    /// Configuration with no attempt bound.
    pub fn unbounded() -> Self {
        Self { max_attempts: None }
    }

    /// Reads the configuration from the environment.
    ///
    /// `PWD_RESET_MAX_ATTEMPTS=0` selects the unbounded loop; any other
    /// parsable value becomes the budget; unset or invalid values fall back
    /// to [`DEFAULT_MAX_ATTEMPTS`].
    pub fn from_env() -> Self {
        match std::env::var(MAX_ATTEMPTS_ENV).ok().and_then(|v| v.parse::<u32>().ok()) {
            Some(0) => Self::unbounded(),
            Some(n) => Self {
                max_attempts: Some(n),
            },
            None => Self::default(),
        }
    }
}
