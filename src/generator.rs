//! Password generator - the candidate generation and validation loop.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::charset::{derive_symbols, effective_alphabet, sample_candidate};
use crate::collaborators::{PolicyValidator, UserDirectory};
use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::sections::{
    SectionResult, complexity_section, display_name_section, email_section,
};
use crate::types::UserProfile;

/// Generates passwords that satisfy both the externally managed policy and
/// the local organizational rules.
///
/// Borrows a [`UserDirectory`] and a [`PolicyValidator`]; both are queried
/// synchronously. One generation run resolves the user profile once, probes
/// the validator once for policy metadata, then loops over random candidates
/// until one is accepted.
pub struct PasswordGenerator<'a, D, V> {
    directory: &'a D,
    validator: &'a V,
    config: GeneratorConfig,
}

impl<'a, D, V> PasswordGenerator<'a, D, V>
where
    D: UserDirectory,
    V: PolicyValidator,
{
    /// Generator with the default attempt budget.
    pub fn new(directory: &'a D, validator: &'a V) -> Self {
        Self::with_config(directory, validator, GeneratorConfig::default())
    }

    pub fn with_config(directory: &'a D, validator: &'a V, config: GeneratorConfig) -> Self {
        Self {
            directory,
            validator,
            config,
        }
    }

    /// Generates a password for the user identified by `login`.
    ///
    /// # Arguments
    /// * `login` - The directory login of the target user
    /// * `token` - Optional cancellation token (async feature only)
    ///
    /// # Errors
    /// - [`GenerateError::UserNotFound`] if the login does not exist
    /// - [`GenerateError::LookupFailure`] if the directory is unreachable
    /// - [`GenerateError::Validator`] if a validation call fails
    /// - [`GenerateError::PolicyUnsatisfiable`] if the attempt budget runs out
    /// - [`GenerateError::Cancelled`] if the token is cancelled (async only)
    pub fn generate(
        &self,
        login: &str,
        #[cfg(feature = "async")] token: Option<CancellationToken>,
    ) -> Result<SecretString, GenerateError> {
        let profile = self.directory.lookup(login)?;

        #[cfg(feature = "tracing")]
        tracing::info!("Generating password for login: {}", profile.login);

        // Probe with an empty candidate purely to learn the applicable
        // policy; the probe's validity verdict is ignored.
        let probe = self.validator.validate("", &profile.key)?;
        let policy = probe.policy;

        let max_length = policy.effective_max_length();
        let alphabet = effective_alphabet(&policy);
        let symbols = derive_symbols(&alphabet);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Policy: max length {}, alphabet size {}, {} symbols",
            max_length,
            alphabet.len(),
            symbols.len()
        );

        let mut rng = rand::thread_rng();
        let mut attempts: u32 = 0;

        loop {
            #[cfg(feature = "async")]
            {
                if let Some(ref t) = token {
                    if t.is_cancelled() {
                        #[cfg(feature = "tracing")]
                        tracing::info!("Password generation cancelled after {} attempts", attempts);
                        return Err(GenerateError::Cancelled);
                    }
                }
            }

            if let Some(max) = self.config.max_attempts {
                if attempts >= max {
                    #[cfg(feature = "tracing")]
                    tracing::error!("Attempt budget exhausted: {} attempts", attempts);
                    return Err(GenerateError::PolicyUnsatisfiable { attempts });
                }
            }
            attempts = attempts.saturating_add(1);

            let candidate = sample_candidate(&alphabet, max_length, &mut rng);

            let outcome = self.validator.validate(&candidate, &profile.key)?;
            if !outcome.is_valid {
                #[cfg(feature = "tracing")]
                tracing::debug!("Candidate rejected by external policy");
                continue;
            }

            match first_section_failure(&candidate, &symbols, &profile) {
                Ok(None) => {
                    #[cfg(feature = "tracing")]
                    tracing::info!("Accepted candidate after {} attempts", attempts);
                    return Ok(SecretString::new(candidate.into()));
                }
                Ok(Some(_reason)) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("Candidate rejected by local policy: {}", _reason);
                }
                Err(()) => {
                    #[cfg(feature = "tracing")]
                    tracing::error!("Fatal error in local policy section");
                }
            }
        }
    }

    /// Async version that sends the generation result via channel.
    #[cfg(feature = "async")]
    pub async fn generate_tx(
        &self,
        login: &str,
        token: CancellationToken,
        tx: mpsc::Sender<Result<SecretString, GenerateError>>,
    ) {
        #[cfg(feature = "tracing")]
        tracing::info!("generation is about to start...");

        let result = self.generate(login, Some(token));

        if tx.send(result).await.is_err() {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send password generation result");
        }
    }
}

/// Runs the local policy sections in order and reports the first failure.
fn first_section_failure(
    candidate: &str,
    symbols: &[char],
    profile: &UserProfile,
) -> SectionResult {
    let results = [
        complexity_section(candidate, symbols),
        email_section(candidate, &profile.email),
        display_name_section(candidate, &profile.display_name),
    ];

    for result in results {
        match result {
            Ok(Some(reason)) => return Ok(Some(reason)),
            Ok(None) => {}
            Err(()) => return Err(()),
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DirectoryError, ValidatorError};
    use crate::types::{PasswordPolicy, ValidationOutcome};
    use secrecy::ExposeSecret;
    use std::cell::RefCell;

    fn jo_lee() -> UserProfile {
        UserProfile {
            key: "42".to_string(),
            login: "jlee".to_string(),
            email: "j@x.com".to_string(),
            display_name: "Jo Lee".to_string(),
        }
    }

    /// Directory holding a single known user.
    struct SingleUserDirectory {
        profile: UserProfile,
    }

    impl UserDirectory for SingleUserDirectory {
        fn lookup(&self, login: &str) -> Result<UserProfile, DirectoryError> {
            if login == self.profile.login {
                Ok(self.profile.clone())
            } else {
                Err(DirectoryError::NoSuchUser(login.to_string()))
            }
        }
    }

    /// Directory that is always unreachable.
    struct UnreachableDirectory;

    impl UserDirectory for UnreachableDirectory {
        fn lookup(&self, _login: &str) -> Result<UserProfile, DirectoryError> {
            Err(DirectoryError::Lookup("connection refused".to_string()))
        }
    }

    /// Validator that accepts every non-empty candidate and records the
    /// candidates it was asked about.
    struct RecordingValidator {
        policy: PasswordPolicy,
        calls: RefCell<Vec<String>>,
    }

    impl RecordingValidator {
        fn with_policy(policy: PasswordPolicy) -> Self {
            Self {
                policy,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl PolicyValidator for RecordingValidator {
        fn validate(
            &self,
            candidate: &str,
            _user_key: &str,
        ) -> Result<ValidationOutcome, ValidatorError> {
            self.calls.borrow_mut().push(candidate.to_string());
            Ok(ValidationOutcome {
                is_valid: !candidate.is_empty(),
                policy: self.policy.clone(),
            })
        }
    }

    /// Validator that never accepts anything.
    struct RejectingValidator {
        policy: PasswordPolicy,
    }

    impl PolicyValidator for RejectingValidator {
        fn validate(
            &self,
            _candidate: &str,
            _user_key: &str,
        ) -> Result<ValidationOutcome, ValidatorError> {
            Ok(ValidationOutcome {
                is_valid: false,
                policy: self.policy.clone(),
            })
        }
    }

    /// Validator whose transport always fails.
    struct FailingValidator;

    impl PolicyValidator for FailingValidator {
        fn validate(
            &self,
            _candidate: &str,
            _user_key: &str,
        ) -> Result<ValidationOutcome, ValidatorError> {
            Err(ValidatorError("service unavailable".to_string()))
        }
    }

    fn run_generate<D, V>(
        generator: &PasswordGenerator<'_, D, V>,
        login: &str,
    ) -> Result<SecretString, GenerateError>
    where
        D: UserDirectory,
        V: PolicyValidator,
    {
        #[cfg(feature = "async")]
        return generator.generate(login, None);

        #[cfg(not(feature = "async"))]
        generator.generate(login)
    }

    #[test]
    fn test_generate_spec_example_policy() {
        let directory = SingleUserDirectory { profile: jo_lee() };
        let validator = RecordingValidator::with_policy(PasswordPolicy::new(
            Some(10),
            "abc123!@#".chars(),
        ));
        let generator = PasswordGenerator::new(&directory, &validator);

        let password = run_generate(&generator, "jlee").expect("generation should succeed");
        let pwd = password.expose_secret();
        let allowed: Vec<char> = "abc123!@#".chars().collect();
        let symbols: Vec<char> = "!@#".chars().collect();

        assert_eq!(pwd.chars().count(), 10);
        assert!(pwd.chars().all(|c| allowed.contains(&c)));
        assert!(
            pwd.chars().any(|c| c.is_ascii_digit()) || pwd.chars().any(|c| symbols.contains(&c))
        );
        assert!(!pwd.to_lowercase().contains("j@x.com"));
        assert!(!pwd.to_lowercase().contains("jolee"));
    }

    #[test]
    fn test_generate_defaults_when_policy_unconstrained() {
        let directory = SingleUserDirectory { profile: jo_lee() };
        let validator = RecordingValidator::with_policy(PasswordPolicy::unconstrained());
        let generator = PasswordGenerator::new(&directory, &validator);

        let password = run_generate(&generator, "jlee").expect("generation should succeed");
        let pwd = password.expose_secret();
        let alphabet: Vec<char> = crate::charset::DEFAULT_ALPHABET.chars().collect();

        assert_eq!(pwd.chars().count(), 32);
        assert!(pwd.chars().all(|c| alphabet.contains(&c)));
    }

    #[test]
    fn test_generate_probes_with_empty_candidate_first() {
        let directory = SingleUserDirectory { profile: jo_lee() };
        let validator = RecordingValidator::with_policy(PasswordPolicy::new(
            Some(12),
            "abcdef123!".chars(),
        ));
        let generator = PasswordGenerator::new(&directory, &validator);

        run_generate(&generator, "jlee").expect("generation should succeed");

        let calls = validator.calls.borrow();
        assert!(calls.len() >= 2);
        assert_eq!(calls[0], "");
        assert!(calls[1..].iter().all(|c| !c.is_empty()));
    }

    #[test]
    fn test_generate_unknown_login() {
        let directory = SingleUserDirectory { profile: jo_lee() };
        let validator = RecordingValidator::with_policy(PasswordPolicy::unconstrained());
        let generator = PasswordGenerator::new(&directory, &validator);

        let result = run_generate(&generator, "ghost");
        assert!(matches!(result, Err(GenerateError::UserNotFound(login)) if login == "ghost"));
    }

    #[test]
    fn test_generate_directory_unreachable() {
        let directory = UnreachableDirectory;
        let validator = RecordingValidator::with_policy(PasswordPolicy::unconstrained());
        let generator = PasswordGenerator::new(&directory, &validator);

        let result = run_generate(&generator, "jlee");
        assert!(matches!(result, Err(GenerateError::LookupFailure(_))));
    }

    #[test]
    fn test_generate_validator_failure_propagates() {
        let directory = SingleUserDirectory { profile: jo_lee() };
        let validator = FailingValidator;
        let generator = PasswordGenerator::new(&directory, &validator);

        let result = run_generate(&generator, "jlee");
        assert!(matches!(result, Err(GenerateError::Validator(_))));
    }

    #[test]
    fn test_generate_attempt_budget_exhausted() {
        let directory = SingleUserDirectory { profile: jo_lee() };
        let validator = RejectingValidator {
            policy: PasswordPolicy::unconstrained(),
        };
        let generator = PasswordGenerator::with_config(
            &directory,
            &validator,
            GeneratorConfig {
                max_attempts: Some(50),
            },
        );

        let result = run_generate(&generator, "jlee");
        assert!(matches!(
            result,
            Err(GenerateError::PolicyUnsatisfiable { attempts: 50 })
        ));
    }

    #[test]
    fn test_generate_symbol_fallback_applies() {
        // Alphabet has no symbols; the digit-or-symbol rule must still be
        // satisfiable through digits.
        let directory = SingleUserDirectory { profile: jo_lee() };
        let validator = RecordingValidator::with_policy(PasswordPolicy::new(
            Some(16),
            "abcdefgh01234567".chars(),
        ));
        let generator = PasswordGenerator::new(&directory, &validator);

        let password = run_generate(&generator, "jlee").expect("generation should succeed");
        assert!(password.expose_secret().chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_first_section_failure_order() {
        let profile = jo_lee();
        let symbols: Vec<char> = "!@#".chars().collect();

        // No digit and no symbol: complexity fails first.
        let failure = first_section_failure("abcdefgh", &symbols, &profile);
        assert!(matches!(failure, Ok(Some(reason)) if reason.contains("number or symbol")));

        // Complexity passes, email embedded.
        let failure = first_section_failure("1j@x.comz", &symbols, &profile);
        assert!(matches!(failure, Ok(Some(reason)) if reason.contains("email")));

        // Complexity and email pass, display name embedded.
        let failure = first_section_failure("1joleez", &symbols, &profile);
        assert!(matches!(failure, Ok(Some(reason)) if reason.contains("display name")));

        assert_eq!(first_section_failure("1abcdefg", &symbols, &profile), Ok(None));
    }
}
