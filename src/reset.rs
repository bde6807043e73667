//! Reset flows - drive the identity service once a password is finalized.
//!
//! Two flows mirror the two confirmation paths of the host UI: generate a
//! policy-conforming password and set it, or trigger the product's own
//! directory-managed reset. Both produce the single outbound UI message.

use secrecy::ExposeSecret;

use crate::collaborators::{IdentityService, PolicyValidator, UserDirectory};
use crate::config::GeneratorConfig;
use crate::error::ResetError;
use crate::generator::PasswordGenerator;

/// Severity of an outbound UI message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// Message surfaced to the UI layer. Summary and detail carry the same text,
/// as the host's message widget displays them interchangeably.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiMessage {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
}

impl UiMessage {
    pub fn info(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            severity: Severity::Info,
            summary: text.clone(),
            detail: text,
        }
    }

    /// Generic internal-error message for the handler boundary. Only the
    /// error's display string is exposed; full detail belongs in the
    /// diagnostic log, not in the UI.
    pub fn internal_error(err: &dyn std::fmt::Display) -> Self {
        let text = format!("An internal error has occurred: {}", err);
        Self {
            severity: Severity::Error,
            summary: text.clone(),
            detail: text,
        }
    }
}

/// Ties the generator and the identity service together for one request.
pub struct ResetFlow<'a, D, V, I> {
    directory: &'a D,
    validator: &'a V,
    identity: &'a I,
    config: GeneratorConfig,
}

impl<'a, D, V, I> ResetFlow<'a, D, V, I>
where
    D: UserDirectory,
    V: PolicyValidator,
    I: IdentityService,
{
    pub fn new(directory: &'a D, validator: &'a V, identity: &'a I) -> Self {
        Self::with_config(directory, validator, identity, GeneratorConfig::default())
    }

    pub fn with_config(
        directory: &'a D,
        validator: &'a V,
        identity: &'a I,
        config: GeneratorConfig,
    ) -> Self {
        Self {
            directory,
            validator,
            identity,
            config,
        }
    }

    /// Generates a policy-conforming password, sets it as the user's
    /// password (change required at next login, no notification email), and
    /// returns the info message that reveals the generated password.
    ///
    /// Leading and trailing whitespace in `login` is ignored, matching how
    /// the bound UI attribute arrives.
    pub fn reset_with_generated(&self, login: &str) -> Result<UiMessage, ResetError> {
        let login = login.trim();

        let generator =
            PasswordGenerator::with_config(self.directory, self.validator, self.config.clone());

        #[cfg(feature = "async")]
        let password = generator.generate(login, None)?;

        #[cfg(not(feature = "async"))]
        let password = generator.generate(login)?;

        self.identity.change_password(login, &password, true, false)?;

        #[cfg(feature = "tracing")]
        tracing::info!("Reset password for user {}", login);

        Ok(UiMessage::info(format!(
            "Generated password for {}: {}",
            login,
            password.expose_secret()
        )))
    }

    /// Triggers the product's own directory-managed reset (change required
    /// at next login, notification email sent) and returns the info message.
    pub fn reset_directory_managed(&self, login: &str) -> Result<UiMessage, ResetError> {
        let login = login.trim();

        self.identity.reset_password(login, true, true)?;

        #[cfg(feature = "tracing")]
        tracing::info!("Directory-managed reset for user {}", login);

        Ok(UiMessage::info(format!(
            "Password for user {} has been reset successfully!",
            login
        )))
    }
}
