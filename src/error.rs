//! Error types for directory lookups, policy validation and generation.

use thiserror::Error;

/// Errors reported by a [`crate::UserDirectory`].
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("no such user: {0}")]
    NoSuchUser(String),
    #[error("user lookup failed: {0}")]
    Lookup(String),
}

/// Transport or service failure in the external policy validator.
#[derive(Error, Debug)]
#[error("policy validation call failed: {0}")]
pub struct ValidatorError(pub String);

/// Failure reported by the external identity service mutation calls.
#[derive(Error, Debug)]
#[error("identity service call failed: {0}")]
pub struct IdentityError(pub String);

/// Errors from [`crate::PasswordGenerator::generate`].
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("no such user: {0}")]
    UserNotFound(String),
    #[error("user lookup failed: {0}")]
    LookupFailure(String),
    #[error(transparent)]
    Validator(#[from] ValidatorError),
    /// The configured attempt budget was exhausted without producing a
    /// candidate accepted by both the external and the local policy.
    #[error("no candidate satisfied both policies after {attempts} attempts")]
    PolicyUnsatisfiable { attempts: u32 },
    #[cfg(feature = "async")]
    #[error("password generation cancelled")]
    Cancelled,
}

impl From<DirectoryError> for GenerateError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::NoSuchUser(login) => GenerateError::UserNotFound(login),
            DirectoryError::Lookup(detail) => GenerateError::LookupFailure(detail),
        }
    }
}

/// Errors from the reset flows in [`crate::ResetFlow`].
#[derive(Error, Debug)]
pub enum ResetError {
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error(transparent)]
    Identity(#[from] IdentityError),
}
