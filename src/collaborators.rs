//! External collaborator traits.
//!
//! The directory, the policy validator and the identity service live in the
//! host identity product; this crate only defines the seams. All calls are
//! synchronous and blocking, and no timeout or retry is applied here - a
//! failure in a collaborator propagates directly.

use secrecy::SecretString;

use crate::error::{DirectoryError, IdentityError, ValidatorError};
use crate::types::{UserProfile, ValidationOutcome};

/// Resolves a login identifier to a user profile snapshot.
pub trait UserDirectory {
    fn lookup(&self, login: &str) -> Result<UserProfile, DirectoryError>;
}

/// Validates a candidate password against the externally managed policy for
/// a given identity key, and reports the policy metadata it applied.
///
/// Submitting an empty candidate is a legal probe: the caller only wants the
/// [`crate::PasswordPolicy`] out of the outcome.
pub trait PolicyValidator {
    fn validate(&self, candidate: &str, user_key: &str) -> Result<ValidationOutcome, ValidatorError>;
}

/// Mutates the user's password in the host identity product.
pub trait IdentityService {
    /// Sets `new_password` as the user's password. `force_change` requires a
    /// change at next login; `notify` sends the product's notification email.
    fn change_password(
        &self,
        login: &str,
        new_password: &SecretString,
        force_change: bool,
        notify: bool,
    ) -> Result<(), IdentityError>;

    /// Triggers the product's own directory-managed password reset.
    fn reset_password(
        &self,
        login: &str,
        force_change: bool,
        notify: bool,
    ) -> Result<(), IdentityError>;
}
