//! Email section - rejects candidates embedding the user's email address.

use super::SectionResult;

/// Checks that the candidate does not contain the user's email address as a
/// case-insensitive substring. An empty email never matches.
///
/// # Returns
/// - `Ok(Some(reason))` if the email appears in the candidate
/// - `Ok(None)` if the candidate passes
pub fn email_section(candidate: &str, email: &str) -> SectionResult {
    if email.is_empty() {
        return Ok(None);
    }

    if candidate.to_lowercase().contains(&email.to_lowercase()) {
        return Ok(Some(
            "Password must not contain the user's email address".to_string(),
        ));
    }
    Ok(None)
}
