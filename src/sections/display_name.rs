//! Display name section - rejects candidates embedding the user's name.

use super::SectionResult;

/// Checks that the candidate does not contain the user's display name, with
/// all whitespace stripped, as a case-insensitive substring. A name that is
/// empty after stripping never matches.
///
/// # Returns
/// - `Ok(Some(reason))` if the stripped display name appears in the candidate
/// - `Ok(None)` if the candidate passes
pub fn display_name_section(candidate: &str, display_name: &str) -> SectionResult {
    let stripped: String = display_name
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    if stripped.is_empty() {
        return Ok(None);
    }

    if candidate.to_lowercase().contains(&stripped) {
        return Ok(Some(
            "Password must not contain the user's display name".to_string(),
        ));
    }
    Ok(None)
}
