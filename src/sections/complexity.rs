//! Complexity section - requires at least one digit or symbol.

use super::SectionResult;

/// Checks that the candidate contains at least one ASCII digit or at least
/// one character from the derived symbol set.
///
/// # Returns
/// - `Ok(Some(reason))` if the candidate has neither a digit nor a symbol
/// - `Ok(None)` if the candidate passes
pub fn complexity_section(candidate: &str, symbols: &[char]) -> SectionResult {
    let has_digit = candidate.chars().any(|c| c.is_ascii_digit());
    let has_symbol = candidate.chars().any(|c| symbols.contains(&c));

    if !has_digit && !has_symbol {
        return Ok(Some(
            "Password must contain at least one number or symbol".to_string(),
        ));
    }
    Ok(None)
}
