//! Alphabet handling: policy fallbacks, symbol derivation, candidate sampling.

use rand::Rng;

use crate::types::PasswordPolicy;

/// Symbols used when the policy alphabet contains no non-alphanumeric character.
pub const DEFAULT_SYMBOLS: &str = "!@#$%";

/// Alphabet used when the policy does not constrain allowed characters:
/// 62 alphanumerics plus the default symbols, 68 characters total.
pub const DEFAULT_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%";

/// The alphabet candidates are sampled from: the policy's allowed characters,
/// or [`DEFAULT_ALPHABET`] when the policy leaves them empty.
pub fn effective_alphabet(policy: &PasswordPolicy) -> Vec<char> {
    if policy.allowed_chars().is_empty() {
        DEFAULT_ALPHABET.chars().collect()
    } else {
        policy.allowed_chars().to_vec()
    }
}

/// Every non-alphanumeric character of the alphabet. Non-ASCII-alphanumeric
/// characters are treated as symbols. Falls back to [`DEFAULT_SYMBOLS`] when
/// the alphabet contains none.
pub fn derive_symbols(alphabet: &[char]) -> Vec<char> {
    let symbols: Vec<char> = alphabet
        .iter()
        .copied()
        .filter(|c| !c.is_ascii_alphanumeric())
        .collect();

    if symbols.is_empty() {
        DEFAULT_SYMBOLS.chars().collect()
    } else {
        symbols
    }
}

/// Builds a candidate of `length` characters, each drawn independently and
/// uniformly from `alphabet` (sampling with replacement).
///
/// The index range is inclusive of the last alphabet position; every allowed
/// character is reachable.
pub fn sample_candidate<R: Rng>(alphabet: &[char], length: usize, rng: &mut R) -> String {
    (0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}
