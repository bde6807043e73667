//! Core domain types: password policies, user profiles, validation outcomes.

/// Password length used when a policy does not specify a max length.
pub const DEFAULT_MAX_LENGTH: usize = 32;

/// Password policy metadata as reported by the external policy engine.
///
/// `allowed_chars` preserves insertion order and contains no duplicates.
/// An empty set means the policy does not constrain the alphabet; callers
/// fall back to [`crate::DEFAULT_ALPHABET`] in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    max_length: Option<usize>,
    allowed_chars: Vec<char>,
}

impl PasswordPolicy {
    /// Creates a policy, deduplicating `allowed_chars` while preserving
    /// first-occurrence order.
    pub fn new(max_length: Option<usize>, allowed_chars: impl IntoIterator<Item = char>) -> Self {
        let mut chars: Vec<char> = Vec::new();
        for c in allowed_chars {
            if !chars.contains(&c) {
                chars.push(c);
            }
        }
        Self {
            max_length,
            allowed_chars: chars,
        }
    }

    /// Policy with no constraints at all (defaults apply everywhere).
    pub fn unconstrained() -> Self {
        Self::new(None, std::iter::empty())
    }

    /// The max length declared by the policy, if any.
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// The length generated passwords should have: the policy's max length,
    /// or [`DEFAULT_MAX_LENGTH`] when the policy does not specify one.
    pub fn effective_max_length(&self) -> usize {
        self.max_length.unwrap_or(DEFAULT_MAX_LENGTH)
    }

    /// The policy's allowed characters, in insertion order.
    pub fn allowed_chars(&self) -> &[char] {
        &self.allowed_chars
    }
}

/// Immutable snapshot of a directory user, fetched once per generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    /// Opaque identity key the policy engine resolves policies against.
    pub key: String,
    /// The login the profile was resolved from.
    pub login: String,
    pub email: String,
    pub display_name: String,
}

/// Result of submitting a candidate to the external policy validator:
/// whether the candidate passed, plus the policy the validator applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub policy: PasswordPolicy,
}
