//! Outcome of validating sign-up input.

use core::fmt;

/// Result of [`crate::rules::validate_user_input`].
///
/// Renders as a human-readable message. Failures contain `Invalid username`
/// and/or `Invalid age`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationResult {
    Success,
    InvalidUsername,
    InvalidAge,
    InvalidUsernameAndAge,
}

impl ValidationResult {
    /// Combine the two field checks into one result.
    #[must_use]
    pub const fn from_checks(username_ok: bool, age_ok: bool) -> Self {
        match (username_ok, age_ok) {
            (true, true) => Self::Success,
            (false, true) => Self::InvalidUsername,
            (true, false) => Self::InvalidAge,
            (false, false) => Self::InvalidUsernameAndAge,
        }
    }

    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "Validation successful"),
            Self::InvalidUsername => write!(f, "Invalid username"),
            Self::InvalidAge => write!(f, "Invalid age"),
            Self::InvalidUsernameAndAge => write!(f, "Invalid username, Invalid age"),
        }
    }
}
