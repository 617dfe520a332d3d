//! User-entered name validation for column and task forms.
//!
//! The engine itself stores names verbatim; this check runs at the form
//! boundary before an add/update action is dispatched.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation errors for user-entered names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameValidationError {
    /// Name is blank after trim.
    Required,
}

impl Display for NameValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "Name is required"),
        }
    }
}

impl Error for NameValidationError {}

/// Trims `value` and rejects blank input.
pub fn normalize_name(value: &str) -> Result<String, NameValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(NameValidationError::Required);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{normalize_name, NameValidationError};

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(normalize_name("  Backlog ").as_deref(), Ok("Backlog"));
    }

    #[test]
    fn blank_names_are_required_errors() {
        assert_eq!(normalize_name(" \t"), Err(NameValidationError::Required));
        assert_eq!(
            NameValidationError::Required.to_string(),
            "Name is required"
        );
    }
}
