//! Input validation utilities.
//!
//! The store itself mirrors whatever names it is given (see
//! [`RecordStore::create`](crate::store::RecordStore::create)); non-empty
//! enforcement belongs at the boundary the collaborator exposes to users.
//! This module provides the validated type that boundary uses.

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("text cannot be empty")]
    Empty,
}

/// A string type that guarantees non-empty content.
///
/// Surrounding whitespace is trimmed during construction; an input that is
/// empty after trimming is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper, returning the validated string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_trims_surrounding_whitespace() {
        let text = NonEmptyText::new("  Ada ").unwrap();
        assert_eq!(text.as_str(), "Ada");
    }

    #[test]
    fn rejects_empty_and_whitespace_only_input() {
        assert!(matches!(NonEmptyText::new(""), Err(TextError::Empty)));
        assert!(matches!(NonEmptyText::new("   \t"), Err(TextError::Empty)));
    }

    #[test]
    fn preserves_interior_whitespace_and_non_ascii() {
        let text = NonEmptyText::new("Ayşe  Kaya").unwrap();
        assert_eq!(text.as_str(), "Ayşe  Kaya");
    }
}
