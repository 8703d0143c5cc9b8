//! Validation failure reporting
//!
//! A validation failure names the model it occurred on, the attribute at
//! fault, and a message phrased to read after the humanized attribute name
//! ("Title should happen once per post"). Failures accumulate into an
//! `ErrorList` so one save attempt can report everything wrong with it.

use std::fmt;

/// A single validation failure on one attribute of one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Model the failure occurred on (e.g. "Comment")
    pub model: &'static str,
    /// Attribute at fault, in its column form (e.g. "first_name")
    pub attribute: &'static str,
    /// Failure message, phrased to follow the humanized attribute
    pub message: String,
}

impl ValidationError {
    /// Create a validation failure
    pub fn new(model: &'static str, attribute: &'static str, message: impl Into<String>) -> Self {
        Self { model, attribute, message: message.into() }
    }

    /// Humanized attribute plus message: `first_name` → "First name can't be blank"
    pub fn full_message(&self) -> String {
        format!("{} {}", humanize(self.attribute), self.message)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_message())
    }
}

fn humanize(attribute: &str) -> String {
    let spaced = attribute.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}

/// Ordered accumulation of validation failures
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorList(Vec<ValidationError>);

impl ErrorList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a failure
    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    /// Check whether any failure was recorded
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of recorded failures
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate the recorded failures in order
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Check whether any failure was recorded for the given attribute
    pub fn any_for(&self, attribute: &str) -> bool {
        self.0.iter().any(|e| e.attribute == attribute)
    }

    /// Full messages for every failure, in order
    pub fn full_messages(&self) -> Vec<String> {
        self.0.iter().map(ValidationError::full_message).collect()
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_messages().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_message_humanizes_attribute() {
        let err = ValidationError::new("Author", "first_name", "can't be blank");
        assert_eq!(err.full_message(), "First name can't be blank");
    }

    #[test]
    fn test_full_message_custom_text() {
        let err = ValidationError::new("Comment", "title", "should happen once per post");
        assert_eq!(err.full_message(), "Title should happen once per post");
    }

    #[test]
    fn test_error_list_accumulates_in_order() {
        let mut list = ErrorList::new();
        assert!(list.is_empty());
        list.push(ValidationError::new("Post", "content", "has already been taken"));
        list.push(ValidationError::new("Comment", "title", "can't be blank"));
        assert_eq!(list.len(), 2);
        assert!(list.any_for("content"));
        assert!(!list.any_for("first_name"));
        assert_eq!(
            list.full_messages(),
            vec!["Content has already been taken", "Title can't be blank"]
        );
    }

    #[test]
    fn test_error_list_display_joins_messages() {
        let mut list = ErrorList::new();
        list.push(ValidationError::new("Post", "content", "has already been taken"));
        list.push(ValidationError::new("Comment", "title", "should happen once per post"));
        assert_eq!(
            list.to_string(),
            "Content has already been taken, Title should happen once per post"
        );
    }
}
