//! Question value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A customer question submitted to the desk (Value Object)
///
/// Guaranteed non-blank. The original text is kept as-is, including any
/// surrounding whitespace, because it doubles as the conversation handed to
/// the customizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Create a new question, rejecting blank content
    pub fn new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::EmptyQuestion);
        }
        Ok(Self { content })
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::new("Where is my order?").unwrap();
        assert_eq!(q.content(), "Where is my order?");
    }

    #[test]
    fn test_blank_question_rejected() {
        assert_eq!(Question::new(""), Err(DomainError::EmptyQuestion));
        assert_eq!(Question::new(" \n\t "), Err(DomainError::EmptyQuestion));
    }

    #[test]
    fn test_content_is_not_trimmed() {
        let q = Question::new("  Hi, I'm Sam  ").unwrap();
        assert_eq!(q.into_content(), "  Hi, I'm Sam  ");
    }
}
