//! Question value object

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// A mathematics question submitted for comparison (Value Object)
///
/// Lives for exactly one comparison call. Construction rejects empty or
/// whitespace-only input, so holding a `Question` means the caller has
/// already performed the non-empty check the comparison flow relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Try to create a new question, returning `None` if it is blank
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl TryFrom<&str> for Question {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Question::try_new(s).ok_or(DomainError::EmptyQuestion)
    }
}

impl TryFrom<String> for Question {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Question::try_new(s).ok_or(DomainError::EmptyQuestion)
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
