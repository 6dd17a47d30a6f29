//! Quiz record and validation.
//!
//! # Responsibility
//! - Define the `Quiz` record and its stable identifier type.
//! - Validate question/answer text before any write reaches a store.
//! - Normalize answers for comparison.
//!
//! # Invariants
//! - `question` and `answer` are non-empty after trimming at commit time.
//! - Answer comparison ignores surrounding whitespace and letter case.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier of a quiz inside one store.
///
/// Assigned on creation, never reused by the same store.
pub type QuizId = u32;

/// Question/answer pairs seeded into an empty store.
pub const DEFAULT_QUIZZES: &[(&str, &str)] = &[
    ("Capital of Italy", "Rome"),
    ("Capital of France", "Paris"),
    ("Capital of Spain", "Madrid"),
    ("Capital of Portugal", "Lisbon"),
];

/// Validation failures for quiz text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizValidationError {
    EmptyQuestion,
    EmptyAnswer,
}

impl Display for QuizValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyQuestion => write!(f, "question cannot be empty"),
            Self::EmptyAnswer => write!(f, "answer cannot be empty"),
        }
    }
}

impl Error for QuizValidationError {}

/// One question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: QuizId,
    pub question: String,
    pub answer: String,
}

impl Quiz {
    /// Builds a quiz with a store-assigned identifier.
    ///
    /// Does not validate; stores call [`Quiz::validate`] before persisting.
    pub fn new(id: QuizId, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Checks the record invariants.
    ///
    /// # Errors
    /// - `EmptyQuestion` when the question is blank.
    /// - `EmptyAnswer` when the answer is blank.
    pub fn validate(&self) -> Result<(), QuizValidationError> {
        validate_text(&self.question, &self.answer)
    }

    /// Returns whether `response` is an accepted answer for this quiz.
    pub fn is_correct(&self, response: &str) -> bool {
        normalize_answer(response) == normalize_answer(&self.answer)
    }
}

/// Validates question/answer text before a record is built.
pub fn validate_text(question: &str, answer: &str) -> Result<(), QuizValidationError> {
    if question.trim().is_empty() {
        return Err(QuizValidationError::EmptyQuestion);
    }
    if answer.trim().is_empty() {
        return Err(QuizValidationError::EmptyAnswer);
    }
    Ok(())
}

/// Canonical form used when comparing a response with a stored answer.
pub fn normalize_answer(value: &str) -> String {
    value.trim().to_lowercase()
}
