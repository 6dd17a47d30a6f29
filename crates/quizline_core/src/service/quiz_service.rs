//! Quiz use-case service.
//!
//! # Responsibility
//! - Parse `<id>` command arguments into `QuizId`.
//! - Delegate CRUD to any `QuizRepository` backend.
//! - Seed default quizzes into an empty store.
//!
//! # Invariants
//! - Missing or non-numeric ids surface as `InvalidArgument`, never `NotFound`.
//! - The service stays storage-agnostic.

use crate::model::quiz::{Quiz, QuizId, QuizValidationError};
use crate::repo::quiz_repo::{QuizRepository, RepoError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, QuizServiceError>;

/// Errors reported to the command layer.
#[derive(Debug)]
pub enum QuizServiceError {
    /// `<id>` argument is missing or not a non-negative integer.
    InvalidArgument(String),
    /// Target quiz does not exist.
    NotFound(QuizId),
    /// Question or answer failed validation.
    Validation(QuizValidationError),
    /// Any other persistence failure.
    Repo(RepoError),
}

impl Display for QuizServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(message) => write!(f, "{message}"),
            Self::NotFound(id) => write!(f, "quiz [{id}] does not exist"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for QuizServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for QuizServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

/// Parses the raw `<id>` argument of `show`, `edit`, `delete` and `test`.
pub fn parse_quiz_id(arg: Option<&str>) -> ServiceResult<QuizId> {
    let raw = match arg.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => {
            return Err(QuizServiceError::InvalidArgument(
                "missing <id> argument".to_string(),
            ))
        }
    };

    raw.parse::<QuizId>().map_err(|_| {
        QuizServiceError::InvalidArgument(format!("invalid <id> argument `{raw}`"))
    })
}

/// Use-case service over a quiz repository.
pub struct QuizService<R: QuizRepository> {
    repo: R,
}

impl<R: QuizRepository> QuizService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// All quizzes in insertion order.
    pub fn list(&self) -> ServiceResult<Vec<Quiz>> {
        Ok(self.repo.list_quizzes()?)
    }

    pub fn count(&self) -> ServiceResult<usize> {
        Ok(self.repo.count_quizzes()?)
    }

    /// Resolves one quiz from a raw `<id>` argument.
    pub fn get(&self, arg: Option<&str>) -> ServiceResult<Quiz> {
        let id = parse_quiz_id(arg)?;
        Ok(self.repo.get_quiz(id)?)
    }

    pub fn add(&self, question: &str, answer: &str) -> ServiceResult<Quiz> {
        Ok(self.repo.create_quiz(question, answer)?)
    }

    /// Replaces question and answer of an existing quiz; the id is kept.
    pub fn update(&self, arg: Option<&str>, question: &str, answer: &str) -> ServiceResult<Quiz> {
        let id = parse_quiz_id(arg)?;
        Ok(self.repo.update_quiz(id, question, answer)?)
    }

    pub fn delete(&self, arg: Option<&str>) -> ServiceResult<QuizId> {
        let id = parse_quiz_id(arg)?;
        self.repo.delete_quiz(id)?;
        Ok(id)
    }

    /// Inserts `defaults` when the store holds no quizzes.
    ///
    /// Returns the number of inserted records (0 for a non-empty store).
    pub fn seed_if_empty(&self, defaults: &[(&str, &str)]) -> ServiceResult<usize> {
        if self.repo.count_quizzes()? > 0 {
            return Ok(0);
        }

        for (question, answer) in defaults {
            self.repo.create_quiz(question, answer)?;
        }
        info!(
            "event=seed module=service status=ok inserted={}",
            defaults.len()
        );
        Ok(defaults.len())
    }
}
