//! In-process array-backed quiz repository.
//!
//! # Invariants
//! - Ids start at 1 and grow monotonically; deleted ids are never reused.
//! - Records keep insertion order; updates replace text in place.

use crate::model::quiz::{validate_text, Quiz, QuizId};
use crate::repo::quiz_repo::{QuizRepository, RepoError, RepoResult};
use std::cell::RefCell;

#[derive(Debug)]
struct MemoryState {
    quizzes: Vec<Quiz>,
    next_id: QuizId,
}

/// Vec-backed repository for sessions that need no durable storage.
///
/// Single-threaded by construction (`RefCell`), matching the one-caller
/// model of the command loop.
#[derive(Debug)]
pub struct MemoryQuizRepository {
    state: RefCell<MemoryState>,
}

impl Default for MemoryQuizRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryQuizRepository {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(MemoryState {
                quizzes: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn position(state: &MemoryState, id: QuizId) -> RepoResult<usize> {
        state
            .quizzes
            .iter()
            .position(|quiz| quiz.id == id)
            .ok_or(RepoError::NotFound(id))
    }
}

impl QuizRepository for MemoryQuizRepository {
    fn list_quizzes(&self) -> RepoResult<Vec<Quiz>> {
        Ok(self.state.borrow().quizzes.clone())
    }

    fn get_quiz(&self, id: QuizId) -> RepoResult<Quiz> {
        let state = self.state.borrow();
        let index = Self::position(&state, id)?;
        Ok(state.quizzes[index].clone())
    }

    fn create_quiz(&self, question: &str, answer: &str) -> RepoResult<Quiz> {
        validate_text(question, answer)?;

        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id = id
            .checked_add(1)
            .ok_or_else(|| RepoError::InvalidData("quiz id space exhausted".to_string()))?;

        let quiz = Quiz::new(id, question, answer);
        state.quizzes.push(quiz.clone());
        Ok(quiz)
    }

    fn update_quiz(&self, id: QuizId, question: &str, answer: &str) -> RepoResult<Quiz> {
        validate_text(question, answer)?;

        let mut state = self.state.borrow_mut();
        let index = Self::position(&state, id)?;
        let quiz = &mut state.quizzes[index];
        quiz.question = question.to_string();
        quiz.answer = answer.to_string();
        Ok(quiz.clone())
    }

    fn delete_quiz(&self, id: QuizId) -> RepoResult<()> {
        let mut state = self.state.borrow_mut();
        let index = Self::position(&state, id)?;
        state.quizzes.remove(index);
        Ok(())
    }

    fn count_quizzes(&self) -> RepoResult<usize> {
        Ok(self.state.borrow().quizzes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryQuizRepository;
    use crate::repo::quiz_repo::{QuizRepository, RepoError};

    #[test]
    fn ids_are_not_reused_after_delete() {
        let repo = MemoryQuizRepository::new();
        let first = repo.create_quiz("q1", "a1").unwrap();
        repo.delete_quiz(first.id).unwrap();
        let second = repo.create_quiz("q2", "a2").unwrap();

        assert_ne!(first.id, second.id);
        assert!(matches!(
            repo.get_quiz(first.id),
            Err(RepoError::NotFound(id)) if id == first.id
        ));
    }
}
