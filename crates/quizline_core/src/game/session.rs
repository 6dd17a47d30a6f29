//! Play session state machine.
//!
//! A session is seeded once with a snapshot of the store and never looks at
//! the store again. Each question is drawn uniformly from the records not
//! yet asked and removed from the pool before it is shown.
//!
//! # Invariants
//! - A record is asked at most once per session.
//! - `score` never exceeds the number of initial records.
//! - Once ended, a session stays ended.

use crate::model::quiz::Quiz;
use rand::Rng;

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Every record was answered correctly.
    Exhausted,
    /// The last answer was wrong.
    Missed,
}

/// Final state reported when a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub score: u32,
    pub total: usize,
    pub reason: EndReason,
}

/// What the caller should do next.
#[derive(Debug, PartialEq, Eq)]
pub enum Turn<'a> {
    /// Prompt with this quiz and pass the response to [`PlaySession::answer`].
    Ask(&'a Quiz),
    Ended(GameSummary),
}

/// Outcome of one answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct { score: u32 },
    Wrong { expected: String, summary: GameSummary },
}

#[derive(Debug)]
pub struct PlaySession {
    remaining: Vec<Quiz>,
    current: Option<Quiz>,
    score: u32,
    total: usize,
    ended: Option<EndReason>,
}

impl PlaySession {
    pub fn new(quizzes: Vec<Quiz>) -> Self {
        Self {
            total: quizzes.len(),
            remaining: quizzes,
            current: None,
            score: 0,
            ended: None,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Records not asked yet, excluding a pending question.
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_ended(&self) -> bool {
        self.ended.is_some()
    }

    /// Draws the next question, or ends the session when none remain.
    ///
    /// Calling this again before [`PlaySession::answer`] returns the same
    /// pending question without drawing.
    pub fn next_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Turn<'_> {
        if let Some(reason) = self.ended {
            return Turn::Ended(self.summary(reason));
        }

        if self.current.is_none() {
            if self.remaining.is_empty() {
                return Turn::Ended(self.finish(EndReason::Exhausted));
            }
            let index = rng.gen_range(0..self.remaining.len());
            self.current = Some(self.remaining.swap_remove(index));
        }

        match self.current.as_ref() {
            Some(quiz) => Turn::Ask(quiz),
            None => Turn::Ended(self.summary(EndReason::Exhausted)),
        }
    }

    /// Scores the response to the pending question.
    ///
    /// Returns `None` when no question is pending (not drawn yet, or the
    /// session already ended).
    pub fn answer(&mut self, response: &str) -> Option<Verdict> {
        let quiz = self.current.take()?;

        if quiz.is_correct(response) {
            self.score += 1;
            return Some(Verdict::Correct { score: self.score });
        }

        Some(Verdict::Wrong {
            expected: quiz.answer,
            summary: self.finish(EndReason::Missed),
        })
    }

    fn finish(&mut self, reason: EndReason) -> GameSummary {
        self.ended = Some(reason);
        self.current = None;
        self.summary(reason)
    }

    fn summary(&self, reason: EndReason) -> GameSummary {
        GameSummary {
            score: self.score,
            total: self.total,
            reason,
        }
    }
}
