//! Quiz domain model.
//!
//! # Responsibility
//! - Define the canonical question/answer record used by every store.
//! - Own the answer comparison rule shared by `test` and `play`.
//!
//! # Invariants
//! - Every persisted quiz has a non-blank question and answer.
//! - A `QuizId` is assigned by the store and never changes for a record.

pub mod quiz;
