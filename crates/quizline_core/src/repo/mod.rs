//! Quiz persistence contracts and backends.
//!
//! # Responsibility
//! - Define the `QuizRepository` contract shared by every backend.
//! - Provide an in-process array store and a SQLite store.
//!
//! # Invariants
//! - Write paths validate question/answer text before mutating storage.
//! - Lookups of unknown ids return `RepoError::NotFound`, never a default.

pub mod memory_repo;
pub mod quiz_repo;
