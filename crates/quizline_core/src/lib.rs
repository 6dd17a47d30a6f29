//! Core of the Quizline quiz trainer.
//!
//! Holds the quiz model, both record stores, the play session and the
//! command shell; the `quizline` binary only wires them to stdin/stdout.

pub mod command;
pub mod console;
pub mod db;
pub mod game;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use command::{Command, CommandError, Flow, Shell};
pub use console::{Console, LineConsole};
pub use game::session::{EndReason, GameSummary, PlaySession, Turn, Verdict};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::quiz::{Quiz, QuizId, QuizValidationError, DEFAULT_QUIZZES};
pub use repo::memory_repo::MemoryQuizRepository;
pub use repo::quiz_repo::{QuizRepository, RepoError, RepoResult, SqliteQuizRepository};
pub use service::quiz_service::{parse_quiz_id, QuizService, QuizServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
