//! Quiz repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `quizzes` table.
//! - Keep SQL details behind the repository boundary.
//!
//! # Invariants
//! - Listing order is insertion order (ascending id).
//! - Rows that violate the model are reported as `InvalidData`.

use crate::db::DbError;
use crate::model::quiz::{validate_text, Quiz, QuizId, QuizValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const QUIZ_SELECT_SQL: &str = "SELECT id, question, answer FROM quizzes";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for quiz persistence.
#[derive(Debug)]
pub enum RepoError {
    Validation(QuizValidationError),
    Db(DbError),
    NotFound(QuizId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "quiz not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted quiz data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<QuizValidationError> for RepoError {
    fn from(value: QuizValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage contract for quiz records.
pub trait QuizRepository {
    fn list_quizzes(&self) -> RepoResult<Vec<Quiz>>;
    fn get_quiz(&self, id: QuizId) -> RepoResult<Quiz>;
    fn create_quiz(&self, question: &str, answer: &str) -> RepoResult<Quiz>;
    fn update_quiz(&self, id: QuizId, question: &str, answer: &str) -> RepoResult<Quiz>;
    fn delete_quiz(&self, id: QuizId) -> RepoResult<()>;
    fn count_quizzes(&self) -> RepoResult<usize>;
}

/// SQLite-backed quiz repository.
pub struct SqliteQuizRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteQuizRepository<'conn> {
    /// Wraps a connection returned by [`crate::db::open_db`].
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl QuizRepository for SqliteQuizRepository<'_> {
    fn list_quizzes(&self) -> RepoResult<Vec<Quiz>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{QUIZ_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut quizzes = Vec::new();

        while let Some(row) = rows.next()? {
            quizzes.push(parse_quiz_row(row)?);
        }

        Ok(quizzes)
    }

    fn get_quiz(&self, id: QuizId) -> RepoResult<Quiz> {
        let mut stmt = self
            .conn
            .prepare(&format!("{QUIZ_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;

        let quiz = match rows.next()? {
            Some(row) => parse_quiz_row(row)?,
            None => return Err(RepoError::NotFound(id)),
        };
        Ok(quiz)
    }

    fn create_quiz(&self, question: &str, answer: &str) -> RepoResult<Quiz> {
        validate_text(question, answer)?;

        self.conn.execute(
            "INSERT INTO quizzes (question, answer) VALUES (?1, ?2);",
            params![question, answer],
        )?;

        let id = id_from_db(self.conn.last_insert_rowid())?;
        Ok(Quiz::new(id, question, answer))
    }

    fn update_quiz(&self, id: QuizId, question: &str, answer: &str) -> RepoResult<Quiz> {
        validate_text(question, answer)?;

        let changed = self.conn.execute(
            "UPDATE quizzes
             SET
                question = ?1,
                answer = ?2,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?3;",
            params![question, answer, id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(Quiz::new(id, question, answer))
    }

    fn delete_quiz(&self, id: QuizId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM quizzes WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn count_quizzes(&self) -> RepoResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM quizzes;", [], |row| row.get(0))?;
        usize::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("invalid quiz count `{count}`")))
    }
}

fn parse_quiz_row(row: &Row<'_>) -> RepoResult<Quiz> {
    let quiz = Quiz {
        id: id_from_db(row.get("id")?)?,
        question: row.get("question")?,
        answer: row.get("answer")?,
    };
    quiz.validate()?;
    Ok(quiz)
}

fn id_from_db(value: i64) -> RepoResult<QuizId> {
    QuizId::try_from(value)
        .map_err(|_| RepoError::InvalidData(format!("invalid id value `{value}` in quizzes.id")))
}
