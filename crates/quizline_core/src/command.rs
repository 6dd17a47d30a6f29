//! Command parsing, dispatch and handlers.
//!
//! # Responsibility
//! - Parse one input line into a `Command`.
//! - Run the matching handler against a `QuizService` and a `Console`.
//! - Recover every quiz error at the handler boundary.
//!
//! # Invariants
//! - Prompts are strictly sequential; add/edit build a record only after
//!   both the question and the answer prompt resolved.
//! - A handler error never ends the loop, except closed or broken input.
//! - Log events carry command names and ids only, never quiz text.

use crate::console::Console;
use crate::game::session::{EndReason, GameSummary, PlaySession, Turn, Verdict};
use crate::repo::quiz_repo::QuizRepository;
use crate::service::quiz_service::{QuizService, QuizServiceError};
use log::{debug, error, info, warn};
use rand::Rng;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

/// Prompt shown between commands.
pub const LOOP_PROMPT: &str = "quiz > ";

const QUESTION_PROMPT: &str = "  Question: ";
const ANSWER_PROMPT: &str = "  Answer: ";

const HELP_LINES: &[&str] = &[
    "Commands:",
    "  h|help - Show this help.",
    "  list - List the existing quizzes.",
    "  show <id> - Show the question and answer of the given quiz.",
    "  add - Add a new quiz interactively.",
    "  delete <id> - Delete the given quiz.",
    "  edit <id> - Edit the given quiz.",
    "  test <id> - Try the given quiz.",
    "  p|play - Play all quizzes in random order.",
    "  credits - Credits.",
    "  q|quit - Quit the program.",
];

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Help,
    List,
    Show(Option<&'a str>),
    Add,
    Delete(Option<&'a str>),
    Edit(Option<&'a str>),
    Test(Option<&'a str>),
    Play,
    Credits,
    Quit,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    /// Parses a line; the first word is matched case-insensitively.
    ///
    /// Returns `None` for blank lines.
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let word = words.next()?;
        let arg = words.next();

        let command = match word.to_lowercase().as_str() {
            "h" | "help" => Self::Help,
            "list" => Self::List,
            "show" => Self::Show(arg),
            "add" => Self::Add,
            "delete" => Self::Delete(arg),
            "edit" => Self::Edit(arg),
            "test" => Self::Test(arg),
            "p" | "play" => Self::Play,
            "credits" => Self::Credits,
            "q" | "quit" => Self::Quit,
            _ => Self::Unknown(word),
        };
        Some(command)
    }

    /// Stable name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::List => "list",
            Self::Show(_) => "show",
            Self::Add => "add",
            Self::Delete(_) => "delete",
            Self::Edit(_) => "edit",
            Self::Test(_) => "test",
            Self::Play => "play",
            Self::Credits => "credits",
            Self::Quit => "quit",
            Self::Unknown(_) => "unknown",
        }
    }
}

/// Whether the loop keeps prompting after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Failure of a single handler.
#[derive(Debug)]
pub enum CommandError {
    /// Recoverable quiz error, printed and then ignored.
    Service(QuizServiceError),
    /// Input ended while a prompt was outstanding.
    InputClosed,
    Io(io::Error),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Service(err) => write!(f, "{err}"),
            Self::InputClosed => write!(f, "input closed"),
            Self::Io(err) => write!(f, "console i/o failed: {err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Service(err) => Some(err),
            Self::InputClosed => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<QuizServiceError> for CommandError {
    fn from(value: QuizServiceError) -> Self {
        Self::Service(value)
    }
}

impl From<io::Error> for CommandError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

type CommandResult<T> = Result<T, CommandError>;

/// Interactive quiz shell: one service, one console, one random source.
pub struct Shell<R: QuizRepository, C: Console, G: Rng> {
    service: QuizService<R>,
    console: C,
    rng: G,
}

impl<R: QuizRepository, C: Console, G: Rng> Shell<R, C, G> {
    pub fn new(service: QuizService<R>, console: C, rng: G) -> Self {
        Self {
            service,
            console,
            rng,
        }
    }

    pub fn service(&self) -> &QuizService<R> {
        &self.service
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Prompts and executes lines until `quit` or end of input.
    pub fn run(&mut self) {
        info!("event=session module=command status=start");
        loop {
            let line = match self.console.read_line(LOOP_PROMPT) {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(err) => {
                    error!("event=session module=command status=error error={err}");
                    break;
                }
            };
            if self.execute(&line) == Flow::Quit {
                break;
            }
        }
        info!("event=session module=command status=end");
    }

    /// Executes one input line and reports whether the loop continues.
    pub fn execute(&mut self, line: &str) -> Flow {
        let Some(command) = Command::parse(line) else {
            return Flow::Continue;
        };
        let name = command.name();

        match self.dispatch(command) {
            Ok(flow) => {
                debug!("event=command module=command name={name} status=ok");
                flow
            }
            Err(CommandError::Service(err)) => {
                warn!(
                    "event=command module=command name={name} status=error error_kind={}",
                    error_kind(&err)
                );
                self.console.errorlog(&err.to_string());
                Flow::Continue
            }
            Err(CommandError::InputClosed) => {
                info!("event=command module=command name={name} status=input_closed");
                Flow::Quit
            }
            Err(CommandError::Io(err)) => {
                error!("event=command module=command name={name} status=error error={err}");
                self.console.errorlog(&format!("cannot read input: {err}"));
                Flow::Quit
            }
        }
    }

    fn dispatch(&mut self, command: Command<'_>) -> CommandResult<Flow> {
        match command {
            Command::Help => self.help(),
            Command::List => self.list()?,
            Command::Show(arg) => self.show(arg)?,
            Command::Add => self.add()?,
            Command::Delete(arg) => self.delete(arg)?,
            Command::Edit(arg) => self.edit(arg)?,
            Command::Test(arg) => self.test(arg)?,
            Command::Play => self.play()?,
            Command::Credits => self.credits(),
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(word) => {
                self.console.errorlog(&format!("Unknown command: {word}"));
                self.console.log("Type `help` to list the commands.");
            }
        }
        Ok(Flow::Continue)
    }

    fn help(&mut self) {
        for line in HELP_LINES {
            self.console.log(line);
        }
    }

    fn list(&mut self) -> CommandResult<()> {
        let quizzes = self.service.list()?;
        if quizzes.is_empty() {
            self.console.log("There are no quizzes.");
        }
        for quiz in quizzes {
            self.console.log(&format!("  [{}]: {}", quiz.id, quiz.question));
        }
        Ok(())
    }

    fn show(&mut self, arg: Option<&str>) -> CommandResult<()> {
        let quiz = self.service.get(arg)?;
        self.console
            .log(&format!("  [{}]: {} => {}", quiz.id, quiz.question, quiz.answer));
        Ok(())
    }

    fn add(&mut self) -> CommandResult<()> {
        let question = self.ask(QUESTION_PROMPT)?;
        let answer = self.ask(ANSWER_PROMPT)?;

        let quiz = self.service.add(&question, &answer)?;
        info!("event=quiz_add module=command status=ok id={}", quiz.id);
        self.console
            .log(&format!("  Added [{}]: {} => {}", quiz.id, quiz.question, quiz.answer));
        Ok(())
    }

    fn delete(&mut self, arg: Option<&str>) -> CommandResult<()> {
        let id = self.service.delete(arg)?;
        info!("event=quiz_delete module=command status=ok id={id}");
        self.console.log(&format!("  Deleted quiz [{id}]."));
        Ok(())
    }

    fn edit(&mut self, arg: Option<&str>) -> CommandResult<()> {
        let current = self.service.get(arg)?;
        let question = self.ask_with_initial(QUESTION_PROMPT, &current.question)?;
        let answer = self.ask_with_initial(ANSWER_PROMPT, &current.answer)?;

        let quiz = self.service.update(arg, &question, &answer)?;
        info!("event=quiz_edit module=command status=ok id={}", quiz.id);
        self.console.log(&format!(
            "  Quiz [{}] changed to: {} => {}",
            quiz.id, quiz.question, quiz.answer
        ));
        Ok(())
    }

    fn test(&mut self, arg: Option<&str>) -> CommandResult<()> {
        let quiz = self.service.get(arg)?;
        let response = self.ask(&question_prompt(&quiz.question))?;

        if quiz.is_correct(&response) {
            self.console.log("Your answer is correct.");
            self.console.biglog("CORRECT");
        } else {
            self.console.log("Your answer is incorrect.");
            self.console.biglog("INCORRECT");
        }
        Ok(())
    }

    fn play(&mut self) -> CommandResult<()> {
        let mut session = PlaySession::new(self.service.list()?);

        let summary = loop {
            let prompt = match session.next_turn(&mut self.rng) {
                Turn::Ask(quiz) => question_prompt(&quiz.question),
                Turn::Ended(summary) => break summary,
            };
            let response = self.ask(&prompt)?;

            match session.answer(&response) {
                Some(Verdict::Correct { score }) => {
                    self.console
                        .log(&format!("  CORRECT - {score} right answers so far."));
                }
                Some(Verdict::Wrong { summary, .. }) => {
                    self.console.log("  INCORRECT.");
                    break summary;
                }
                None => continue,
            }
        };

        self.report_game(summary);
        Ok(())
    }

    fn report_game(&mut self, summary: GameSummary) {
        info!(
            "event=play_end module=command status=ok score={} total={} reason={:?}",
            summary.score, summary.total, summary.reason
        );
        if summary.reason == EndReason::Exhausted {
            self.console.log("No more questions.");
        }
        self.console
            .log(&format!("Game over. Right answers: {}", summary.score));
        self.console.biglog(&summary.score.to_string());
    }

    fn credits(&mut self) {
        self.console.log("Credits:");
        self.console
            .log(&format!("  quizline {}", crate::core_version()));
        self.console.log("  The Quizline contributors.");
    }

    fn ask(&mut self, prompt: &str) -> CommandResult<String> {
        self.console
            .read_line(prompt)?
            .ok_or(CommandError::InputClosed)
    }

    fn ask_with_initial(&mut self, prompt: &str, initial: &str) -> CommandResult<String> {
        self.console
            .read_line_with_initial(prompt, initial)?
            .ok_or(CommandError::InputClosed)
    }
}

fn question_prompt(question: &str) -> String {
    format!("  {question} ")
}

fn error_kind(err: &QuizServiceError) -> &'static str {
    match err {
        QuizServiceError::InvalidArgument(_) => "invalid_argument",
        QuizServiceError::NotFound(_) => "not_found",
        QuizServiceError::Validation(_) => "validation",
        QuizServiceError::Repo(_) => "repo",
    }
}

#[cfg(test)]
mod tests {
    use super::Command;

    #[test]
    fn parse_is_case_insensitive_and_keeps_argument() {
        assert_eq!(Command::parse("  SHOW 3 "), Some(Command::Show(Some("3"))));
        assert_eq!(Command::parse("P"), Some(Command::Play));
        assert_eq!(Command::parse("delete"), Some(Command::Delete(None)));
        assert_eq!(Command::parse("fly away"), Some(Command::Unknown("fly")));
    }

    #[test]
    fn blank_line_is_not_a_command() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("   \t"), None);
    }
}
