//! `quizline` binary: interactive quiz trainer on stdin/stdout.
//!
//! Reads `QUIZLINE_*` configuration, starts file logging, opens the chosen
//! record store and runs the command loop until `quit` or end of input.

mod config;

use config::{Backend, Config};
use quizline_core::db::open_db;
use quizline_core::{
    init_logging, Console, LineConsole, MemoryQuizRepository, QuizRepository, QuizService, Shell,
    SqliteQuizRepository, DEFAULT_QUIZZES,
};
use std::io::{self, IsTerminal};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("quizline: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let config = Config::from_env()?;
    init_logging(&config.log_level, &config.log_dir.to_string_lossy())?;
    log::info!(
        "event=config module=cli status=ok backend={:?} seed={}",
        config.backend,
        config.seed
    );

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let console = LineConsole::new(stdin.lock(), io::stdout(), interactive);

    match config.backend {
        Backend::Memory => run_shell(MemoryQuizRepository::new(), console, config.seed),
        Backend::Sqlite => {
            let conn = open_db(&config.db_path).map_err(|err| {
                format!(
                    "failed to open quiz database `{}`: {err}",
                    config.db_path.display()
                )
            })?;
            run_shell(SqliteQuizRepository::new(&conn), console, config.seed)
        }
    }
}

fn run_shell<R, C>(repo: R, mut console: C, seed: bool) -> Result<(), String>
where
    R: QuizRepository,
    C: Console,
{
    let service = QuizService::new(repo);
    if seed {
        service
            .seed_if_empty(DEFAULT_QUIZZES)
            .map_err(|err| format!("failed to seed default quizzes: {err}"))?;
    }

    console.log("Quizline - type `help` to list the commands.");
    let mut shell = Shell::new(service, console, rand::thread_rng());
    shell.run();
    Ok(())
}
