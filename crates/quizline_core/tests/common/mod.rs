#![allow(dead_code)]

use quizline_core::{Console, LineConsole, MemoryQuizRepository, QuizService, Shell};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Cursor};

/// Console whose answers come from a closure over the prompt text.
pub struct ScriptedConsole<F> {
    respond: F,
    pub prompts: Vec<String>,
    pub lines: Vec<String>,
}

impl<F: FnMut(&str) -> Option<String>> ScriptedConsole<F> {
    pub fn new(respond: F) -> Self {
        Self {
            respond,
            prompts: Vec::new(),
            lines: Vec::new(),
        }
    }

    pub fn has_line(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl<F: FnMut(&str) -> Option<String>> Console for ScriptedConsole<F> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok((self.respond)(prompt))
    }

    fn log(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn errorlog(&mut self, text: &str) {
        self.lines.push(format!("ERROR {text}"));
    }

    fn biglog(&mut self, text: &str) {
        self.lines.push(format!("BIG {text}"));
    }
}

pub fn memory_service(quizzes: &[(&str, &str)]) -> QuizService<MemoryQuizRepository> {
    let service = QuizService::new(MemoryQuizRepository::new());
    for (question, answer) in quizzes {
        service.add(question, answer).unwrap();
    }
    service
}

/// Runs piped `input` through a shell over `quizzes` and returns its output.
pub fn run_piped(quizzes: &[(&str, &str)], input: &str) -> String {
    run_piped_bytes(quizzes, input.as_bytes())
}

/// Like [`run_piped`], for input that is not valid UTF-8.
pub fn run_piped_bytes(quizzes: &[(&str, &str)], input: &[u8]) -> String {
    let console = LineConsole::new(Cursor::new(input.to_vec()), Vec::new(), false);
    let mut shell = Shell::new(memory_service(quizzes), console, StdRng::seed_from_u64(11));
    shell.run();
    String::from_utf8(shell.into_console().into_output()).unwrap()
}
