mod common;

use common::{memory_service, ScriptedConsole};
use quizline_core::command::LOOP_PROMPT;
use quizline_core::{EndReason, PlaySession, Quiz, Shell, Turn, Verdict};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn numbered_quizzes(count: u32) -> Vec<Quiz> {
    (1..=count)
        .map(|id| Quiz::new(id, format!("q{id}"), format!("a{id}")))
        .collect()
}

/// Drives a session, answering via `respond`; returns asked ids and summary.
fn drive(
    quizzes: Vec<Quiz>,
    seed: u64,
    mut respond: impl FnMut(&Quiz) -> String,
) -> (Vec<u32>, quizline_core::GameSummary, usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut session = PlaySession::new(quizzes);
    let mut asked = Vec::new();
    let mut transitions = 0;

    loop {
        transitions += 1;
        let response = match session.next_turn(&mut rng) {
            Turn::Ask(quiz) => {
                asked.push(quiz.id);
                respond(quiz)
            }
            Turn::Ended(summary) => return (asked, summary, transitions),
        };
        if let Some(Verdict::Wrong { summary, .. }) = session.answer(&response) {
            return (asked, summary, transitions);
        }
    }
}

#[test]
fn all_correct_asks_every_record_once() {
    for seed in 0..50 {
        let quizzes = numbered_quizzes(8);
        let expected: HashSet<u32> = quizzes.iter().map(|q| q.id).collect();

        let (asked, summary, transitions) = drive(quizzes, seed, |quiz| quiz.answer.clone());

        let unique: HashSet<u32> = asked.iter().copied().collect();
        assert_eq!(unique.len(), asked.len(), "duplicate question for seed {seed}");
        assert_eq!(unique, expected);
        assert_eq!(summary.score, 8);
        assert_eq!(summary.reason, EndReason::Exhausted);
        assert!(transitions <= 9);
    }
}

#[test]
fn mixed_answers_stay_within_bounds() {
    for seed in 0..50 {
        let quizzes = numbered_quizzes(10);
        let initial: HashSet<u32> = quizzes.iter().map(|q| q.id).collect();

        let (asked, summary, transitions) = drive(quizzes, seed, |quiz| {
            if quiz.id % 4 == 0 {
                "nope".to_string()
            } else {
                format!("  {}  ", quiz.answer.to_uppercase())
            }
        });

        let unique: HashSet<u32> = asked.iter().copied().collect();
        assert_eq!(unique.len(), asked.len());
        assert!(unique.is_subset(&initial));
        assert!(summary.score as usize <= 10);
        assert!(transitions <= 11);
        if summary.reason == EndReason::Missed {
            assert_eq!(summary.score as usize, asked.len() - 1);
        } else {
            assert_eq!(summary.score, 10);
        }
    }
}

#[test]
fn single_correct_answer_exhausts_with_score_one() {
    let service = memory_service(&[("2+2?", "4")]);
    let mut commands = vec!["play".to_string()].into_iter();
    let console = ScriptedConsole::new(move |prompt: &str| {
        if prompt == LOOP_PROMPT {
            commands.next()
        } else {
            Some("4".to_string())
        }
    });

    let mut shell = Shell::new(service, console, StdRng::seed_from_u64(5));
    shell.run();
    let console = shell.into_console();

    assert!(console.has_line("CORRECT - 1 right answers so far."));
    assert!(console.has_line("No more questions."));
    assert!(console.has_line("Game over. Right answers: 1"));
    assert!(console.has_line("BIG 1"));
}

#[test]
fn miss_ends_session_immediately() {
    let service = memory_service(&[("2+2?", "4"), ("capital of France?", "Paris")]);
    let mut commands = vec!["play".to_string()].into_iter();
    let mut answered = 0;
    let console = ScriptedConsole::new(move |prompt: &str| {
        if prompt == LOOP_PROMPT {
            return commands.next();
        }
        answered += 1;
        let right = if prompt.contains("2+2?") { "4" } else { "paris" };
        Some(if answered == 1 { right } else { "Lyon" }.to_string())
    });

    let mut shell = Shell::new(service, console, StdRng::seed_from_u64(9));
    shell.run();
    let console = shell.into_console();

    let questions = console
        .prompts
        .iter()
        .filter(|prompt| prompt.as_str() != LOOP_PROMPT)
        .count();
    assert_eq!(questions, 2);
    assert!(console.has_line("CORRECT - 1 right answers so far."));
    assert!(console.has_line("INCORRECT."));
    assert!(console.has_line("Game over. Right answers: 1"));
    assert!(!console.has_line("No more questions."));
}

#[test]
fn play_on_empty_store_reports_zero() {
    let service = memory_service(&[]);
    let mut commands = vec!["p".to_string()].into_iter();
    let console = ScriptedConsole::new(move |_: &str| commands.next());

    let mut shell = Shell::new(service, console, StdRng::seed_from_u64(1));
    shell.run();
    let console = shell.into_console();

    assert!(console.has_line("No more questions."));
    assert!(console.has_line("Game over. Right answers: 0"));
}

#[test]
fn session_does_not_see_quizzes_added_mid_game() {
    let mut rng = StdRng::seed_from_u64(2);
    let service = memory_service(&[("one", "1")]);
    let mut session = PlaySession::new(service.list().unwrap());

    assert!(matches!(session.next_turn(&mut rng), Turn::Ask(_)));
    service.add("two", "2").unwrap();
    assert_eq!(session.answer("1"), Some(Verdict::Correct { score: 1 }));
    assert!(matches!(session.next_turn(&mut rng), Turn::Ended(_)));
}
