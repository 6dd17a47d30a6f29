use quizline_core::{
    MemoryQuizRepository, QuizService, QuizServiceError, QuizValidationError, DEFAULT_QUIZZES,
};

fn service() -> QuizService<MemoryQuizRepository> {
    QuizService::new(MemoryQuizRepository::new())
}

#[test]
fn get_after_add_returns_added_text() {
    let service = service();
    let quiz = service.add("2+2?", "4").unwrap();

    let loaded = service.get(Some(&quiz.id.to_string())).unwrap();
    assert_eq!(loaded.question, "2+2?");
    assert_eq!(loaded.answer, "4");
}

#[test]
fn missing_or_non_numeric_id_is_invalid_argument() {
    let service = service();
    service.add("q", "a").unwrap();

    assert!(matches!(
        service.get(None),
        Err(QuizServiceError::InvalidArgument(_))
    ));
    assert!(matches!(
        service.delete(Some("first")),
        Err(QuizServiceError::InvalidArgument(_))
    ));
    assert!(matches!(
        service.update(Some("x1"), "q", "a"),
        Err(QuizServiceError::InvalidArgument(_))
    ));
}

#[test]
fn unknown_id_is_not_found() {
    let service = service();
    let err = service.get(Some("99")).unwrap_err();
    assert!(matches!(err, QuizServiceError::NotFound(99)));
    assert_eq!(err.to_string(), "quiz [99] does not exist");
}

#[test]
fn validation_failures_are_lifted() {
    let service = service();
    let err = service.add("question", " ").unwrap_err();
    assert!(matches!(
        err,
        QuizServiceError::Validation(QuizValidationError::EmptyAnswer)
    ));
}

#[test]
fn delete_then_get_is_not_found() {
    let service = service();
    let quiz = service.add("q", "a").unwrap();
    let arg = quiz.id.to_string();

    assert_eq!(service.delete(Some(&arg)).unwrap(), quiz.id);
    assert!(matches!(
        service.get(Some(&arg)),
        Err(QuizServiceError::NotFound(id)) if id == quiz.id
    ));
    assert_eq!(service.count().unwrap(), 0);
}

#[test]
fn seed_if_empty_only_seeds_once() {
    let service = service();

    assert_eq!(service.seed_if_empty(DEFAULT_QUIZZES).unwrap(), DEFAULT_QUIZZES.len());
    assert_eq!(service.seed_if_empty(DEFAULT_QUIZZES).unwrap(), 0);
    assert_eq!(service.count().unwrap(), DEFAULT_QUIZZES.len());

    let first = &service.list().unwrap()[0];
    assert_eq!(first.question, DEFAULT_QUIZZES[0].0);
}

#[test]
fn seed_if_empty_leaves_existing_store_alone() {
    let service = service();
    service.add("mine", "yes").unwrap();

    assert_eq!(service.seed_if_empty(DEFAULT_QUIZZES).unwrap(), 0);
    assert_eq!(service.count().unwrap(), 1);
}
