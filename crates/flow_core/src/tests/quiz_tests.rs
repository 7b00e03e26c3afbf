use super::*;

use crate::content::ContentPack;

#[test]
fn answering_everything_correctly_scores_the_full_question_count() {
    let questions = ContentPack::builtin().questions;
    let mut quiz = QuizProgress::new();

    for (i, question) in questions.iter().enumerate() {
        assert_eq!(quiz.current_index(), i);
        quiz.select_option(question.correct_label().expect("correct option"));
        let outcome = quiz.confirm(&questions);
        if i + 1 < questions.len() {
            assert_eq!(outcome, ConfirmOutcome::NextQuestion);
        } else {
            assert_eq!(outcome, ConfirmOutcome::QuizFinished);
        }
    }

    assert_eq!(quiz.score(), questions.len() as u32);
}

#[test]
fn wrong_answers_advance_without_scoring() {
    let questions = ContentPack::builtin().questions;
    let mut quiz = QuizProgress::new();

    let wrong = questions[0]
        .options
        .iter()
        .find(|option| !option.correct)
        .expect("wrong option");
    quiz.select_option(wrong.label.as_str());
    assert_eq!(quiz.confirm(&questions), ConfirmOutcome::NextQuestion);
    assert_eq!(quiz.score(), 0);
    assert_eq!(quiz.current_index(), 1);
}

#[test]
fn reselecting_before_confirmation_overwrites_the_earlier_pick() {
    let questions = ContentPack::builtin().questions;
    let mut quiz = QuizProgress::new();

    let wrong = questions[0]
        .options
        .iter()
        .find(|option| !option.correct)
        .expect("wrong option");
    quiz.select_option(wrong.label.as_str());
    quiz.select_option(questions[0].correct_label().expect("correct option"));
    quiz.confirm(&questions);
    assert_eq!(quiz.score(), 1);
}

#[test]
fn confirming_without_a_selection_is_a_no_op() {
    let questions = ContentPack::builtin().questions;
    let mut quiz = QuizProgress::new();

    assert_eq!(quiz.confirm(&questions), ConfirmOutcome::NoSelection);
    assert_eq!(quiz.current_index(), 0);
    assert_eq!(quiz.score(), 0);
    assert!(quiz.awaiting_selection());
}

#[test]
fn selection_clears_after_every_confirmation() {
    let questions = ContentPack::builtin().questions;
    let mut quiz = QuizProgress::new();

    quiz.select_option(questions[0].correct_label().expect("correct option"));
    assert!(!quiz.awaiting_selection());
    quiz.confirm(&questions);
    assert!(quiz.awaiting_selection());
}

#[test]
fn score_never_exceeds_the_number_of_answered_questions() {
    let questions = ContentPack::builtin().questions;
    let mut quiz = QuizProgress::new();

    let mut answered = 0u32;
    for question in &questions {
        quiz.select_option(question.correct_label().expect("correct option"));
        quiz.confirm(&questions);
        answered += 1;
        assert!(quiz.score() <= answered);
    }
}

#[test]
fn current_index_stays_within_the_question_list() {
    let questions = ContentPack::builtin().questions;
    let mut quiz = QuizProgress::new();

    // Keep confirming past the end; the index must stay in range.
    for _ in 0..questions.len() + 2 {
        quiz.select_option("irrelevant");
        quiz.confirm(&questions);
        assert!(quiz.current_index() < questions.len());
    }
}
