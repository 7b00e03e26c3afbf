use super::*;

use chrono::{TimeZone, Utc};

#[test]
fn next_and_prev_stay_inside_the_flow() {
    assert_eq!(Screen::Welcome.prev(), Screen::Welcome);
    assert_eq!(Screen::Finish.next(), Screen::Finish);

    let mut screen = Screen::Welcome;
    for _ in 0..Screen::COUNT + 3 {
        screen = screen.next();
        assert!(screen.index() <= Screen::COUNT - 1);
    }
    assert_eq!(screen, Screen::Finish);
}

#[test]
fn five_next_clicks_from_welcome_reach_the_finish_screen() {
    let mut screen = Screen::Welcome;
    for _ in 0..5 {
        screen = screen.next();
    }
    assert_eq!(screen, Screen::Finish);
    assert_eq!(screen.progress_percent(), 100);
}

#[test]
fn progress_is_monotone_and_exact_at_the_ends() {
    assert_eq!(Screen::Welcome.progress_percent(), 0);
    assert_eq!(Screen::Finish.progress_percent(), 100);

    let mut previous = 0;
    for screen in Screen::ALL {
        let progress = screen.progress_percent();
        assert!(progress >= previous, "progress regressed at {screen:?}");
        assert!(progress <= 100);
        previous = progress;
    }
}

#[test]
fn raw_goto_targets_out_of_range_clamp_instead_of_faulting() {
    assert_eq!(Screen::from_index(0), Screen::Welcome);
    assert_eq!(Screen::from_index(5), Screen::Finish);
    assert_eq!(Screen::from_index(6), Screen::Finish);
    assert_eq!(Screen::from_index(usize::MAX), Screen::Finish);
}

#[test]
fn assessment_is_complete_only_when_every_skill_is_above_zero() {
    let skills = ContentPack::builtin().skills;
    let mut assessment = SkillAssessment::new();

    // Four of five rated, one untouched.
    for skill in skills.iter().take(4) {
        assessment.set_score(&skill.name, 50);
    }
    assert!(!assessment.is_complete(&skills));

    assessment.set_score(&skills[4].name, 10);
    assert!(assessment.is_complete(&skills));
}

#[test]
fn rating_a_skill_back_to_zero_reads_as_unassessed_again() {
    // The predicate is literal: an explicit 0 is indistinguishable from an
    // untouched skill.
    let skills = ContentPack::builtin().skills;
    let mut assessment = SkillAssessment::new();
    for skill in &skills {
        assessment.set_score(&skill.name, 70);
    }
    assert!(assessment.is_complete(&skills));

    assessment.set_score(&skills[0].name, 0);
    assert!(!assessment.is_complete(&skills));
}

#[test]
fn case_selection_is_bounds_guarded_and_sticky() {
    let cases = ContentPack::builtin().cases;
    let mut browser = CaseBrowser::new();
    assert_eq!(browser.selected(), None);

    browser.select(1, cases.len());
    assert_eq!(browser.selected(), Some(1));
    assert_eq!(cases[1].steps[0], "Schnittstellen identifizieren");

    // Out-of-range clicks leave the focus alone.
    browser.select(cases.len(), cases.len());
    assert_eq!(browser.selected(), Some(1));

    // Re-selecting the focused case is idempotent.
    browser.select(1, cases.len());
    assert_eq!(browser.selected(), Some(1));
}

#[test]
fn rating_a_skill_records_its_match_entry_once() {
    let mut session = Session::new(ContentPack::builtin());
    session.rate_skill("Didaktik", 60);
    session.rate_skill("Didaktik", 90);
    assert_eq!(
        session.matches().get("Didaktik").map(String::as_str),
        Some("Projekt Lehrkonzepte")
    );
    assert_eq!(session.matches().len(), 1);

    // A zero rating does not create a match entry.
    session.rate_skill("KI", 0);
    assert_eq!(session.matches().len(), 1);
}

#[test]
fn scripted_walk_through_all_six_screens() {
    let mut session = Session::new(ContentPack::builtin());
    assert_eq!(session.screen(), Screen::Welcome);
    assert_eq!(session.progress_percent(), 0);

    session.advance_screen();
    assert_eq!(session.screen(), Screen::Motivation);

    session.advance_screen();
    assert_eq!(session.screen(), Screen::Quiz);

    // Answer every question correctly; the last confirmation advances the
    // flow on its own.
    let questions = session.content().questions.clone();
    for question in &questions {
        let label = question.correct_label().expect("correct option").to_string();
        session.select_answer(label);
        session.confirm_answer();
    }
    assert_eq!(session.screen(), Screen::Matching);
    assert_eq!(session.quiz().score(), questions.len() as u32);

    let skills = session.content().skills.clone();
    for skill in &skills {
        session.rate_skill(&skill.name, 80);
    }
    assert!(session.assessment_complete());

    session.advance_screen();
    assert_eq!(session.screen(), Screen::Cases);
    session.select_case(0);

    session.advance_screen();
    assert_eq!(session.screen(), Screen::Finish);
    assert_eq!(session.progress_percent(), 100);

    let exported = session.export_payload(
        Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0)
            .single()
            .expect("timestamp"),
    );
    assert_eq!(exported.quiz_score, questions.len() as u32);
    assert_eq!(exported.matches.len(), skills.len());
}

#[test]
fn back_from_the_quiz_returns_to_motivation_without_losing_progress() {
    let mut session = Session::new(ContentPack::builtin());
    session.goto_screen(Screen::Quiz);

    let label = session.content().questions[0]
        .correct_label()
        .expect("correct option")
        .to_string();
    session.select_answer(label);
    session.confirm_answer();

    session.back_screen();
    assert_eq!(session.screen(), Screen::Motivation);
    assert_eq!(session.quiz().score(), 1);
    assert_eq!(session.quiz().current_index(), 1);
}
