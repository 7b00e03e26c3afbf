//! The single top-level state holder every screen reads.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::cases::CaseBrowser;
use crate::content::ContentPack;
use crate::export::ProfileExport;
use crate::quiz::{ConfirmOutcome, QuizProgress};
use crate::screen::Screen;
use crate::skills::SkillAssessment;

/// One in-memory presentation session: the content pack plus all mutable
/// UI state. Each mutator is a synchronous transition invoked from an
/// event handler; the GUI re-renders deterministically from the result.
#[derive(Debug, Clone)]
pub struct Session {
    content: ContentPack,
    screen: Screen,
    quiz: QuizProgress,
    assessment: SkillAssessment,
    matches: BTreeMap<String, String>,
    cases: CaseBrowser,
}

impl Session {
    pub fn new(content: ContentPack) -> Self {
        Self {
            content,
            screen: Screen::Welcome,
            quiz: QuizProgress::new(),
            assessment: SkillAssessment::new(),
            matches: BTreeMap::new(),
            cases: CaseBrowser::new(),
        }
    }

    pub fn content(&self) -> &ContentPack {
        &self.content
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn quiz(&self) -> &QuizProgress {
        &self.quiz
    }

    pub fn assessment(&self) -> &SkillAssessment {
        &self.assessment
    }

    pub fn matches(&self) -> &BTreeMap<String, String> {
        &self.matches
    }

    pub fn case_browser(&self) -> CaseBrowser {
        self.cases
    }

    pub fn progress_percent(&self) -> u8 {
        self.screen.progress_percent()
    }

    pub fn advance_screen(&mut self) {
        self.set_screen(self.screen.next());
    }

    pub fn back_screen(&mut self) {
        self.set_screen(self.screen.prev());
    }

    pub fn goto_screen(&mut self, screen: Screen) {
        self.set_screen(screen);
    }

    fn set_screen(&mut self, to: Screen) {
        if to != self.screen {
            debug!(from = ?self.screen, to = ?to, "screen transition");
            self.screen = to;
        }
    }

    pub fn select_answer(&mut self, label: impl Into<String>) {
        self.quiz.select_option(label);
    }

    /// Confirms the selected quiz answer; finishing the last question
    /// advances the flow to the next screen.
    pub fn confirm_answer(&mut self) -> ConfirmOutcome {
        let outcome = self.quiz.confirm(&self.content.questions);
        if outcome == ConfirmOutcome::QuizFinished {
            self.advance_screen();
        }
        outcome
    }

    /// Records the evaluator's score for a skill. The first time a skill
    /// is rated above zero it also records a match entry (skill name to
    /// its focus area); match entries are never cleared.
    pub fn rate_skill(&mut self, name: &str, value: u8) {
        self.assessment.set_score(name, value);
        if value > 0 {
            if let Some(skill) = self.content.skills.iter().find(|s| s.name == name) {
                self.matches
                    .entry(skill.name.clone())
                    .or_insert_with(|| skill.focus.clone());
            }
        }
    }

    /// Whether every skill has been rated above zero; gates the reveal of
    /// the applicant self-score series in the comparison chart.
    pub fn assessment_complete(&self) -> bool {
        self.assessment.is_complete(&self.content.skills)
    }

    pub fn select_case(&mut self, index: usize) {
        self.cases.select(index, self.content.cases.len());
    }

    pub fn export_payload(&self, now: DateTime<Utc>) -> ProfileExport {
        debug!(score = self.quiz.score(), matches = self.matches.len(), "building profile export");
        ProfileExport::new(self.quiz.score(), self.matches.clone(), now)
    }
}
