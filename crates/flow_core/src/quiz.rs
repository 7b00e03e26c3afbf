//! Single-question-at-a-time quiz progression and scoring.

use crate::content::QuizQuestion;

/// What happened when the current selection was confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// No option was selected; all state is left untouched.
    NoSelection,
    /// The answer was recorded and the next question is up.
    NextQuestion,
    /// The answer was recorded and the last question is done; the caller
    /// advances the flow.
    QuizFinished,
}

/// Progress through the fixed, ordered question list.
///
/// Two phases per question: awaiting a selection (no option chosen) and
/// showing the explanation (an option chosen). Re-selecting before the
/// confirmation simply overwrites the earlier pick.
#[derive(Debug, Clone, Default)]
pub struct QuizProgress {
    current_index: usize,
    score: u32,
    selected: Option<String>,
}

impl QuizProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn awaiting_selection(&self) -> bool {
        self.selected.is_none()
    }

    pub fn select_option(&mut self, label: impl Into<String>) {
        self.selected = Some(label.into());
    }

    /// Scores the selected option against the current question, clears the
    /// selection, and moves on. Confirming with nothing selected is
    /// unreachable through the rendered surface (the button only exists
    /// while an option is chosen) but is treated as a no-op here rather
    /// than a fault.
    pub fn confirm(&mut self, questions: &[QuizQuestion]) -> ConfirmOutcome {
        let Some(selected) = self.selected.take() else {
            return ConfirmOutcome::NoSelection;
        };

        let correct = questions
            .get(self.current_index)
            .map(|question| {
                question
                    .options
                    .iter()
                    .any(|option| option.correct && option.label == selected)
            })
            .unwrap_or(false);
        if correct {
            self.score += 1;
        }

        if self.current_index + 1 < questions.len() {
            self.current_index += 1;
            ConfirmOutcome::NextQuestion
        } else {
            ConfirmOutcome::QuizFinished
        }
    }
}

#[cfg(test)]
#[path = "tests/quiz_tests.rs"]
mod tests;
