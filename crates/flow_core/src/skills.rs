//! Evaluator-side skill assessment state.

use std::collections::BTreeMap;

use crate::content::Skill;

/// Scores the evaluator has assigned so far, keyed by skill name.
///
/// Scores arrive in 0-100 in steps of ten; the stepping is enforced by the
/// slider widget, not re-validated here. There is no removal operation and
/// nothing resets within a session.
#[derive(Debug, Clone, Default)]
pub struct SkillAssessment {
    scores: BTreeMap<String, u8>,
}

impl SkillAssessment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_score(&mut self, name: impl Into<String>, value: u8) {
        self.scores.insert(name.into(), value);
    }

    /// The recorded score, or 0 when the skill was never touched.
    pub fn score_for(&self, name: &str) -> u8 {
        self.scores.get(name).copied().unwrap_or(0)
    }

    /// True once every listed skill carries a score strictly above zero.
    ///
    /// A skill explicitly rated 0 is indistinguishable from an untouched
    /// one; the predicate is kept literal and the quirk is pinned by a
    /// test.
    pub fn is_complete(&self, skills: &[Skill]) -> bool {
        skills.iter().all(|skill| self.score_for(&skill.name) > 0)
    }

    pub fn scores(&self) -> &BTreeMap<String, u8> {
        &self.scores
    }
}
