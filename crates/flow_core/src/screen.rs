//! Linear screen flow: six ordered screens plus progress reporting.

use serde::{Deserialize, Serialize};

/// One full-page view of the presentation flow, in visit order.
///
/// The flow is a straight line; there is no branching. Modeling the screens
/// as an enum (rather than a raw step counter) makes out-of-range states
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Welcome,
    Motivation,
    Quiz,
    Matching,
    Cases,
    Finish,
}

impl Screen {
    /// All screens in flow order.
    pub const ALL: [Screen; 6] = [
        Screen::Welcome,
        Screen::Motivation,
        Screen::Quiz,
        Screen::Matching,
        Screen::Cases,
        Screen::Finish,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        match self {
            Screen::Welcome => 0,
            Screen::Motivation => 1,
            Screen::Quiz => 2,
            Screen::Matching => 3,
            Screen::Cases => 4,
            Screen::Finish => 5,
        }
    }

    /// Maps a raw step index onto a screen. Out-of-range targets clamp to
    /// the final screen instead of faulting.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::COUNT - 1)]
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index().saturating_add(1))
    }

    pub fn prev(self) -> Self {
        Self::from_index(self.index().saturating_sub(1))
    }

    pub fn is_first(self) -> bool {
        self == Screen::Welcome
    }

    pub fn is_last(self) -> bool {
        self == Screen::Finish
    }

    /// Flow completion as an integer percentage: 0 on the first screen,
    /// 100 on the last, monotone in between.
    pub fn progress_percent(self) -> u8 {
        let last = (Self::COUNT - 1) as f32;
        ((self.index() as f32 / last) * 100.0).round() as u8
    }
}
