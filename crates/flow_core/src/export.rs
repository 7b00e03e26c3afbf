//! Profile-notes export payload and its JSON rendering.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed name of the exported artifact.
pub const EXPORT_FILE_NAME: &str = "bewerbung-profile-notizen.json";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize profile export: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Snapshot of the session handed to the evaluator on demand: quiz score,
/// recorded skill matches, and the moment of export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileExport {
    #[serde(rename = "quizScore")]
    pub quiz_score: u32,
    pub matches: BTreeMap<String, String>,
    pub timestamp: DateTime<Utc>,
}

impl ProfileExport {
    pub fn new(quiz_score: u32, matches: BTreeMap<String, String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            quiz_score,
            matches,
            timestamp,
        }
    }

    /// UTF-8 JSON document with two-space indentation and exactly three
    /// top-level keys: `quizScore`, `matches`, `timestamp`.
    pub fn render_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[path = "tests/export_tests.rs"]
mod tests;
