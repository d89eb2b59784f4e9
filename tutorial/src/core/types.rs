//! Shared deterministic types for the lesson catalog and status store.
//!
//! These types define the contract between the catalog, the persisted status
//! file, and the command handlers. They carry no I/O.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sentinel rendered in place of an absent hint or URL.
pub const NOT_AVAILABLE: &str = "n/a";

/// Completion status of a single lesson.
///
/// Persisted as kebab-case strings. An identifier missing from the status
/// file is `NotStarted`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LessonStatus {
    #[default]
    NotStarted,
    InProgress,
    Complete,
}

impl LessonStatus {
    /// Persisted string form.
    pub fn as_str(self) -> &'static str {
        match self {
            LessonStatus::NotStarted => "not-started",
            LessonStatus::InProgress => "in-progress",
            LessonStatus::Complete => "complete",
        }
    }
}

impl std::fmt::Display for LessonStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted mapping from lesson id to status (`status.json`).
pub type StatusMap = BTreeMap<String, LessonStatus>;

/// Static, compiled-in lesson metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonDef {
    pub id: &'static str,
    pub title: &'static str,
    /// Name of the verification test target, also the solution file stem.
    pub test_ref: &'static str,
    pub hint: Option<&'static str>,
    pub url: Option<&'static str>,
}

/// Catalog metadata merged with the learner's persisted status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub test_ref: String,
    pub hint: Option<String>,
    pub url: Option<String>,
    pub status: LessonStatus,
}

impl Lesson {
    pub fn from_def(def: &LessonDef, status: LessonStatus) -> Self {
        Self {
            id: def.id.to_string(),
            title: def.title.to_string(),
            test_ref: def.test_ref.to_string(),
            hint: def.hint.map(str::to_string),
            url: def.url.map(str::to_string),
            status,
        }
    }

    pub fn hint_or_na(&self) -> &str {
        self.hint.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn url_or_na(&self) -> &str {
        self.url.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}
