//! Per-invocation context shared by every command handler.

use std::collections::BTreeMap;

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use crate::core::catalog::statuses_from_lessons;
use crate::core::types::{Lesson, LessonStatus, StatusMap};
use crate::io::config::TutorialConfig;
use crate::io::paths::TutorialPaths;
use crate::io::status_store::{load_lessons, save_statuses};

/// Resolved paths, config, and the merged lesson map for one command.
#[derive(Debug, Clone)]
pub struct TutorialContext {
    pub paths: TutorialPaths,
    pub config: TutorialConfig,
    pub lessons: BTreeMap<String, Lesson>,
}

impl TutorialContext {
    /// Load persisted statuses and merge them into the catalog.
    pub fn load(paths: TutorialPaths, config: TutorialConfig) -> Result<Self> {
        let lessons = load_lessons(&paths.status_path).context("load lesson statuses")?;
        debug!(lessons = lessons.len(), "context loaded");
        Ok(Self {
            paths,
            config,
            lessons,
        })
    }

    pub fn lesson(&self, id: &str) -> Result<&Lesson> {
        self.lessons
            .get(id)
            .ok_or_else(|| anyhow!("unknown lesson {id}"))
    }

    pub fn set_status(&mut self, id: &str, status: LessonStatus) -> Result<()> {
        let lesson = self
            .lessons
            .get_mut(id)
            .ok_or_else(|| anyhow!("unknown lesson {id}"))?;
        lesson.status = status;
        Ok(())
    }

    /// Write every lesson's status back to the status file.
    pub fn save(&self) -> Result<()> {
        save_statuses(&self.paths.status_path, &statuses_from_lessons(&self.lessons))
            .context("save lesson statuses")
    }

    /// Overwrite the status file with an empty map.
    pub fn reset(&mut self) -> Result<()> {
        save_statuses(&self.paths.status_path, &StatusMap::new())
            .context("reset lesson statuses")?;
        for lesson in self.lessons.values_mut() {
            lesson.status = LessonStatus::NotStarted;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::status_store::load_statuses;
    use crate::test_support::TestWorkspace;

    #[test]
    fn corrupt_status_file_fails_load() {
        let ws = TestWorkspace::new().expect("workspace");
        ws.write_status_file("[1, 2").expect("write");

        let err = TutorialContext::load(ws.paths(), ws.config()).unwrap_err();
        assert!(format!("{err:#}").contains("corrupt"));
    }

    #[test]
    fn save_persists_only_started_lessons() {
        let ws = TestWorkspace::new().expect("workspace");
        let mut ctx = ws.context().expect("context");
        ctx.set_status("02", LessonStatus::InProgress).expect("set");

        ctx.save().expect("save");

        let statuses = load_statuses(&ws.paths().status_path).expect("load");
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses["02"], LessonStatus::InProgress);
    }

    #[test]
    fn unknown_lesson_is_an_error() {
        let ws = TestWorkspace::new().expect("workspace");
        let mut ctx = ws.context().expect("context");
        assert!(ctx.lesson("zz").is_err());
        assert!(ctx.set_status("zz", LessonStatus::Complete).is_err());
    }
}
