//! Lesson runner abstraction.
//!
//! The [`LessonRunner`] trait decouples the `lesson` command from the check
//! mechanism (by default `cargo test` against the workbook). Tests use
//! scripted runners that return predetermined results without spawning
//! processes.

use std::path::PathBuf;
use std::process::Command;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info, instrument};

use crate::core::types::Lesson;
use crate::io::config::{CheckConfig, TEST_PLACEHOLDER};

/// Runs a lesson's verification checks.
pub trait LessonRunner {
    /// Returns `true` iff every check for `lesson` passed.
    ///
    /// `Err` means the check mechanism itself could not be started.
    fn run(&self, lesson: &Lesson) -> Result<bool>;
}

/// Runner that spawns the configured check command and waits for it.
///
/// Output is inherited so the learner sees test failures directly. There is
/// no timeout.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    command: Vec<String>,
    workdir: PathBuf,
}

impl CommandRunner {
    pub fn new(check: &CheckConfig) -> Self {
        Self {
            command: check.command.clone(),
            workdir: check.workdir.clone(),
        }
    }

    /// Expand `{test}` in every argument.
    pub fn argv(&self, test_ref: &str) -> Vec<String> {
        self.command
            .iter()
            .map(|arg| arg.replace(TEST_PLACEHOLDER, test_ref))
            .collect()
    }
}

impl LessonRunner for CommandRunner {
    #[instrument(skip_all, fields(lesson_id = %lesson.id, test_ref = %lesson.test_ref))]
    fn run(&self, lesson: &Lesson) -> Result<bool> {
        let argv = self.argv(&lesson.test_ref);
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| anyhow!("check command is empty"))?;

        info!(program = %program, workdir = %self.workdir.display(), "starting lesson check");
        let started = Instant::now();
        let status = Command::new(program)
            .args(args)
            .current_dir(&self.workdir)
            .status()
            .with_context(|| format!("spawn check command `{}`", argv.join(" ")))?;

        debug!(
            exit_code = ?status.code(),
            elapsed = ?started.elapsed(),
            "lesson check finished"
        );
        Ok(status.success())
    }
}
