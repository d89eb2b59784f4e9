//! Command handlers for the `tutorial` CLI.
//!
//! Each handler composes the context, its injected collaborators, and a
//! [`Console`], and returns a [`CommandOutcome`]. Mapping outcomes to process
//! exit codes happens once, in `main`.

use std::io::Write;

use anyhow::Result;
use tracing::{info, warn};

use crate::context::TutorialContext;
use crate::core::render::{
    STATUS_HEADER, failure_help, id_list, solution_ready, status_color, status_row,
};
use crate::core::types::LessonStatus;
use crate::exit_codes;
use crate::io::prompt::Confirm;
use crate::io::runner::LessonRunner;
use crate::io::solution::copy_solution;
use crate::style::{Color, Console};

pub const RERUN_QUESTION: &str = "This lesson was already completed. Do you want to re-run?";
pub const RESET_QUESTION: &str =
    "Are you sure you want to reset the status of all lessons (start over)?";

/// Result of a single command, independent of how it is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Success,
    /// The lesson's checks ran and did not pass.
    LessonFailed,
    /// The learner declined a confirmation prompt.
    Aborted,
    /// `solve` could not copy the solution into place.
    CopyFailed,
}

impl CommandOutcome {
    pub fn exit_code(self) -> i32 {
        match self {
            CommandOutcome::Success => exit_codes::OK,
            CommandOutcome::LessonFailed => exit_codes::LESSON_FAILED,
            CommandOutcome::Aborted | CommandOutcome::CopyFailed => exit_codes::FAILURE,
        }
    }
}

/// `tutorial lesson <id>`: run the lesson's checks and record the result.
pub fn lesson<R, C, W>(
    ctx: &mut TutorialContext,
    lesson_id: &str,
    runner: &R,
    confirm: &mut C,
    console: &mut Console<W>,
) -> Result<CommandOutcome>
where
    R: LessonRunner,
    C: Confirm,
    W: Write,
{
    let lesson = ctx.lesson(lesson_id)?.clone();
    if lesson.status == LessonStatus::Complete && !confirm.confirm(RERUN_QUESTION)? {
        return Ok(CommandOutcome::Aborted);
    }

    console.line(&format!(
        "Running tests for lesson {} {}...",
        lesson.id, lesson.title
    ))?;
    console.flush()?;

    let passed = runner.run(&lesson)?;
    if passed {
        ctx.set_status(lesson_id, LessonStatus::Complete)?;
        console.colored("Good job!", Color::Green)?;
    } else {
        ctx.set_status(lesson_id, LessonStatus::InProgress)?;
        console.colored(&failure_help(&lesson), Color::Blue)?;
    }
    ctx.save()?;
    info!(lesson_id, passed, "lesson attempt recorded");

    if passed {
        Ok(CommandOutcome::Success)
    } else {
        Ok(CommandOutcome::LessonFailed)
    }
}

/// `tutorial lesson-ids`: print every known id, sorted, comma-separated.
pub fn lesson_ids<W: Write>(
    ctx: &TutorialContext,
    console: &mut Console<W>,
) -> Result<CommandOutcome> {
    console.line(&id_list(ctx.lessons.keys().map(String::as_str)))?;
    Ok(CommandOutcome::Success)
}

/// `tutorial reset [--yes]`: forget all progress.
pub fn reset<C, W>(
    ctx: &mut TutorialContext,
    yes: bool,
    confirm: &mut C,
    console: &mut Console<W>,
) -> Result<CommandOutcome>
where
    C: Confirm,
    W: Write,
{
    if !yes && !confirm.confirm(RESET_QUESTION)? {
        return Ok(CommandOutcome::Aborted);
    }
    ctx.reset()?;
    info!(status_path = %ctx.paths.status_path.display(), "tutorial reset");
    console.line("Tutorial reset.")?;
    Ok(CommandOutcome::Success)
}

/// `tutorial solve <id>`: copy the reference solution over the learner's file.
pub fn solve<W: Write>(
    ctx: &TutorialContext,
    lesson_id: &str,
    console: &mut Console<W>,
) -> Result<CommandOutcome> {
    let lesson = ctx.lesson(lesson_id)?;
    console.line(&format!(
        "Copying solution for lesson {} {}",
        lesson.id, lesson.title
    ))?;

    let source = ctx.config.solution_source(&lesson.test_ref);
    let dest = &ctx.config.solution_dest;
    console.line(&format!("copy: {} -> {}", source.display(), dest.display()))?;

    if let Err(err) = copy_solution(&source, dest) {
        warn!(lesson_id, err = %err, "solution copy failed");
        console.colored(&err.to_string(), Color::Red)?;
        return Ok(CommandOutcome::CopyFailed);
    }

    console.line(&solution_ready(lesson_id, &dest.display().to_string()))?;
    Ok(CommandOutcome::Success)
}

/// `tutorial status`: print the progress table.
pub fn status<W: Write>(ctx: &TutorialContext, console: &mut Console<W>) -> Result<CommandOutcome> {
    console.bold(STATUS_HEADER)?;
    for lesson in ctx.lessons.values() {
        console.colored(&status_row(lesson), status_color(lesson.status))?;
    }
    Ok(CommandOutcome::Success)
}
