//! Deterministic text rendering for console output.

use crate::core::types::{Lesson, LessonStatus};
use crate::style::Color;

pub const STATUS_HEADER: &str = "### Lesson Name                        status\n\
                                 --------------------------------------------------";

/// One row of the `status` table: id, title padded to 35 columns, status.
pub fn status_row(lesson: &Lesson) -> String {
    format!("{} {:35} {}", lesson.id, lesson.title, lesson.status)
}

pub fn status_color(status: LessonStatus) -> Color {
    match status {
        LessonStatus::Complete => Color::Green,
        LessonStatus::InProgress => Color::Yellow,
        LessonStatus::NotStarted => Color::Red,
    }
}

/// Comma-separated ids, in the order given.
pub fn id_list<'a>(ids: impl IntoIterator<Item = &'a str>) -> String {
    ids.into_iter().collect::<Vec<_>>().join(",")
}

/// Remediation block printed after a failed lesson check.
pub fn failure_help(lesson: &Lesson) -> String {
    format!(
        "\nHint: {}\nURL: {}",
        lesson.hint_or_na(),
        lesson.url_or_na()
    )
}

pub fn solution_ready(lesson_id: &str, dest: &str) -> String {
    format!(
        "You may now view the solution file at {dest}\n\
         or run the tests for the lesson with:\n\n\
         tutorial lesson {lesson_id}"
    )
}
