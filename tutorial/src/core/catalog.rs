//! Compiled-in lesson catalog and status merging.

use std::collections::BTreeMap;

use tracing::warn;

use crate::core::types::{Lesson, LessonDef, LessonStatus, StatusMap};

/// Base URL of the reference documentation lessons point into.
pub const REFERENCE_ROOT: &str = "https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html";

/// The curriculum, in presentation order.
pub const LESSONS: &[LessonDef] = &[
    LessonDef {
        id: "00",
        title: "Basic Options",
        test_ref: "basic_options",
        hint: Some(
            "Add a `name: String` field with `#[arg(long, default_value = \"World\")]` \
             and print `Hello, {name}!`.",
        ),
        url: Some("https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#options"),
    },
    LessonDef {
        id: "01",
        title: "Basic Types",
        test_ref: "basic_types",
        hint: Some(
            "Declare `Option<i64>`, `Option<f64>` and `Option<bool>` fields; clap rejects \
             values that do not parse. Print `int: {v}`, `float: {v}`, `bool: {v}`.",
        ),
        url: Some("https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#validated-values"),
    },
    LessonDef {
        id: "02",
        title: "Flags",
        test_ref: "flags",
        hint: Some(
            "A `bool` field with `#[arg(short, long)]` is a flag. Use \
             `action = ArgAction::Count` on a `u8` to count repeated `-v`.",
        ),
        url: Some("https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#flags"),
    },
    LessonDef {
        id: "03",
        title: "Arguments",
        test_ref: "arguments",
        hint: Some(
            "A field without `#[arg(long)]` is positional. `files: Vec<String>` accepts \
             any number of values; print `file: {name}` for each.",
        ),
        url: Some("https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#positionals"),
    },
];

/// Lesson identifiers sorted lexicographically.
pub fn list_ids() -> Vec<&'static str> {
    let mut ids: Vec<&'static str> = LESSONS.iter().map(|def| def.id).collect();
    ids.sort_unstable();
    ids
}

/// Look up a lesson definition by id.
pub fn find(id: &str) -> Option<&'static LessonDef> {
    LESSONS.iter().find(|def| def.id == id)
}

/// Merge static definitions with persisted statuses.
///
/// Lessons without an entry default to `NotStarted`. Entries for unknown ids
/// are ignored.
pub fn merge_statuses(defs: &[LessonDef], statuses: &StatusMap) -> BTreeMap<String, Lesson> {
    for id in statuses.keys() {
        if !defs.iter().any(|def| def.id == id) {
            warn!(lesson_id = %id, "ignoring status for unknown lesson");
        }
    }
    defs.iter()
        .map(|def| {
            let status = statuses.get(def.id).copied().unwrap_or_default();
            (def.id.to_string(), Lesson::from_def(def, status))
        })
        .collect()
}

/// Project merged lessons back onto the persisted form.
///
/// `NotStarted` is implied by absence and never written.
pub fn statuses_from_lessons(lessons: &BTreeMap<String, Lesson>) -> StatusMap {
    lessons
        .values()
        .filter(|lesson| lesson.status != LessonStatus::NotStarted)
        .map(|lesson| (lesson.id.clone(), lesson.status))
        .collect()
}
