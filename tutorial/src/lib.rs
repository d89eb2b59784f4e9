//! Interactive lesson runner for the clap workbook.
//!
//! The crate presents a fixed sequence of lessons, runs each lesson's checks
//! against the learner's workbook, and records per-lesson progress in a
//! per-user `status.json`. The architecture keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (catalog, status merging, rendering).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (status file, config, check process,
//!   prompts, solution copies). Isolated behind traits where tests need fakes.
//!
//! [`commands`] composes the two behind a per-invocation [`context::TutorialContext`].

pub mod commands;
pub mod context;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod style;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
