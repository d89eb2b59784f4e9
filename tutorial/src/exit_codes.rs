//! Stable exit codes for tutorial CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// I/O or storage failure, failed solution copy, or a declined confirmation.
pub const FAILURE: i32 = 1;
/// `tutorial lesson` ran the checks and they did not pass.
pub const LESSON_FAILED: i32 = 2;
/// Invalid command-line usage. Mirrors the code clap exits with on a parse error.
pub const USAGE: i32 = 2;
