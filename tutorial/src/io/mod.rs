//! I/O helpers for tutorial commands.

pub mod config;
pub mod paths;
pub mod prompt;
pub mod runner;
pub mod solution;
pub mod status_store;
