//! Tutorial configuration stored in `tutorial.toml` next to the workbook.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Placeholder substituted with a lesson's test reference in `check.command`.
pub const TEST_PLACEHOLDER: &str = "{test}";

pub const DEFAULT_CONFIG_FILE: &str = "tutorial.toml";

/// Tutorial configuration (TOML).
///
/// Every field is optional; missing fields fall back to the layout of this
/// repository (`workbook/` + `solutions/`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TutorialConfig {
    /// Directory holding one reference solution per lesson (`<test_ref>.rs`).
    pub solutions_dir: PathBuf,

    /// File the learner edits; `solve` overwrites it.
    pub solution_dest: PathBuf,

    /// Overrides the per-user directory that holds `status.json`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_dir: Option<PathBuf>,

    pub check: CheckConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CheckConfig {
    /// Command that verifies a lesson; `{test}` expands to its test reference.
    pub command: Vec<String>,

    /// Working directory for the check command.
    pub workdir: PathBuf,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            command: [
                "cargo",
                "test",
                "--quiet",
                "--manifest-path",
                "workbook/Cargo.toml",
                "--test",
                TEST_PLACEHOLDER,
            ]
            .iter()
            .map(|arg| arg.to_string())
            .collect(),
            workdir: PathBuf::from("."),
        }
    }
}

impl Default for TutorialConfig {
    fn default() -> Self {
        Self {
            solutions_dir: PathBuf::from("solutions"),
            solution_dest: PathBuf::from("workbook/src/main.rs"),
            status_dir: None,
            check: CheckConfig::default(),
        }
    }
}

impl TutorialConfig {
    pub fn validate(&self) -> Result<()> {
        if self.check.command.is_empty() || self.check.command[0].trim().is_empty() {
            return Err(anyhow!("check.command must be a non-empty array"));
        }
        if !self
            .check
            .command
            .iter()
            .any(|arg| arg.contains(TEST_PLACEHOLDER))
        {
            return Err(anyhow!("check.command must reference {TEST_PLACEHOLDER}"));
        }
        if self.solution_dest.as_os_str().is_empty() {
            return Err(anyhow!("solution_dest must not be empty"));
        }
        Ok(())
    }

    /// Path of the reference solution for a test reference.
    pub fn solution_source(&self, test_ref: &str) -> PathBuf {
        self.solutions_dir.join(format!("{test_ref}.rs"))
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `TutorialConfig::default()`.
pub fn load_config(path: &Path) -> Result<TutorialConfig> {
    if !path.exists() {
        let cfg = TutorialConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: TutorialConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
