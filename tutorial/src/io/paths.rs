//! Resolution of the per-user status location.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use tracing::debug;

use crate::io::config::TutorialConfig;

/// Environment variable that overrides the status directory.
pub const HOME_ENV: &str = "TUTORIAL_HOME";

pub const APP_DIR_NAME: &str = "tutorial";
pub const STATUS_FILE: &str = "status.json";

/// Canonical paths used by a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorialPaths {
    pub status_dir: PathBuf,
    pub status_path: PathBuf,
}

impl TutorialPaths {
    pub fn new(status_dir: impl Into<PathBuf>) -> Self {
        let status_dir = status_dir.into();
        Self {
            status_path: status_dir.join(STATUS_FILE),
            status_dir,
        }
    }

    /// Resolve from the environment, then config, then the platform config dir.
    pub fn resolve(config: &TutorialConfig) -> Result<Self> {
        let env_dir = std::env::var_os(HOME_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self::resolve_with(env_dir.as_deref(), config, dirs::config_dir())
    }

    fn resolve_with(
        env_dir: Option<&Path>,
        config: &TutorialConfig,
        platform_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let dir = if let Some(dir) = env_dir {
            debug!(dir = %dir.display(), "status dir from environment");
            dir.to_path_buf()
        } else if let Some(dir) = &config.status_dir {
            debug!(dir = %dir.display(), "status dir from config");
            dir.clone()
        } else {
            platform_dir
                .map(|base| base.join(APP_DIR_NAME))
                .ok_or_else(|| {
                    anyhow!("cannot determine a config directory; set {HOME_ENV}")
                })?
        };
        Ok(Self::new(dir))
    }
}
