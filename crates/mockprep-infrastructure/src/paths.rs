//! Unified path management for mockprep files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/mockprep/          # Config directory
//! ├── config.toml              # Client configuration
//! ├── auth.json                # Signed-in user (mode 600)
//! └── logs/                    # Application logs
//!     └── mockprep.log.YYYY-MM-DD
//! ```

use std::path::{Path, PathBuf};

use mockprep_core::PrepError;
use mockprep_core::error::Result;

const APP_DIR: &str = "mockprep";

/// Resolves every file mockprep reads or writes.
///
/// Defaults to the platform config directory. Tests pass an explicit base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepPaths {
    base: PathBuf,
}

impl PrepPaths {
    /// Uses `base` when given, otherwise `<platform config dir>/mockprep`.
    pub fn new(base: Option<PathBuf>) -> Result<Self> {
        let base = match base {
            Some(base) => base,
            None => dirs::config_dir()
                .ok_or_else(|| PrepError::config("Cannot find home directory"))?
                .join(APP_DIR),
        };
        Ok(Self { base })
    }

    pub fn config_dir(&self) -> &Path {
        &self.base
    }

    pub fn config_file(&self) -> PathBuf {
        self.base.join("config.toml")
    }

    /// Holds a bearer token; keep it private to the user.
    pub fn auth_file(&self) -> PathBuf {
        self.base.join("auth.json")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.base.join("logs")
    }
}
