use crate::error::{Result, ResultExt as _, RosterError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "roster.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RosterConfig {
    /// Directory holding `members.json`, `yoga.json` and the other fixtures
    pub data_dir: PathBuf,
    /// Default log filter when `RUST_LOG` is not set
    pub log_level: String,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            log_level: "info".to_owned(),
            pretty: true,
        }
    }
}

impl RosterConfig {
    /// Reads the config file, falling back to defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&content)
            .map_err(|e| RosterError::Config(format!("{}: {e}", path.display())))
    }

    /// # Errors
    ///
    /// Returns an error if the parent directory or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| RosterError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
