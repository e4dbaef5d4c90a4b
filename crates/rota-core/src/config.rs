//! Configuration for rota
//!
//! Configuration is stored as TOML, by default in `rota.toml` next to where rota runs.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{Result, RotaError};

pub use types::{GraphConfig, HuffmanConfig, RotaConfig, CONFIG_FILE_NAME};

impl RotaConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: RotaConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RotaError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist. Without one, `rota.toml` in `dir` is used when
    /// present, otherwise defaults apply.
    #[tracing::instrument(skip_all, fields(explicit = ?explicit, dir = %dir.display()))]
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(RotaError::invalid_value("config path", path.display()));
            }
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "using discovered config");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}
