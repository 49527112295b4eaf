//! Layered configuration for the `tally` binary using figment.
//!
//! Sources (in priority order, highest wins):
//! 1. The `--file` flag (applied in [`Config::storage_path`], not figment)
//! 2. Environment variables (`TALLY_*` prefix, `__` as separator, e.g.
//!    `TALLY_STORAGE__PATH`)
//! 3. User-level `~/.config/tally/config.toml`
//! 4. Built-in defaults (`~/.tally/tasks.json`)

use std::path::{Path, PathBuf};

use anyhow::Context;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Backing task file. Resolved to `~/.tally/tasks.json` when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load from the user config file and environment.
    pub fn load() -> Result<Self, figment::Error> {
        let config_file = dirs::config_dir().map(|dir| dir.join("tally").join("config.toml"));
        Self::figment(config_file.as_deref()).extract()
    }

    fn figment(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = config_file {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed("TALLY_").split("__"))
    }

    /// Resolve the backing file: flag override, then config, then the
    /// default under the user's home directory.
    pub fn storage_path(&self, flag_override: Option<&Path>) -> anyhow::Result<PathBuf> {
        if let Some(path) = flag_override {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = &self.storage.path {
            return Ok(path.clone());
        }
        dirs::home_dir()
            .map(|home| home.join(".tally").join("tasks.json"))
            .context("home directory not found; pass --file or set TALLY_STORAGE__PATH")
    }
}
