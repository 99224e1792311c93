//! `gw.toml` settings.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

pub const DEFAULT_CONFIG_FILE: &str = "gw.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Whether the static-analysis aggregation capability is installed.
    /// When false, no comments are ever produced.
    pub analysis_collector: bool,
    pub parents: ParentsConfig,
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParentsConfig {
    /// Consider at most this many parent commits, first parent first.
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Root token for path normalization, replacing each build's workspace.
    pub workspace_root: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis_collector: true,
            parents: ParentsConfig::default(),
            paths: PathsConfig::default(),
        }
    }
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `explicit` if given, else `./gw.toml` when it exists, else the
    /// defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_from(explicit, Path::new(DEFAULT_CONFIG_FILE))
    }

    fn load_from(explicit: Option<&Path>, fallback: &Path) -> Result<Self> {
        let path = match explicit {
            Some(p) => p,
            None if fallback.is_file() => fallback,
            None => {
                tracing::debug!("no config file, using defaults");
                return Ok(Self::default());
            }
        };
        tracing::debug!(path = %path.display(), "loading config");
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<()> {
        if self.parents.limit == Some(0) {
            return Err(Error::Config(
                "parents.limit must be at least 1 (omit it to consider every parent)".into(),
            ));
        }
        if let Some(root) = &self.paths.workspace_root
            && root.trim().is_empty()
        {
            return Err(Error::Config("paths.workspace_root must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
