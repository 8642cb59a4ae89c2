//! Infrastructure implementation of the `ConfigStore` port.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::application::ports::ConfigStore;
use crate::domain::{ApiEnv, MamConfig};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "MAM_CONFIG";

/// Prefix of the `MAM_API_URL`, `MAM_API_USER` and `MAM_API_PASSWORD` overrides.
pub const API_ENV_PREFIX: &str = "MAM_API_";

/// Production implementation of `ConfigStore` that uses a YAML file on disk
/// overlaid with `MAM_API_*` environment variables.
pub struct YamlConfigStore;

impl YamlConfigStore {
    /// `MAM_CONFIG` if set, else `~/.mam/config.yaml`.
    fn path() -> Result<PathBuf> {
        if let Ok(val) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(val));
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(home.join(".mam").join("config.yaml"))
    }

    fn load_file() -> Result<MamConfig> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(MamConfig::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        serde_yaml::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<MamConfig> {
        let env: ApiEnv = envy::prefixed(API_ENV_PREFIX)
            .from_env()
            .context("cannot read MAM_API_* environment")?;
        Ok(Self::load_file()?.with_env(env))
    }
}
