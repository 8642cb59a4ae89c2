//! CLI configuration types.

use mam_common::ApiConfig;
use serde::{Deserialize, Serialize};

/// Search index settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchConfig {
    /// Full search endpoint URL, e.g. `http://localhost:9200/portal_item/_search`.
    #[serde(default)]
    pub url: Option<String>,
}

/// Contents of `~/.mam/config.yaml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MamConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub search: SearchConfig,
}

/// `MAM_API_*` environment overrides.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ApiEnv {
    pub url: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl MamConfig {
    /// Apply environment overrides on top of file values.
    #[must_use]
    pub fn with_env(mut self, env: ApiEnv) -> Self {
        if let Some(url) = env.url {
            self.api.url = url;
        }
        if let Some(user) = env.user {
            self.api.username = user;
        }
        if let Some(password) = env.password {
            self.api.password = password;
        }
        self
    }
}
