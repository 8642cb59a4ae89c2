use serde::{Deserialize, Serialize};

/// REST API endpoint and credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// Server root including port, e.g. `http://mam.example.com:8080`.
    #[serde(default)]
    pub url: String,

    /// Basic-auth user name.
    #[serde(default)]
    pub username: String,

    /// Basic-auth password.
    #[serde(default)]
    pub password: String,
}

impl ApiConfig {
    /// Base URL every REST path is appended to (`<url>/API`).
    #[must_use]
    pub fn api_base(&self) -> String {
        format!("{}/API", self.url.trim_end_matches('/'))
    }

    /// Names of the settings that are still empty.
    #[must_use]
    pub fn missing_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.url.trim().is_empty() {
            missing.push("api.url");
        }
        if self.username.is_empty() {
            missing.push("api.username");
        }
        if self.password.is_empty() {
            missing.push("api.password");
        }
        missing
    }
}
