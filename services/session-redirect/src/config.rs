//! Service configuration loaded from `SESSION_REDIRECT_*` environment variables.

use serde::Deserialize;
use thiserror::Error;

/// Prefix every setting is read with.
pub const ENV_PREFIX: &str = "SESSION_REDIRECT_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Env(#[from] envy::Error),

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Server configuration loaded from environment variables via `envy`.
///
/// Each field maps to `SESSION_REDIRECT_<FIELD>`:
///   - `SESSION_REDIRECT_LISTEN_ADDR`    (default `127.0.0.1:8090`)
///   - `SESSION_REDIRECT_COOKIE_NAME`    (required)
///   - `SESSION_REDIRECT_COOKIE_DOMAIN`  (required)
///   - `SESSION_REDIRECT_SESSION_COOKIE` (default `sessionid`)
///   - `SESSION_REDIRECT_LOGIN_URL`      (optional)
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind the HTTP server to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    #[serde(flatten)]
    pub redirect: RedirectConfig,
}

/// What the redirect handler needs to know; no I/O.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RedirectConfig {
    /// Cookie set on the target domain.
    pub cookie_name: String,

    /// Domain the cookie is scoped to; `next` hosts must end with it.
    pub cookie_domain: String,

    /// Cookie carrying the platform session id.
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,

    /// Login page unauthenticated requests are sent to.
    #[serde(default)]
    pub login_url: Option<String>,
}

fn default_listen_addr() -> String {
    "127.0.0.1:8090".to_string()
}

fn default_session_cookie() -> String {
    "sessionid".to_string()
}

impl ServerConfig {
    /// Load from `SESSION_REDIRECT_*`.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing, malformed or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config: Self = envy::prefixed(ENV_PREFIX).from_env()?;
        config.validated()
    }

    /// Load from explicit key/value pairs (names without the prefix).
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing, malformed or blank.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: Self = envy::from_iter(pairs)?;
        config.validated()
    }

    /// An empty cookie domain would match every host.
    fn validated(self) -> Result<Self, ConfigError> {
        if self.redirect.cookie_name.trim().is_empty() {
            return Err(ConfigError::Empty("SESSION_REDIRECT_COOKIE_NAME"));
        }
        if self.redirect.cookie_domain.trim().is_empty() {
            return Err(ConfigError::Empty("SESSION_REDIRECT_COOKIE_DOMAIN"));
        }
        Ok(self)
    }
}
