//! Redirect decision for `GET /session_redirect_plugin/?next=<url>`.
//!
//! Pure: the handler passes in the query parameter and the session cookie
//! and turns the outcome into a response.

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use thiserror::Error;
use url::Url;

use crate::config::RedirectConfig;

/// Characters left alone when quoting the request path for `?next=`.
const PATH_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// `Set-Cookie` sharing the session with the target domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCookie {
    pub name: String,
    pub value: String,
    pub domain: String,
}

impl fmt::Display for SetCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}; Domain={}; Path=/",
            self.name, self.value, self.domain
        )
    }
}

/// Where the browser is sent (302).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectOutcome {
    /// Accepted `next`; the cookie is set only when a session exists.
    Redirect {
        location: String,
        cookie: Option<SetCookie>,
    },
    /// No session: authenticate first, then come back here.
    Login { location: String },
}

/// Rejected requests: 500 for `NotConfigured`, 400 otherwise.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RedirectRejection {
    #[error("{0} not configured")]
    NotConfigured(&'static str),

    #[error("next is a required parameter")]
    MissingNext,

    #[error("next parameter must be a url with http or https")]
    BadScheme,

    #[error("next parameter not a subdomain of the correct domain")]
    WrongDomain,
}

/// Decide the response for one request.
///
/// `request_path` is the path and query of the incoming request, used as the
/// login page's return address.
///
/// # Errors
///
/// Returns a rejection when the cookie name or domain is blank, when `next`
/// is missing, is not an absolute http(s) URL, or names a host outside the
/// cookie domain.
pub fn resolve_redirect(
    config: &RedirectConfig,
    request_path: &str,
    next: Option<&str>,
    session_id: Option<&str>,
) -> Result<RedirectOutcome, RedirectRejection> {
    if config.cookie_name.trim().is_empty() {
        return Err(RedirectRejection::NotConfigured("SESSION_REDIRECT_COOKIE_NAME"));
    }
    if config.cookie_domain.trim().is_empty() {
        return Err(RedirectRejection::NotConfigured("SESSION_REDIRECT_COOKIE_DOMAIN"));
    }

    let session_id = session_id.filter(|s| !s.is_empty());

    if let (None, Some(login_url)) = (session_id, &config.login_url) {
        return Ok(RedirectOutcome::Login {
            location: format!(
                "{login_url}?next={}",
                utf8_percent_encode(request_path, PATH_SAFE)
            ),
        });
    }

    let next = next.filter(|n| !n.is_empty()).ok_or(RedirectRejection::MissingNext)?;
    let url = Url::parse(next).map_err(|_| RedirectRejection::BadScheme)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(RedirectRejection::BadScheme);
    }

    let host = url.host_str().map(str::to_ascii_lowercase).unwrap_or_default();
    if host.is_empty() || !host.ends_with(&config.cookie_domain.to_ascii_lowercase()) {
        return Err(RedirectRejection::WrongDomain);
    }

    let cookie = session_id.map(|value| SetCookie {
        name: config.cookie_name.clone(),
        value: value.to_string(),
        domain: config.cookie_domain.clone(),
    });
    Ok(RedirectOutcome::Redirect {
        location: url.into(),
        cookie,
    })
}
