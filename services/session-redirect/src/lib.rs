//! Session-redirect service.
//!
//! Sends an authenticated platform user on to a sibling site under the same
//! parent domain, copying the platform session id into a cookie that site
//! can read.

pub mod config;
pub mod redirect;
pub mod routes;

pub use config::{ConfigError, RedirectConfig, ServerConfig};
pub use redirect::{RedirectOutcome, RedirectRejection, SetCookie, resolve_redirect};
pub use routes::router;
