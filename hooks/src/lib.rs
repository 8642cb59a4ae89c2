//! Agent hook handlers.
//!
//! Each binary in this crate is a one-shot filter: it reads at most one JSON
//! request from stdin, evaluates every listed file with a single policy and
//! writes one newline-terminated JSON response to stdout.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod args;
pub mod error;
pub mod inspect;
pub mod logging;
pub mod policy;
pub mod protocol;
pub mod stdin;

pub use args::HookArgs;
pub use error::HookError;
pub use protocol::{FilePolicy, run_hook};
pub use stdin::InputMode;
