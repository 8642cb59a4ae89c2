//! Errors that abort a hook run.
//!
//! Only boundary failures live here. Anything that goes wrong while judging
//! a single file becomes a `failed` verdict instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HookError {
    #[error("failed to read request from stdin: {0}")]
    ReadInput(#[source] std::io::Error),

    #[error("malformed hook request: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to write response to stdout: {0}")]
    WriteOutput(#[source] std::io::Error),

    #[error("failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),
}
