//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use mam_common::CommonError;
use thiserror::Error;

// ── REST API errors ───────────────────────────────────────────────────────────

/// Failures talking to the MAM REST API or its search index.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{method} {url} failed with HTTP {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },

    #[error("{method} {url} failed: {message}")]
    Transport {
        method: &'static str,
        url: String,
        message: String,
    },

    #[error("cannot decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("API is not configured, missing: {0}")]
    NotConfigured(String),
}

// ── Change filter errors ──────────────────────────────────────────────────────

/// Rejected `remove-metadata-changes` filter arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChangeFilterError {
    #[error("--user must not be empty")]
    EmptyUser,

    #[error("--text must not be empty")]
    EmptyText,

    #[error(transparent)]
    Invalid(#[from] CommonError),
}
