//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: HTTP calls to the REST API
//! and search index, process execution, filesystem access, and config loading.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod api;
pub mod command_runner;
pub mod config;
pub mod fs;
pub mod search;
