//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod changes;
pub mod config;
pub mod error;
pub mod item;
pub mod videos;

pub use changes::ChangeFilter;
pub use config::{ApiEnv, MamConfig, SearchConfig};
pub use error::{ApiError, ChangeFilterError};
pub use item::KeepFiles;
