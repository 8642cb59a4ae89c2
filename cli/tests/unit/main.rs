//! Unit tests for the mam CLI
//!
//! These tests drive the application services through in-memory port
//! implementations and run without network or external processes.

mod cleanup_service;
mod duration_service;
mod helpers;
mod item_rules_service;
mod mocks;
