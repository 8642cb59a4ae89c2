//! Integration tests for the mam CLI
//!
//! These tests spawn the actual binary and test end-to-end behavior without
//! touching a real MAM server.

mod cli_tests;
mod maintenance_commands;
mod rule_commands;
