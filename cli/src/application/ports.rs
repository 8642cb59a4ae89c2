//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and `mam_common`, never from
//! `crate::infra`, `crate::commands`, or `crate::output`.

use std::path::Path;
use std::process::Output;

use anyhow::Result;
use mam_common::api::search::SearchPage;
use mam_common::api::{ChangeSetDocument, ItemDocument, ItemListPage, JobDocument};

use crate::domain::{KeepFiles, MamConfig};

// ── REST API Port ─────────────────────────────────────────────────────────────

/// The subset of the MAM REST API the commands use.
#[allow(async_fn_in_trait)]
pub trait MamApi {
    /// Absolute URL of `path` relative to the API base, for reporting.
    fn endpoint(&self, path: &str) -> String;
    /// One page of the item listing (`first` is 1-based).
    async fn list_items(&self, first: u64, number: u64) -> Result<ItemListPage>;
    /// Item document carrying only the named metadata field.
    async fn item_field(&self, item_id: &str, field: &str) -> Result<ItemDocument>;
    /// Start a thumbnail job on the item.
    async fn start_thumbnail_job(&self, item_id: &str) -> Result<JobDocument>;
    /// Metadata change history, or `None` when the API answers non-200.
    async fn metadata_changes(&self, item_id: &str) -> Result<Option<ChangeSetDocument>>;
    /// Remove one change from an item's metadata history.
    async fn delete_metadata_change(&self, item_id: &str, change_id: &str) -> Result<()>;
    /// Permanently delete the item, keeping the selected files.
    async fn delete_item(&self, item_id: &str, keep: &KeepFiles) -> Result<()>;
}

// ── Search Index Port ─────────────────────────────────────────────────────────

/// Paged access to the search index.
#[allow(async_fn_in_trait)]
pub trait SearchIndex {
    /// Non-deleted items, `size` hits starting at offset `from`.
    async fn search_items(&self, from: u64, size: u64) -> Result<SearchPage>;
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds the
    /// runner's timeout. On timeout, the child process must be killed.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Raw filesystem operations used by the video generator.
pub trait LocalFs {
    fn exists(&self, path: &Path) -> bool;
    /// Create `path` and all missing parents.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created.
    fn create_dir_all(&self, path: &Path) -> Result<()>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts loading the CLI configuration.
pub trait ConfigStore {
    /// Load the configuration, with environment overrides applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<MamConfig>;
}
