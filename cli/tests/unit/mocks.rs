//! In-memory port implementations shared by the service tests.

#![allow(dead_code, clippy::expect_used)]

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::process::Output;
use std::sync::Mutex;

use anyhow::Result;
use mam_cli::application::ports::{CommandRunner, LocalFs, MamApi, ProgressReporter, SearchIndex};
use mam_cli::domain::KeepFiles;
use mam_common::api::search::SearchPage;
use mam_common::api::{
    ChangeSetDocument, ItemDocument, ItemListPage, ItemRef, JobDocument,
};

// ── Progress reporter ─────────────────────────────────────────────────────────

/// Records every event as `"<kind>: <message>"`.
#[derive(Default)]
pub struct RecordingReporter {
    pub events: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().expect("lock").clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|e| e.starts_with("warn: "))
            .collect()
    }
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.events.lock().expect("lock").push(format!("step: {message}"));
    }
    fn success(&self, message: &str) {
        self.events.lock().expect("lock").push(format!("success: {message}"));
    }
    fn warn(&self, message: &str) {
        self.events.lock().expect("lock").push(format!("warn: {message}"));
    }
}

// ── REST API ──────────────────────────────────────────────────────────────────

pub fn page(hits: u64, ids: &[&str]) -> ItemListPage {
    ItemListPage {
        hits,
        item: ids
            .iter()
            .map(|id| ItemRef {
                id: (*id).to_string(),
            })
            .collect(),
    }
}

pub fn changes(json: &str) -> ChangeSetDocument {
    serde_json::from_str(json).expect("valid change set")
}

/// A change by `editor` on `portal_mf123456` in May 2018 containing `draft`.
pub fn matching_change(id: &str) -> String {
    format!(
        r#"{{"id":"{id}","metadata":{{"timespan":[{{"field":[{{"name":"portal_mf123456","timestamp":"2018-05-08T10:00:00.000+0000","user":"editor","value":[{{"value":"first draft"}}]}}]}}]}}}}"#
    )
}

#[derive(Default)]
pub struct MockApi {
    /// Listing pages keyed by their 1-based `first` offset.
    pub pages: HashMap<u64, ItemListPage>,
    /// Change lists; a missing entry answers non-200.
    pub changes: HashMap<String, ChangeSetDocument>,
    pub media_type: String,
    /// Change ids whose delete fails.
    pub failing_deletes: HashSet<String>,
    pub list_calls: Mutex<Vec<u64>>,
    pub deleted_changes: Mutex<Vec<(String, String)>>,
    pub deleted_items: Mutex<Vec<(String, KeepFiles)>>,
    pub thumbnail_jobs: Mutex<Vec<String>>,
}

impl MockApi {
    pub fn deleted_changes(&self) -> Vec<(String, String)> {
        self.deleted_changes.lock().expect("lock").clone()
    }

    pub fn deleted_items(&self) -> Vec<(String, KeepFiles)> {
        self.deleted_items.lock().expect("lock").clone()
    }
}

impl MamApi for MockApi {
    fn endpoint(&self, path: &str) -> String {
        format!("http://vs.test:8080/API/{path}")
    }

    async fn list_items(&self, first: u64, _number: u64) -> Result<ItemListPage> {
        self.list_calls.lock().expect("lock").push(first);
        Ok(self.pages.get(&first).cloned().unwrap_or_default())
    }

    async fn item_field(&self, item_id: &str, field: &str) -> Result<ItemDocument> {
        let doc = format!(
            r#"{{"id":"{item_id}","metadata":{{"timespan":[{{"field":[{{"name":"{field}","value":[{{"value":"{}"}}]}}]}}]}}}}"#,
            self.media_type
        );
        Ok(serde_json::from_str(&doc)?)
    }

    async fn start_thumbnail_job(&self, item_id: &str) -> Result<JobDocument> {
        self.thumbnail_jobs
            .lock()
            .expect("lock")
            .push(item_id.to_string());
        Ok(JobDocument {
            job_id: "VX-77".to_string(),
            status: "READY".to_string(),
            job_type: "THUMBNAIL".to_string(),
            user: "admin".to_string(),
        })
    }

    async fn metadata_changes(&self, item_id: &str) -> Result<Option<ChangeSetDocument>> {
        Ok(self.changes.get(item_id).cloned())
    }

    async fn delete_metadata_change(&self, item_id: &str, change_id: &str) -> Result<()> {
        if self.failing_deletes.contains(change_id) {
            anyhow::bail!("DELETE failed with HTTP 500");
        }
        self.deleted_changes
            .lock()
            .expect("lock")
            .push((item_id.to_string(), change_id.to_string()));
        Ok(())
    }

    async fn delete_item(&self, item_id: &str, keep: &KeepFiles) -> Result<()> {
        self.deleted_items
            .lock()
            .expect("lock")
            .push((item_id.to_string(), keep.clone()));
        Ok(())
    }
}

// ── Search index ──────────────────────────────────────────────────────────────

/// Serves canned pages in order and records the requested offsets.
#[derive(Default)]
pub struct MockIndex {
    pub pages: Vec<SearchPage>,
    pub requests: Mutex<Vec<(u64, u64)>>,
}

impl SearchIndex for MockIndex {
    async fn search_items(&self, from: u64, size: u64) -> Result<SearchPage> {
        let mut requests = self.requests.lock().expect("lock");
        let page = self.pages.get(requests.len()).cloned().unwrap_or_default();
        requests.push((from, size));
        Ok(page)
    }
}

pub fn search_page(json: &str) -> SearchPage {
    serde_json::from_str(json).expect("valid search page")
}

// ── Command runner and filesystem ─────────────────────────────────────────────

pub struct MockRunner {
    pub output: fn() -> Output,
    pub calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl MockRunner {
    pub fn new(output: fn() -> Output) -> Self {
        Self {
            output,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().expect("lock").clone()
    }
}

impl CommandRunner for MockRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        self.calls.lock().expect("lock").push((
            program.to_string(),
            args.iter().map(ToString::to_string).collect(),
        ));
        Ok((self.output)())
    }
}

/// Filesystem where only `existing` paths exist.
#[derive(Default)]
pub struct MemoryFs {
    pub existing: HashSet<PathBuf>,
    pub created_dirs: Mutex<Vec<PathBuf>>,
}

impl LocalFs for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.existing.contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.created_dirs
            .lock()
            .expect("lock")
            .push(path.to_path_buf());
        Ok(())
    }
}
