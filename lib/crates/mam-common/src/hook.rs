//! Agent hook request/response contract.
//!
//! The hosting agent writes one JSON request to the hook's stdin and reads
//! one newline-terminated JSON response from its stdout. A hook started
//! without input answers with a [`HookResponse::Capability`] record so the
//! agent can discover it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Protocol version advertised in capability responses.
pub const API_VERSION: u32 = 2;

/// Wire name of the only operation hooks act on.
pub const FILE_READY: &str = "file_ready";

/// Operation requested by the agent, decoded once at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Operation {
    /// Files are stable on disk and may be evaluated.
    FileReady,
    /// Any operation this crate does not act on (`file_new`, `open_with`, ...).
    /// Non-string values are kept as their JSON text.
    Other(String),
    /// No `operation` key, or `null`.
    #[default]
    Absent,
}

impl Operation {
    /// Map the raw wire value to an operation.
    #[must_use]
    pub fn from_value(raw: &Value) -> Self {
        match raw {
            Value::Null => Self::Absent,
            Value::String(op) if op == FILE_READY => Self::FileReady,
            Value::String(op) => Self::Other(op.clone()),
            other => Self::Other(other.to_string()),
        }
    }

    /// Wire name of the operation, `None` when absent.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::FileReady => Some(FILE_READY),
            Self::Other(op) => Some(op),
            Self::Absent => None,
        }
    }
}

/// One file descriptor sent by the agent.
///
/// Identity is `path`; every other caller-supplied field is carried through
/// to the response untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    pub path: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FileEntry {
    /// Entry with no caller-supplied fields.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            extra: Map::new(),
        }
    }

    /// Attach a verdict, replacing any `status`/`message` the caller sent.
    #[must_use]
    pub fn annotate(mut self, verdict: Verdict) -> EvaluatedFile {
        self.extra.remove("status");
        self.extra.remove("message");
        EvaluatedFile {
            entry: self,
            status: verdict.status,
            message: verdict.message,
        }
    }
}

/// Decoded hook request.
///
/// `files` is only decoded for `file_ready`; for every other operation it is
/// left empty whatever the agent sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HookRequest {
    pub operation: Operation,
    pub files: Vec<FileEntry>,
}

/// First decoding stage: a JSON object, fields not yet interpreted.
#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    operation: Value,
    #[serde(default)]
    files: Value,
}

impl HookRequest {
    /// Decode a raw request.
    ///
    /// # Errors
    ///
    /// Fails if `raw` is not a JSON object, or if a `file_ready` request
    /// carries a file list that is not an array of objects with a `path`.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let envelope: Envelope = serde_json::from_str(raw)?;
        let operation = Operation::from_value(&envelope.operation);
        let files = match operation {
            Operation::FileReady => {
                serde_json::from_value::<Option<Vec<FileEntry>>>(envelope.files)?.unwrap_or_default()
            }
            _ => Vec::new(),
        };
        Ok(Self { operation, files })
    }
}

/// Per-file outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Ok,
    Failed,
}

/// Accept/reject decision with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub status: FileStatus,
    pub message: String,
}

impl Verdict {
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: FileStatus::Ok,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: FileStatus::Failed,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == FileStatus::Ok
    }
}

/// A request file annotated with exactly one verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluatedFile {
    #[serde(flatten)]
    pub entry: FileEntry,
    pub status: FileStatus,
    pub message: String,
}

/// Batch status of a `Done` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    Done,
}

/// Hook response as written to stdout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HookResponse {
    /// Answer to a probe (no input): protocol version and display name.
    Capability { api_version: u32, app_name: String },
    /// Verdicts for every requested file, in request order.
    Done {
        status: BatchStatus,
        files: Vec<EvaluatedFile>,
    },
    /// The operation is not handled; serialises as `{}`. Never an approval.
    Ignored {},
}

impl HookResponse {
    #[must_use]
    pub fn capability(app_name: impl Into<String>) -> Self {
        Self::Capability {
            api_version: API_VERSION,
            app_name: app_name.into(),
        }
    }

    #[must_use]
    pub fn done(files: Vec<EvaluatedFile>) -> Self {
        Self::Done {
            status: BatchStatus::Done,
            files,
        }
    }
}
