//! Request decoding, operation dispatch and response encoding.

use std::io::Write;

use mam_common::{FileEntry, HookRequest, HookResponse, Operation, Verdict};

use crate::error::HookError;
use crate::stdin::{self, InputMode};

/// A per-file accept/reject rule.
///
/// Implementations never fail: internal errors become a `failed` verdict.
pub trait FilePolicy {
    fn evaluate(&self, entry: &FileEntry) -> Verdict;
}

/// Decode a raw request.
///
/// # Errors
///
/// Returns [`HookError::Decode`] if the input is not a JSON object, or is a
/// `file_ready` request whose files do not decode.
pub fn decode_request(raw: &str) -> Result<HookRequest, HookError> {
    HookRequest::from_json(raw).map_err(HookError::Decode)
}

/// Evaluate the request's files, or ignore the request.
///
/// Only `file_ready` evaluates anything. Any other operation yields
/// [`HookResponse::Ignored`] without touching a single file, so a later
/// operation can never read as approval of files judged earlier.
pub fn dispatch(request: HookRequest, policy: &impl FilePolicy) -> HookResponse {
    match request.operation {
        Operation::FileReady => {
            let files = request
                .files
                .into_iter()
                .map(|entry| {
                    let verdict = policy.evaluate(&entry);
                    tracing::info!(
                        path = %entry.path,
                        status = ?verdict.status,
                        "{}",
                        verdict.message
                    );
                    entry.annotate(verdict)
                })
                .collect();
            HookResponse::done(files)
        }
        other => {
            tracing::debug!(
                operation = other.as_str().unwrap_or("<absent>"),
                "operation not handled"
            );
            HookResponse::Ignored {}
        }
    }
}

/// Build the response for one invocation.
///
/// `None` input is a capability probe.
///
/// # Errors
///
/// Returns [`HookError::Decode`] for malformed request JSON.
pub fn respond(
    input: Option<&str>,
    app_name: &str,
    policy: &impl FilePolicy,
) -> Result<HookResponse, HookError> {
    match input {
        None => Ok(HookResponse::capability(app_name)),
        Some(raw) => Ok(dispatch(decode_request(raw)?, policy)),
    }
}

/// Write one response line and flush it.
///
/// # Errors
///
/// Returns an error if encoding or writing fails.
pub fn write_response(out: &mut impl Write, response: &HookResponse) -> Result<(), HookError> {
    serde_json::to_writer(&mut *out, response).map_err(HookError::Encode)?;
    out.write_all(b"\n").map_err(HookError::WriteOutput)?;
    out.flush().map_err(HookError::WriteOutput)
}

/// Run one hook invocation against the process's stdin and stdout.
///
/// # Errors
///
/// Returns an error if stdin cannot be read, the request is malformed, or
/// stdout cannot be written. No response is written in those cases.
pub fn run_hook(app_name: &str, mode: InputMode, policy: &impl FilePolicy) -> Result<(), HookError> {
    let _span = tracing::info_span!("hook", pid = std::process::id()).entered();
    tracing::debug!(
        args = ?std::env::args().collect::<Vec<_>>(),
        cwd = ?std::env::current_dir().ok(),
        "start"
    );

    let input = stdin::read_request(mode).map_err(HookError::ReadInput)?;
    tracing::debug!(input = ?input, "request read");

    let response = respond(input.as_deref(), app_name, policy).inspect_err(|e| {
        tracing::error!("{e}");
    })?;
    tracing::debug!(?response, "writing response");

    write_response(&mut std::io::stdout().lock(), &response)?;
    tracing::debug!("done");
    Ok(())
}
