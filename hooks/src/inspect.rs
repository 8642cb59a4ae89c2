//! External media inspection.
//!
//! `mediainfo <path>` prints blank-line separated sections: a header line
//! without a colon, followed by `Field name : value` lines.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

/// Default location of the `mediainfo` executable.
pub const DEFAULT_MEDIAINFO: &str = "/usr/local/bin/mediainfo";

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    Exit {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("unparseable output, field outside any section: {0:?}")]
    Parse(String),
}

/// Section name → field name → value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaInfo {
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl MediaInfo {
    #[must_use]
    pub fn field(&self, section: &str, name: &str) -> Option<&str> {
        self.sections.get(section)?.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Parse mediainfo's text report.
///
/// # Errors
///
/// Returns [`InspectError::Parse`] when a `key: value` line appears before
/// the first section header.
pub fn parse_mediainfo(text: &str) -> Result<MediaInfo, InspectError> {
    let mut sections: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
    let mut current: Option<String> = None;

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match line.split_once(':') {
            None => {
                let header = line.trim().to_string();
                sections.entry(header.clone()).or_default();
                current = Some(header);
            }
            Some((key, value)) => {
                let section = current
                    .as_ref()
                    .and_then(|name| sections.get_mut(name))
                    .ok_or_else(|| InspectError::Parse(line.to_string()))?;
                section.insert(key.trim().to_string(), value.trim().to_string());
            }
        }
    }
    Ok(MediaInfo { sections })
}

/// Source of media information for a file.
pub trait MediaInspector {
    /// Inspect the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool cannot run, fails, or prints output
    /// that cannot be parsed.
    fn inspect(&self, path: &Path) -> Result<MediaInfo, InspectError>;
}

/// Runs the `mediainfo` command-line tool.
///
/// No timeout: a hung tool blocks the hook.
#[derive(Debug, Clone)]
pub struct MediainfoCli {
    executable: PathBuf,
}

impl MediainfoCli {
    #[must_use]
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }
}

impl Default for MediainfoCli {
    fn default() -> Self {
        Self::new(DEFAULT_MEDIAINFO)
    }
}

impl MediaInspector for MediainfoCli {
    fn inspect(&self, path: &Path) -> Result<MediaInfo, InspectError> {
        let program = self.executable.display().to_string();
        let output = Command::new(&self.executable)
            .arg(path)
            .output()
            .map_err(|source| InspectError::Spawn {
                program: program.clone(),
                source,
            })?;
        if !output.status.success() {
            return Err(InspectError::Exit {
                program,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        parse_mediainfo(&String::from_utf8_lossy(&output.stdout))
    }
}
