//! Reject filenames containing upper-case letters.

use mam_common::{FileEntry, Verdict};

use super::basename;
use crate::protocol::FilePolicy;

pub const MSG_OK: &str = "Filename OK";
pub const MSG_UPPER: &str = "Filename must not contain upper case";

#[derive(Debug, Clone, Copy, Default)]
pub struct CasePolicy;

impl CasePolicy {
    #[must_use]
    pub fn check(filename: &str) -> Verdict {
        if filename.chars().any(char::is_uppercase) {
            Verdict::failed(MSG_UPPER)
        } else {
            Verdict::ok(MSG_OK)
        }
    }
}

impl FilePolicy for CasePolicy {
    fn evaluate(&self, entry: &FileEntry) -> Verdict {
        Self::check(&basename(&entry.path))
    }
}
