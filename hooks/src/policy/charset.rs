//! Reject filenames with characters outside a fixed accept-set.
//!
//! Some filesystems and platforms treat punctuation such as `:`, `/`, `\`
//! or `&` differently; restricting names avoids surprises after upload.
//! Names are checked in NFC form, since macOS stores them decomposed.

use std::collections::BTreeSet;

use mam_common::{FileEntry, Verdict};
use unicode_normalization::UnicodeNormalization;

use super::basename;
use crate::protocol::FilePolicy;

pub const MSG_OK: &str = "Filename OK";

/// Separators allowed besides letters and digits.
pub const ALLOWED_PUNCTUATION: &str = ". _'()\"";

/// Accented letters accepted unless overridden.
pub const DEFAULT_ACCENTED: &str = "åÅäÄöÖ";

#[derive(Debug, Clone)]
pub struct CharsetPolicy {
    accepted: BTreeSet<char>,
}

impl CharsetPolicy {
    /// ASCII letters and digits, [`ALLOWED_PUNCTUATION`], plus `accented`.
    #[must_use]
    pub fn with_accented(accented: &str) -> Self {
        let accepted = ('a'..='z')
            .chain('A'..='Z')
            .chain('0'..='9')
            .chain(ALLOWED_PUNCTUATION.chars())
            .chain(accented.nfc())
            .collect();
        Self { accepted }
    }

    #[must_use]
    pub fn accepts(&self, c: char) -> bool {
        self.accepted.contains(&c)
    }

    /// Describe every rejected character, or `None` if the name is clean.
    #[must_use]
    pub fn filename_error(&self, filename: &str) -> Option<String> {
        let errors: Vec<String> = filename
            .nfc()
            .enumerate()
            .filter(|(_, c)| !self.accepts(*c))
            .map(|(index, c)| format!("{c} ({}) at {index}", char_name(c)))
            .collect();
        if errors.is_empty() {
            None
        } else {
            Some(format!("Invalid filename, errors: {}", errors.join(", ")))
        }
    }
}

impl Default for CharsetPolicy {
    fn default() -> Self {
        Self::with_accented(DEFAULT_ACCENTED)
    }
}

impl FilePolicy for CharsetPolicy {
    fn evaluate(&self, entry: &FileEntry) -> Verdict {
        match self.filename_error(&basename(&entry.path)) {
            Some(error) => Verdict::failed(error),
            None => Verdict::ok(MSG_OK),
        }
    }
}

/// Unicode character name, `U+XXXX` for unnamed code points.
fn char_name(c: char) -> String {
    unicode_names2::name(c).map_or_else(|| format!("U+{:04X}", u32::from(c)), |n| n.to_string())
}
