//! File policies, one per hook binary.

pub mod case;
pub mod charset;
pub mod mediainfo;
pub mod sidecar;

use std::borrow::Cow;
use std::path::Path;

pub use case::CasePolicy;
pub use charset::CharsetPolicy;
pub use mediainfo::MediaShapePolicy;
pub use sidecar::SidecarPolicy;

/// Last component of `path`, empty when there is none.
pub(crate) fn basename(path: &str) -> Cow<'_, str> {
    Path::new(path)
        .file_name()
        .map_or(Cow::Borrowed(""), |name| name.to_string_lossy())
}
