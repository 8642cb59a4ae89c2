//! Write a metadata sidecar carrying the file's original client-side URI.
//!
//! The platform imports `<name>.xml` next to `<name>.<ext>` as metadata for
//! the uploaded item. Sidecars written by this hook carry a marker comment
//! and may be overwritten; any other existing sidecar is left alone and the
//! file is rejected.

use std::path::{Path, PathBuf};

use mam_common::{FileEntry, Verdict};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::protocol::FilePolicy;

/// Marker comment identifying sidecars this hook wrote.
pub const DEFAULT_MARKER: &str = "created with mam-hook-original-uri-sidecar";

/// Field receiving the URI (the default "Description" field).
pub const DEFAULT_FIELD: &str = "portal_mf619153";

/// Metadata group the document is applied with.
pub const DEFAULT_GROUP: &str = "Film";

/// Bytes left unescaped in a `file://` URI path.
const URI_PATH: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone)]
pub struct SidecarPolicy {
    pub marker: String,
    pub field: String,
    pub group: String,
}

impl Default for SidecarPolicy {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            field: DEFAULT_FIELD.to_string(),
            group: DEFAULT_GROUP.to_string(),
        }
    }
}

/// Sidecar location: the media path with its extension replaced by `xml`.
#[must_use]
pub fn sidecar_path(media: &Path) -> PathBuf {
    media.with_extension("xml")
}

/// `file://` URI of `media`, resolved against the working directory.
///
/// # Errors
///
/// Returns an error if the working directory is needed and unavailable.
pub fn file_uri(media: &Path) -> std::io::Result<String> {
    let absolute = std::path::absolute(media)?;
    let encoded = utf8_percent_encode(&absolute.to_string_lossy(), URI_PATH).to_string();
    Ok(format!("file://{encoded}"))
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl SidecarPolicy {
    /// Render the sidecar document for `uri`.
    #[must_use]
    pub fn document(&self, uri: &str) -> String {
        format!(
            r#"<MetadataDocument xmlns="http://xml.vidispine.com/schema/vidispine">
    <!-- {marker} -->
    <group>{group}</group>
    <timespan start="-INF" end="+INF">
        <field>
            <name>{field}</name>
            <value>{value}</value>
        </field>
    </timespan>
</MetadataDocument>
"#,
            marker = self.marker,
            group = xml_escape(&self.group),
            field = xml_escape(&self.field),
            value = xml_escape(uri),
        )
    }

    fn write(&self, media: &Path, sidecar: &Path) -> std::io::Result<()> {
        let uri = file_uri(media)?;
        std::fs::write(sidecar, self.document(&uri))
    }
}

impl FilePolicy for SidecarPolicy {
    fn evaluate(&self, entry: &FileEntry) -> Verdict {
        let media = Path::new(&entry.path);
        let sidecar = sidecar_path(media);
        let shown = sidecar.display();

        if sidecar.exists() {
            match std::fs::read_to_string(&sidecar) {
                Ok(existing) if existing.contains(&self.marker) => {
                    tracing::debug!("marker found in {shown}, will overwrite");
                }
                Ok(_) => {
                    tracing::info!("marker not found in {shown}, keeping it");
                    return Verdict::failed(format!("Sidecar file {shown} already exists"));
                }
                Err(e) => {
                    tracing::error!("cannot read existing sidecar {shown}: {e}");
                    return Verdict::failed(format!("Sidecar file {shown} already exists"));
                }
            }
        }

        match self.write(media, &sidecar) {
            Ok(()) => {
                tracing::info!("sidecar file {shown} added");
                Verdict::ok(format!("Sidecar file {shown} added"))
            }
            Err(e) => {
                tracing::error!("cannot write sidecar {shown}: {e}");
                Verdict::failed(format!("Failed to write sidecar file {shown}: {e}"))
            }
        }
    }
}
