//! Accept only landscape video of at least Full HD height.

use std::path::Path;

use mam_common::{FileEntry, Verdict};

use crate::inspect::{MediaInfo, MediaInspector};
use crate::protocol::FilePolicy;

/// Minimum accepted frame height after rotation.
pub const MIN_HEIGHT: u32 = 1080;

pub const MSG_NO_INFO: &str = "Failed to get media info";

/// Frame geometry read from the `Video` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoShape {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub rotation: Option<String>,
}

impl VideoShape {
    #[must_use]
    pub fn from_info(info: &MediaInfo) -> Self {
        Self {
            width: info.field("Video", "Width").and_then(parse_pixels),
            height: info.field("Video", "Height").and_then(parse_pixels),
            rotation: info.field("Video", "Rotation").map(str::to_string),
        }
    }

    /// True for a quarter turn either way (`90°`, `270°`, `-90°`).
    #[must_use]
    pub fn is_quarter_turn(&self) -> bool {
        self.rotation.as_deref().is_some_and(|angle| {
            let magnitude = angle.trim().trim_start_matches('-');
            magnitude.starts_with("90") || magnitude.starts_with("270")
        })
    }

    /// Apply the acceptance rules.
    ///
    /// Square frames pass: only `height > width` counts as vertical.
    #[must_use]
    pub fn judge(&self) -> Verdict {
        let (Some(mut width), Some(mut height)) = (
            self.width.filter(|w| *w > 0),
            self.height.filter(|h| *h > 0),
        ) else {
            return Verdict::failed(format!(
                "Not a video file: Invalid width {} or height {}",
                display_dimension(self.width),
                display_dimension(self.height)
            ));
        };
        if self.is_quarter_turn() {
            tracing::debug!("rotation detected, swapping width/height");
            std::mem::swap(&mut width, &mut height);
        }

        if height < MIN_HEIGHT {
            Verdict::failed(format!(
                "Video resolution is too low, not Full HD ({height})"
            ))
        } else if height > width {
            Verdict::failed(format!("Vertical videos not allowed: {width} < {height}"))
        } else {
            Verdict::ok(format!("Video approved - resolution {width}x{height}"))
        }
    }
}

/// Parse `1 920 pixels` style values.
fn parse_pixels(raw: &str) -> Option<u32> {
    let digits: String = raw
        .replace("pixels", "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    digits
        .parse()
        .inspect_err(|e| tracing::warn!("could not get video dimension from {raw:?}: {e}"))
        .ok()
}

fn display_dimension(value: Option<u32>) -> String {
    value.map_or_else(|| "None".to_string(), |v| v.to_string())
}

/// Runs a [`MediaInspector`] on each file and judges its shape.
#[derive(Debug, Clone, Default)]
pub struct MediaShapePolicy<I> {
    inspector: I,
}

impl<I: MediaInspector> MediaShapePolicy<I> {
    #[must_use]
    pub fn new(inspector: I) -> Self {
        Self { inspector }
    }
}

impl<I: MediaInspector> FilePolicy for MediaShapePolicy<I> {
    fn evaluate(&self, entry: &FileEntry) -> Verdict {
        let info = match self.inspector.inspect(Path::new(&entry.path)) {
            Ok(info) if !info.is_empty() => info,
            Ok(_) => {
                tracing::warn!(path = %entry.path, "media inspection returned nothing");
                return Verdict::failed(MSG_NO_INFO);
            }
            Err(e) => {
                tracing::error!(path = %entry.path, "media inspection failed: {e}");
                return Verdict::failed(MSG_NO_INFO);
            }
        };
        let shape = VideoShape::from_info(&info);
        tracing::debug!(?shape, "video shape");
        shape.judge()
    }
}
