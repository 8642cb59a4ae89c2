//! Naming and rendering parameters for generated test videos.

use std::path::PathBuf;

use sha1::{Digest, Sha1};

/// Hex SHA-1 of the decimal index; doubles as the burned-in caption.
#[must_use]
pub fn video_name(index: u64) -> String {
    let digest = Sha1::digest(index.to_string().as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

/// `<name[0..3]>/<name[3..6]>/<name>.mov`, relative to the output directory.
#[must_use]
pub fn video_path(name: &str) -> PathBuf {
    PathBuf::from(&name[0..3])
        .join(&name[3..6])
        .join(format!("{name}.mov"))
}

/// ffmpeg arguments rendering a one second 640x480 black clip captioned `name`.
#[must_use]
pub fn ffmpeg_args(name: &str, output: &str) -> Vec<String> {
    let caption = format!("drawtext=text={name}:fontcolor=white:fontsize=32:x=(w-tw)/2:y=h/2");
    [
        "-y",
        "-f",
        "lavfi",
        "-i",
        "color=c=black:s=640x480",
        "-vf",
        caption.as_str(),
        "-t",
        "1",
        "-c:v",
        "libx264",
        "-pix_fmt",
        "yuv420p",
        "-r",
        "25",
        output,
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}
