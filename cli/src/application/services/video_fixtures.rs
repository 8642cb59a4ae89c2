//! Application service — generate captioned test videos with ffmpeg.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::application::ports::{CommandRunner, LocalFs, ProgressReporter};
use crate::domain::videos::{ffmpeg_args, video_name, video_path};

/// Files written and skipped by `generate_videos`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    pub created: Vec<PathBuf>,
    pub skipped: usize,
}

/// Render videos `1..=count` under `output_dir`, skipping existing files.
///
/// # Errors
///
/// Returns an error if a directory cannot be created, ffmpeg cannot be run,
/// or ffmpeg exits non-zero.
pub async fn generate_videos(
    runner: &impl CommandRunner,
    fs: &impl LocalFs,
    output_dir: &Path,
    count: u64,
    ffmpeg: &str,
    reporter: &impl ProgressReporter,
) -> Result<GenerateReport> {
    let mut report = GenerateReport::default();

    for index in 1..=count {
        let name = video_name(index);
        let path = output_dir.join(video_path(&name));
        if fs.exists(&path) {
            report.skipped += 1;
            continue;
        }
        if let Some(parent) = path.parent() {
            fs.create_dir_all(parent)?;
        }

        let target = path.to_string_lossy();
        let args = ffmpeg_args(&name, &target);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        reporter.step(&format!("Rendering {target}"));
        let output = runner.run(ffmpeg, &args).await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("{ffmpeg} failed for {target}: {}", stderr.trim());
        }
        report.created.push(path);
    }

    reporter.success(&format!(
        "Created {} videos, {} already present",
        report.created.len(),
        report.skipped
    ));
    Ok(report)
}
