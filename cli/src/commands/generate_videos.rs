//! `mam generate-videos` — render captioned one second test clips.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Args;

use crate::application::services::video_fixtures::generate_videos;
use crate::infra::command_runner::{DEFAULT_CMD_TIMEOUT, TokioCommandRunner};
use crate::infra::fs::OsFs;
use crate::output::{OutputContext, TerminalReporter, json};

/// Arguments for the generate-videos command.
#[derive(Args)]
pub struct GenerateVideosArgs {
    /// Number of videos; files are named after the SHA-1 of 1..=COUNT
    pub count: u64,

    /// Directory the `abc/def/<sha1>.mov` tree is created in
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// ffmpeg executable
    #[arg(long, env = "MAM_FFMPEG", default_value = "ffmpeg")]
    pub ffmpeg: String,

    /// Seconds one render may take before ffmpeg is killed
    #[arg(long, default_value_t = DEFAULT_CMD_TIMEOUT.as_secs())]
    pub timeout: u64,
}

/// Run the generate-videos command.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or ffmpeg fails.
pub async fn run(ctx: &OutputContext, args: GenerateVideosArgs, json: bool) -> Result<()> {
    let runner = TokioCommandRunner::new(Duration::from_secs(args.timeout));
    let reporter = TerminalReporter::new(ctx);
    let report = generate_videos(
        &runner,
        &OsFs,
        &args.output_dir,
        args.count,
        &args.ffmpeg,
        &reporter,
    )
    .await?;

    if json {
        let created: Vec<String> = report
            .created
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        json::print(&serde_json::json!({
            "created": created,
            "skipped": report.skipped,
        }))?;
    }
    Ok(())
}
