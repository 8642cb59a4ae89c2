//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use crate::output::OutputContext;

/// Rule-engine and maintenance commands for the MAM platform
#[derive(Parser)]
#[command(
    name = "mam",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Permanently delete an item, leaving its files on storage
    DeleteItem(commands::delete_item::DeleteItemArgs),

    /// Start a thumbnail job on a video or image item
    RecreateThumbnails(commands::recreate_thumbnails::RecreateThumbnailsArgs),

    /// Remove metadata changes by user, field, date and text
    RemoveMetadataChanges(commands::remove_metadata_changes::RemoveMetadataChangesArgs),

    /// Total duration of all items in seconds
    TotalDuration(commands::total_duration::TotalDurationArgs),

    /// Generate captioned test videos with ffmpeg
    GenerateVideos(commands::generate_videos::GenerateVideosArgs),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            no_color,
            quiet,
            json,
            command,
        } = self;
        // JSON mode keeps stdout for the summary object.
        let ctx = OutputContext::new(no_color, quiet || json);
        match command {
            Command::Version => {
                commands::version::run(json);
                Ok(())
            }
            Command::DeleteItem(args) => commands::delete_item::run(&ctx, args, json).await,
            Command::RecreateThumbnails(args) => {
                commands::recreate_thumbnails::run(&ctx, args, json).await
            }
            Command::RemoveMetadataChanges(args) => {
                commands::remove_metadata_changes::run(&ctx, args, json).await
            }
            Command::TotalDuration(args) => commands::total_duration::run(&ctx, args, json).await,
            Command::GenerateVideos(args) => {
                commands::generate_videos::run(&ctx, args, json).await
            }
        }
    }
}
