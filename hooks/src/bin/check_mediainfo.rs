//! Agent hook accepting only landscape video of at least Full HD height.
//!
//! Depends on the `mediainfo` command-line tool.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use mam_agent_hooks::inspect::{DEFAULT_MEDIAINFO, MediainfoCli};
use mam_agent_hooks::policy::MediaShapePolicy;
use mam_agent_hooks::{HookArgs, logging, run_hook};

const NAME: &str = "mam-hook-check-mediainfo";
const APP_NAME: &str = "Check Mediainfo";

#[derive(Parser)]
#[command(name = NAME, version, about = "Reject vertical or lower than Full HD video")]
struct Cli {
    #[command(flatten)]
    hook: HookArgs,

    /// Path to the mediainfo executable
    #[arg(long, env = "MAM_HOOK_MEDIAINFO", default_value = DEFAULT_MEDIAINFO)]
    mediainfo: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log = logging::init(NAME, cli.hook.log_dir.as_deref());
    tracing::debug!(mediainfo = %cli.mediainfo.display(), "using media inspector");
    let policy = MediaShapePolicy::new(MediainfoCli::new(cli.mediainfo));
    run_hook(APP_NAME, cli.hook.input_mode, &policy)?;
    Ok(())
}
