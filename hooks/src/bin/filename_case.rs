//! Agent hook rejecting filenames that contain upper-case letters.

use anyhow::Result;
use clap::Parser;
use mam_agent_hooks::policy::CasePolicy;
use mam_agent_hooks::{HookArgs, logging, run_hook};

const NAME: &str = "mam-hook-filename-case";
const APP_NAME: &str = "Disallow Uppercase";

#[derive(Parser)]
#[command(name = NAME, version, about = "Reject filenames containing upper-case letters")]
struct Cli {
    #[command(flatten)]
    hook: HookArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log = logging::init(NAME, cli.hook.log_dir.as_deref());
    run_hook(APP_NAME, cli.hook.input_mode, &CasePolicy)?;
    Ok(())
}
