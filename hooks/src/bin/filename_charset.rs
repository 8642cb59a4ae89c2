//! Agent hook rejecting filenames with characters outside a safe set.

use anyhow::Result;
use clap::Parser;
use mam_agent_hooks::policy::CharsetPolicy;
use mam_agent_hooks::policy::charset::DEFAULT_ACCENTED;
use mam_agent_hooks::{HookArgs, logging, run_hook};

const NAME: &str = "mam-hook-filename-charset";
const APP_NAME: &str = "Check Filename Characters";

#[derive(Parser)]
#[command(name = NAME, version, about = "Reject filenames containing unsafe characters")]
struct Cli {
    #[command(flatten)]
    hook: HookArgs,

    /// Accented letters accepted in addition to ASCII letters and digits
    #[arg(long, env = "MAM_HOOK_ACCENTED", default_value = DEFAULT_ACCENTED)]
    accented: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log = logging::init(NAME, cli.hook.log_dir.as_deref());
    let policy = CharsetPolicy::with_accented(&cli.accented);
    run_hook(APP_NAME, cli.hook.input_mode, &policy)?;
    Ok(())
}
