//! Agent hook storing each file's client-side path as item metadata.
//!
//! Writes an XML sidecar next to every media file; the platform imports it
//! with the upload. The sidecars are never cleaned up on the client.

use anyhow::Result;
use clap::Parser;
use mam_agent_hooks::policy::SidecarPolicy;
use mam_agent_hooks::policy::sidecar::DEFAULT_FIELD;
use mam_agent_hooks::{HookArgs, logging, run_hook};

const NAME: &str = "mam-hook-original-uri-sidecar";
const APP_NAME: &str = "Original URI Sidecar";

#[derive(Parser)]
#[command(name = NAME, version, about = "Write original-URI metadata sidecars for uploads")]
struct Cli {
    #[command(flatten)]
    hook: HookArgs,

    /// Metadata field receiving the file URI
    #[arg(long, env = "MAM_HOOK_SIDECAR_FIELD", default_value = DEFAULT_FIELD)]
    field: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log = logging::init(NAME, cli.hook.log_dir.as_deref());
    let policy = SidecarPolicy {
        field: cli.field,
        ..SidecarPolicy::default()
    };
    run_hook(APP_NAME, cli.hook.input_mode, &policy)?;
    Ok(())
}
