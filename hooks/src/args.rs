//! Command-line and environment settings shared by every hook binary.
//!
//! The agent starts hooks without arguments, so every setting has an
//! environment fallback and a default.

use std::path::PathBuf;

use clap::Args;

use crate::stdin::InputMode;

#[derive(Debug, Args)]
pub struct HookArgs {
    /// How to detect a piped request on stdin
    #[arg(
        long,
        env = "MAM_HOOK_INPUT_MODE",
        value_enum,
        default_value = InputMode::PLATFORM_DEFAULT
    )]
    pub input_mode: InputMode,

    /// Directory for the hook's log file (default: next to the executable)
    #[arg(long, env = "MAM_HOOK_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}
