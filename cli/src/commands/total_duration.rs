//! `mam total-duration` — sum the duration of every item in the search index.

use anyhow::{Result, anyhow};
use clap::Args;

use crate::application::ports::{ConfigStore, SearchIndex};
use crate::application::services::duration::total_duration;
use crate::infra::config::YamlConfigStore;
use crate::infra::search::HttpSearchIndex;
use crate::output::{OutputContext, TerminalReporter, json};

/// Arguments for the total-duration command.
#[derive(Args)]
pub struct TotalDurationArgs {
    /// Search endpoint (default: `search.url` from the config file)
    #[arg(long, env = "MAM_SEARCH_URL")]
    pub search_url: Option<String>,

    /// Hits requested per page
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(1..))]
    pub page_size: u64,
}

/// Run the total-duration command.
///
/// # Errors
///
/// Returns an error if no search URL is configured or a search fails.
pub async fn run(ctx: &OutputContext, args: TotalDurationArgs, json: bool) -> Result<()> {
    let url = match args.search_url {
        Some(url) => url,
        None => YamlConfigStore.load()?.search.url.ok_or_else(|| {
            anyhow!("no search endpoint: pass --search-url or set search.url in the config file")
        })?,
    };
    let index = HttpSearchIndex::new(&url)?;
    execute(ctx, &index, args.page_size, json).await
}

/// Sum durations through `index` and print the total.
///
/// # Errors
///
/// Returns an error if a search fails.
pub async fn execute(
    ctx: &OutputContext,
    index: &impl SearchIndex,
    page_size: u64,
    json: bool,
) -> Result<()> {
    let reporter = TerminalReporter::new(ctx);
    let total = total_duration(index, page_size, &reporter).await?;

    if json {
        json::print(&serde_json::json!({
            "total_seconds": total.seconds,
            "items": total.items,
        }))?;
    } else if ctx.quiet {
        println!("{}", total.seconds);
    } else {
        ctx.success(&format!("Total duration is {}s", total.seconds));
    }
    Ok(())
}
