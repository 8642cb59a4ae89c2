//! Command implementations

pub mod delete_item;
pub mod generate_videos;
pub mod recreate_thumbnails;
pub mod remove_metadata_changes;
pub mod total_duration;
pub mod version;

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::infra::api::HttpMamApi;
use crate::infra::config::YamlConfigStore;
use crate::output::OutputContext;

/// REST client built from `~/.mam/config.yaml` and `MAM_API_*`.
pub(crate) fn connect_api() -> Result<HttpMamApi> {
    let config = YamlConfigStore.load()?;
    HttpMamApi::new(&config.api)
}

/// The rule-engine item id, or `None` after reporting that there is nothing to do.
pub(crate) fn require_item_id(ctx: &OutputContext, item_id: Option<String>) -> Option<String> {
    match item_id.filter(|id| !id.trim().is_empty()) {
        Some(id) => Some(id),
        None => {
            tracing::warn!("portal_itemId not set in environment");
            ctx.warn("portal_itemId not set, nothing to do. See --help for usage");
            None
        }
    }
}
