//! Rules applied to a single item by the rule-engine commands.

/// Environment variable the rule engine passes the item id in.
pub const ITEM_ID_ENV: &str = "portal_itemId";

/// Value keeping every shape on every storage.
pub const KEEP_ALL: &str = "*";

/// Media types that have thumbnails.
pub const THUMBNAIL_MEDIA_TYPES: [&str; 2] = ["video", "image"];

/// Which files survive an item deletion.
///
/// Each list is comma separated. When both are given only files matching
/// both are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeepFiles {
    pub shape_tags: Option<String>,
    pub storages: Option<String>,
}

impl KeepFiles {
    /// Fill in the defaults: with neither list given, keep everything.
    #[must_use]
    pub fn resolved(self) -> Self {
        if self.shape_tags.is_none() && self.storages.is_none() {
            Self {
                shape_tags: Some(KEEP_ALL.to_string()),
                storages: Some(KEEP_ALL.to_string()),
            }
        } else {
            self
        }
    }

    /// Query parameters for the delete request, defined options only.
    #[must_use]
    pub fn query(&self) -> Vec<(&'static str, &str)> {
        let mut query = Vec::new();
        if let Some(tags) = &self.shape_tags {
            query.push(("keepShapeTagMedia", tags.as_str()));
        }
        if let Some(storages) = &self.storages {
            query.push(("keepShapeTagStorage", storages.as_str()));
        }
        query
    }

    /// Request path relative to the API base, for display.
    #[must_use]
    pub fn delete_path(&self, item_id: &str) -> String {
        let query: Vec<String> = self.query().iter().map(|(k, v)| format!("{k}={v}")).collect();
        if query.is_empty() {
            format!("item/{item_id}")
        } else {
            format!("item/{item_id}?{}", query.join("&"))
        }
    }
}

/// Whether an item of `media_type` gets new thumbnails.
#[must_use]
pub fn has_thumbnails(media_type: &str) -> bool {
    THUMBNAIL_MEDIA_TYPES.contains(&media_type)
}
