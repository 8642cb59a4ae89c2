//! Payload types for the MAM REST API and its search index.
//!
//! Every collection and optional field defaults, so a document missing a
//! branch decodes as "nothing there" rather than failing.

use serde::{Deserialize, Deserializer};

/// Page size used when listing every item.
pub const ITEM_PAGE_SIZE: u64 = 1000;

/// One page of `GET /API/item;number=N;first=M`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ItemListPage {
    /// Total number of items matching the listing, not the page length.
    #[serde(deserialize_with = "lenient_u64")]
    pub hits: u64,
    pub item: Vec<ItemRef>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ItemRef {
    pub id: String,
}

/// `GET /API/item/{id}?content=metadata&field=...`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ItemDocument {
    pub id: String,
    pub metadata: Option<MetadataDocument>,
}

impl ItemDocument {
    /// First value of the named field across all timespans.
    #[must_use]
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.metadata
            .as_ref()?
            .timespan
            .iter()
            .flat_map(|span| span.field.iter().flatten())
            .find(|field| field.name == name)
            .and_then(|field| field.value.first())
            .map(|value| value.value.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MetadataDocument {
    pub timespan: Vec<MetadataTimespan>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MetadataTimespan {
    /// `None` when the key is missing; a change without fields never matches.
    pub field: Option<Vec<MetadataField>>,
}

/// A metadata field value, or a change to one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MetadataField {
    pub name: String,
    pub timestamp: String,
    pub user: String,
    pub value: Vec<FieldValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FieldValue {
    pub value: String,
}

/// `GET /API/item/{id}/metadata/changes`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChangeSetDocument {
    #[serde(rename = "changeSet")]
    pub change_set: Vec<MetadataChange>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MetadataChange {
    pub id: String,
    pub metadata: Option<MetadataDocument>,
}

/// Job document returned when a job is started.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct JobDocument {
    #[serde(rename = "jobId")]
    pub job_id: String,
    pub status: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub user: String,
}

/// Search index response (`hits.hits[]`).
pub mod search {
    use serde::Deserialize;

    #[derive(Debug, Clone, Default, Deserialize)]
    #[serde(default)]
    pub struct SearchPage {
        pub hits: SearchHits,
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    #[serde(default)]
    pub struct SearchHits {
        pub hits: Vec<SearchHit>,
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    #[serde(default)]
    pub struct SearchHit {
        #[serde(rename = "_type")]
        pub doc_type: String,
        #[serde(rename = "_source")]
        pub source: SearchSource,
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    #[serde(default)]
    pub struct SearchSource {
        #[serde(rename = "durationSeconds", deserialize_with = "super::lenient_f64_list")]
        pub duration_seconds: Vec<f64>,
    }

    impl SearchHit {
        /// Duration of an item hit; other document types contribute nothing.
        #[must_use]
        pub fn item_duration(&self) -> Option<f64> {
            if self.doc_type != "item" {
                return None;
            }
            self.source.duration_seconds.first().copied()
        }
    }

    /// Filter selecting every item not marked deleted.
    #[must_use]
    pub fn all_items_query() -> serde_json::Value {
        serde_json::json!({
            "bool": {
                "filter": [{"term": {"search_interval": "all"}}],
                "must_not": [{"exists": {"field": "portal_deleted"}}]
            }
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Int(u64),
    Float(f64),
    Text(String),
}

fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Int(n) => Ok(n),
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        NumberOrString::Float(f) if f >= 0.0 => Ok(f as u64),
        NumberOrString::Float(f) => Err(serde::de::Error::custom(format!("negative count {f}"))),
        NumberOrString::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn lenient_f64_list<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<NumberOrString>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|v| match v {
            #[allow(clippy::cast_precision_loss)]
            NumberOrString::Int(n) => Ok(n as f64),
            NumberOrString::Float(f) => Ok(f),
            NumberOrString::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
        })
        .collect()
}
