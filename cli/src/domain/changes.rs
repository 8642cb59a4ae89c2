//! Selection of metadata changes for bulk removal.

use mam_common::api::{MetadataChange, MetadataField};
use mam_common::{validate_date_prefix, validate_metadata_field};

use super::error::ChangeFilterError;

/// Criteria a metadata change must meet to be removed.
///
/// A change matches when its first timespan holds a field change with the
/// exact field name and user, a timestamp starting with the date prefix, and
/// at least one value containing the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeFilter {
    user: String,
    field: String,
    date_prefix: String,
    text: String,
}

impl ChangeFilter {
    /// Validate and build a filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the user or text is empty, the field is not a
    /// `portal_mfNNNNNN` name, or the date is not a valid `YYYY[-MM[-DD]]`.
    pub fn new(
        user: &str,
        field: &str,
        date_prefix: &str,
        text: &str,
    ) -> Result<Self, ChangeFilterError> {
        if user.is_empty() {
            return Err(ChangeFilterError::EmptyUser);
        }
        if text.is_empty() {
            return Err(ChangeFilterError::EmptyText);
        }
        validate_metadata_field(field)?;
        validate_date_prefix(date_prefix)?;
        Ok(Self {
            user: user.to_string(),
            field: field.to_string(),
            date_prefix: date_prefix.to_string(),
            text: text.to_string(),
        })
    }

    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Whether `change` should be removed.
    #[must_use]
    pub fn matches(&self, change: &MetadataChange) -> bool {
        let Some(metadata) = &change.metadata else {
            return false;
        };
        let Some(first) = metadata.timespan.first() else {
            return false;
        };
        let Some(fields) = &first.field else {
            return false;
        };
        fields.iter().any(|f| self.matches_field(f))
    }

    fn matches_field(&self, field: &MetadataField) -> bool {
        field.name == self.field
            && field.timestamp.starts_with(&self.date_prefix)
            && field.user == self.user
            && field.value.iter().any(|v| v.value.contains(&self.text))
    }

    /// Ids of the matching changes, in input order.
    #[must_use]
    pub fn changes_to_remove(&self, changes: &[MetadataChange]) -> Vec<String> {
        changes
            .iter()
            .filter(|c| self.matches(c))
            .map(|c| c.id.clone())
            .collect()
    }
}
