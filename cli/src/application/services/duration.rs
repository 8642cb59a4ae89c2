//! Application service — total duration of all items in the search index.

use anyhow::{Result, bail};

use crate::application::ports::{ProgressReporter, SearchIndex};

/// Sum of item durations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DurationTotal {
    pub seconds: f64,
    /// Item hits that carried a duration.
    pub items: u64,
}

/// Page through the index summing `durationSeconds` of item hits.
///
/// Stops at the first page shorter than `page_size`.
///
/// # Errors
///
/// Returns an error if `page_size` is zero or a search request fails.
pub async fn total_duration(
    index: &impl SearchIndex,
    page_size: u64,
    reporter: &impl ProgressReporter,
) -> Result<DurationTotal> {
    if page_size == 0 {
        bail!("page size must be at least 1");
    }
    let full_page = usize::try_from(page_size).unwrap_or(usize::MAX);
    let mut total = DurationTotal::default();
    let mut from = 0;

    loop {
        reporter.step(&format!("result from {from}: {}s", total.seconds));
        let page = index.search_items(from, page_size).await?;
        for seconds in page.hits.hits.iter().filter_map(|h| h.item_duration()) {
            total.seconds += seconds;
            total.items += 1;
        }
        if page.hits.hits.len() < full_page {
            break;
        }
        from += page_size;
    }
    Ok(total)
}
