//! View model for the subnet table.

use taowatch_core::{RowKey, SortDirection, SortKey, SubnetRecord};
use tracing::warn;

use crate::projection::{DetailView, DisplayRow};
use crate::sort::sorted_indices;
use crate::source::SubnetSource;

/// Client-side state behind the subnet table and detail view.
///
/// Owned by a single UI flow; every mutation goes through `&mut self`.
pub struct ViewModel<S> {
    source: S,
    records: Vec<SubnetRecord>,
    sort_key: SortKey,
    sort_direction: SortDirection,
    selected: Option<RowKey>,
    loading: bool,
}

impl<S: SubnetSource> ViewModel<S> {
    /// Create a view model with an empty record set, sorted by `netuid`
    /// ascending.
    pub fn new(source: S) -> Self {
        Self {
            source,
            records: Vec::new(),
            sort_key: SortKey::Netuid,
            sort_direction: SortDirection::Ascending,
            selected: None,
            loading: false,
        }
    }

    /// Replace the record set from the source.
    ///
    /// On success the batch replaces `records` wholesale and the selection
    /// is cleared: a detail view must never point at a superseded batch.
    /// On failure the previous records and selection stay visible
    /// (stale-but-available); the only recovery path is another refresh.
    /// `loading` resolves to false on both branches.
    pub async fn refresh(&mut self) {
        self.loading = true;
        match self.source.fetch_subnets().await {
            Ok(records) => {
                self.records = records;
                self.selected = None;
            }
            Err(e) => {
                warn!(error = %e, "Error fetching subnet data");
            }
        }
        self.loading = false;
    }

    /// Toggle direction on the active column, or activate a new column
    /// ascending. Pure state transition; triggers no fetch.
    pub fn set_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_key = key;
            self.sort_direction = SortDirection::Ascending;
        }
    }

    pub fn select(&mut self, key: RowKey) {
        self.selected = Some(key);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn records(&self) -> &[SubnetRecord] {
        &self.records
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn selected(&self) -> Option<RowKey> {
        self.selected
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Sorted, formatted table rows, recomputed from scratch on every
    /// call; nothing is maintained incrementally.
    pub fn projection(&self) -> Vec<DisplayRow> {
        sorted_indices(&self.records, self.sort_key, self.sort_direction)
            .into_iter()
            .map(|i| DisplayRow::from_record(&self.records[i]))
            .collect()
    }

    /// Detail projection of the selected record, if it is still present in
    /// the current batch.
    pub fn detail(&self) -> Option<DetailView> {
        let key = self.selected?;
        self.records
            .iter()
            .find(|r| r.key() == key)
            .map(DetailView::from_record)
    }
}
