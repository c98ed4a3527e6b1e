use crate::models::PropertyRecord;
use crate::query::{self, Filters, QueryState, SortBy};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, warn};

/// What a list, map or search view renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingView {
    pub page: Vec<PropertyRecord>,
    pub total_matches: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub start_index: usize,
    pub end_index: usize,
}

/// Owns the listing collection and the single writable query state.
///
/// Every mutation recomputes the cached result synchronously and publishes a
/// fresh [`ListingView`] to subscribers.
pub struct ListingStore {
    records: Arc<[PropertyRecord]>,
    state: QueryState,
    filtered: Vec<usize>,
    views: watch::Sender<ListingView>,
}

impl ListingStore {
    /// Create a store with default query state
    pub fn new(records: Vec<PropertyRecord>) -> Self {
        Self::with_state(records, QueryState::default())
    }

    /// Create a store starting from a saved query state
    pub fn with_state(records: Vec<PropertyRecord>, mut state: QueryState) -> Self {
        state.normalize();
        let records: Arc<[PropertyRecord]> = dedup_by_id(records).into();
        let filtered = query::matching_indices(&records, &state);
        state.current_page = 1;
        let view = build_view(&records, &filtered, &state);
        let (views, _) = watch::channel(view);

        Self {
            records,
            state,
            filtered,
            views,
        }
    }

    /// Receive a new [`ListingView`] after every change
    pub fn subscribe(&self) -> watch::Receiver<ListingView> {
        self.views.subscribe()
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Matching records in result order
    pub fn filtered(&self) -> impl Iterator<Item = &PropertyRecord> + '_ {
        self.filtered.iter().map(move |&i| &self.records[i])
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// The view most recently published
    pub fn view(&self) -> ListingView {
        self.views.borrow().clone()
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.state.search_query = query.into();
        self.refresh();
    }

    pub fn set_filters(&mut self, filters: Filters) {
        self.state.filters = filters;
        self.refresh();
    }

    /// Edit the filters in place, e.g. toggling one amenity
    pub fn update_filters(&mut self, edit: impl FnOnce(&mut Filters)) {
        edit(&mut self.state.filters);
        self.refresh();
    }

    pub fn set_sort_by(&mut self, sort_by: SortBy) {
        self.state.sort_by = sort_by;
        self.refresh();
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.state.items_per_page = items_per_page.max(1);
        self.refresh();
    }

    pub fn reset_filters(&mut self) {
        query::reset_filters(&mut self.state);
        self.refresh();
    }

    /// Move the cursor without recomputing matches
    pub fn set_page(&mut self, page: usize) {
        self.state.current_page = page.max(1);
        self.publish();
    }

    fn refresh(&mut self) {
        self.filtered = query::matching_indices(&self.records, &self.state);
        self.state.current_page = 1;
        self.publish();
    }

    fn publish(&self) {
        let view = build_view(&self.records, &self.filtered, &self.state);
        debug!(
            "Publishing page {}/{} ({} matches)",
            view.current_page, view.total_pages, view.total_matches
        );
        self.views.send_replace(view);
    }
}

fn build_view(records: &[PropertyRecord], filtered: &[usize], state: &QueryState) -> ListingView {
    let page = query::paginate(filtered, state.current_page, state.items_per_page);
    ListingView {
        page: page.items.iter().map(|&i| records[i].clone()).collect(),
        total_matches: page.total_items,
        total_pages: page.total_pages,
        current_page: page.current_page,
        start_index: page.start_index,
        end_index: page.end_index,
    }
}

/// Keep the first record for each id
fn dedup_by_id(records: Vec<PropertyRecord>) -> Vec<PropertyRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| {
            let fresh = seen.insert(record.id.clone());
            if !fresh {
                warn!("Dropping duplicate listing id {}", record.id);
            }
            fresh
        })
        .collect()
}
