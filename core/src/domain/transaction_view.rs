//! Transaction list view state.
//!
//! [`TransactionView`] owns the working set and the filter state of one
//! transaction list page. Loading is split into [`TransactionView::begin_load`]
//! and [`TransactionView::finish_load`] so that no borrow of the view is held
//! while the data source is awaited; the [`LoadTicket`] handed out by the
//! first half lets the second half recognise a completion that arrives after
//! the view was torn down or a newer load started, and drop it.
//!
//! [`TransactionViewController`] ties a view to its collaborators (data
//! source, notification sink, user scope) for single-threaded UI code.

use log::{debug, info, warn};
use shared::{Severity, TransactionId, TransactionRecord, UserScope};
use std::cell::{Ref, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use crate::domain::transaction_filter::{compute_visible_rows, CategoryFilter, FilterState, VisibleRows};
use crate::domain::transaction_form::TransactionDraft;
use crate::error::DataSourceError;
use crate::io::notifications::NotificationSink;
use crate::storage::TransactionSource;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load transactions";
pub const DELETED_MESSAGE: &str = "Transaction deleted successfully";
pub const ADDED_MESSAGE: &str = "Transaction added successfully";
pub const UPDATED_MESSAGE: &str = "Transaction updated successfully";
pub const UPDATE_MISSING_MESSAGE: &str = "Transaction no longer exists";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// No load requested yet
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Proof of a started load; only the most recent ticket can complete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The working set was replaced with `count` records
    Applied { count: usize },
    /// The source failed; the working set is now empty
    Failed,
    /// The view was torn down or a newer load superseded this one
    Discarded,
}

#[derive(Debug, Clone)]
pub struct TransactionView {
    working_set: Vec<TransactionRecord>,
    filter: FilterState,
    status: LoadStatus,
    generation: u64,
    torn_down: bool,
}

impl Default for TransactionView {
    fn default() -> Self {
        Self::new(FilterState::default())
    }
}

impl TransactionView {
    pub fn new(filter: FilterState) -> Self {
        Self {
            working_set: Vec::new(),
            filter,
            status: LoadStatus::Idle,
            generation: 0,
            torn_down: false,
        }
    }

    /// A view that starts out with records already in place
    pub fn with_records(filter: FilterState, records: Vec<TransactionRecord>) -> Self {
        Self {
            working_set: records,
            status: LoadStatus::Ready,
            ..Self::new(filter)
        }
    }

    pub fn working_set(&self) -> &[TransactionRecord] {
        &self.working_set
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// Whether the rendering layer should show the loading placeholder
    pub fn shows_placeholder(&self) -> bool {
        matches!(self.status, LoadStatus::Idle | LoadStatus::Loading)
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.status = LoadStatus::Loading;
        debug!("Starting transaction load #{}", self.generation);
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Apply the result of the load identified by `ticket`.
    ///
    /// Completions for a torn-down view or a superseded ticket change nothing
    /// and notify nobody.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<TransactionRecord>, DataSourceError>,
        notifier: &dyn NotificationSink,
    ) -> LoadOutcome {
        if self.torn_down {
            warn!("Discarding transaction load #{}: view was torn down", ticket.generation);
            return LoadOutcome::Discarded;
        }
        if ticket.generation != self.generation {
            warn!(
                "Discarding transaction load #{}: superseded by #{}",
                ticket.generation, self.generation
            );
            return LoadOutcome::Discarded;
        }

        match result {
            Ok(records) => {
                let count = records.len();
                info!("Loaded {} transactions", count);
                self.working_set = records;
                self.status = LoadStatus::Ready;
                LoadOutcome::Applied { count }
            }
            Err(e) => {
                warn!("Error fetching transactions: {}", e);
                self.working_set.clear();
                self.status = LoadStatus::Failed;
                notifier.notify(LOAD_FAILED_MESSAGE, Severity::Error);
                LoadOutcome::Failed
            }
        }
    }

    /// Mark the view destroyed; outstanding loads will be discarded
    pub fn teardown(&mut self) {
        self.torn_down = true;
    }

    pub fn set_search_term(&mut self, search_term: impl Into<String>) {
        let search_term = search_term.into();
        debug!("Search term changed to {:?}", search_term);
        self.filter = self.filter.clone().with_search_term(search_term);
    }

    pub fn set_filter_category(&mut self, category: impl Into<CategoryFilter>) {
        let category = category.into();
        debug!("Category filter changed to {}", category.as_str());
        self.filter = self.filter.clone().with_category(category);
    }

    pub fn set_page(&mut self, page: usize) {
        self.filter = self.filter.clone().with_page(page);
    }

    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.filter = self.filter.clone().with_rows_per_page(rows_per_page);
    }

    /// The filtered, paginated window currently on screen
    pub fn compute_visible_rows(&self) -> VisibleRows {
        compute_visible_rows(&self.working_set, &self.filter)
    }

    /// Remove the record with `id` from the working set.
    ///
    /// Returns whether a record was removed. Deleting an id that is not
    /// present leaves the working set untouched and raises no notification.
    pub fn delete_transaction(&mut self, id: &TransactionId, notifier: &dyn NotificationSink) -> bool {
        let before = self.working_set.len();
        self.working_set.retain(|r| &r.id != id);
        let removed = self.working_set.len() != before;

        if removed {
            info!("Deleted transaction {}", id);
            notifier.notify(DELETED_MESSAGE, Severity::Success);
        } else {
            debug!("Delete of unknown transaction {} ignored", id);
        }
        removed
    }

    /// Append a new record built from a validated form draft
    pub fn add_transaction(&mut self, draft: TransactionDraft, notifier: &dyn NotificationSink) -> TransactionId {
        let id = self.next_id();
        info!("Adding transaction {} ({:.2})", id, draft.amount);
        self.working_set.push(draft.into_record(id.clone()));
        notifier.notify(ADDED_MESSAGE, Severity::Success);
        id
    }

    /// Replace the record carrying the same id, keeping its position
    pub fn update_transaction(&mut self, record: TransactionRecord, notifier: &dyn NotificationSink) -> bool {
        match self.working_set.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => {
                info!("Updated transaction {}", record.id);
                *existing = record;
                notifier.notify(UPDATED_MESSAGE, Severity::Success);
                true
            }
            None => {
                warn!("Update of unknown transaction {} ignored", record.id);
                notifier.notify(UPDATE_MISSING_MESSAGE, Severity::Warning);
                false
            }
        }
    }

    pub fn find(&self, id: &TransactionId) -> Option<&TransactionRecord> {
        self.working_set.iter().find(|r| &r.id == id)
    }

    /// One past the highest numeric id, or the smallest free positive id
    /// once the highest is `i64::MAX`
    fn next_id(&self) -> TransactionId {
        let taken: HashSet<i64> = self.working_set.iter().filter_map(|r| r.id.as_number()).collect();
        let highest = taken.iter().copied().max().unwrap_or(0);

        match highest.checked_add(1) {
            Some(next) => TransactionId::Number(next),
            None => (1..=i64::MAX)
                .find(|n| !taken.contains(n))
                .map(TransactionId::Number)
                .unwrap_or_else(|| TransactionId::Text(format!("tx-{}", self.working_set.len() + 1))),
        }
    }
}

/// A [`TransactionView`] wired to its data source and notification sink.
///
/// Cloning is cheap and every clone drives the same view, so UI callbacks
/// can each hold one.
#[derive(Clone)]
pub struct TransactionViewController {
    view: Rc<RefCell<TransactionView>>,
    source: Rc<dyn TransactionSource>,
    notifier: Rc<dyn NotificationSink>,
    scope: UserScope,
}

impl TransactionViewController {
    pub fn new(
        filter: FilterState,
        source: Rc<dyn TransactionSource>,
        notifier: Rc<dyn NotificationSink>,
        scope: UserScope,
    ) -> Self {
        Self {
            view: Rc::new(RefCell::new(TransactionView::new(filter))),
            source,
            notifier,
            scope,
        }
    }

    pub fn view(&self) -> Ref<'_, TransactionView> {
        self.view.borrow()
    }

    /// Fetch the working set from the data source.
    ///
    /// The view is only borrowed before and after the await point.
    pub async fn load(&self) -> LoadOutcome {
        let ticket = self.view.borrow_mut().begin_load();
        let result = self.source.fetch_transactions(&self.scope).await;
        self.view
            .borrow_mut()
            .finish_load(ticket, result, self.notifier.as_ref())
    }

    pub fn teardown(&self) {
        self.view.borrow_mut().teardown();
    }

    pub fn set_search_term(&self, search_term: impl Into<String>) {
        self.view.borrow_mut().set_search_term(search_term);
    }

    pub fn set_filter_category(&self, category: impl Into<CategoryFilter>) {
        self.view.borrow_mut().set_filter_category(category);
    }

    pub fn set_page(&self, page: usize) {
        self.view.borrow_mut().set_page(page);
    }

    pub fn set_rows_per_page(&self, rows_per_page: usize) {
        self.view.borrow_mut().set_rows_per_page(rows_per_page);
    }

    pub fn compute_visible_rows(&self) -> VisibleRows {
        self.view.borrow().compute_visible_rows()
    }

    pub fn delete_transaction(&self, id: &TransactionId) -> bool {
        self.view
            .borrow_mut()
            .delete_transaction(id, self.notifier.as_ref())
    }

    pub fn add_transaction(&self, draft: TransactionDraft) -> TransactionId {
        self.view
            .borrow_mut()
            .add_transaction(draft, self.notifier.as_ref())
    }

    pub fn update_transaction(&self, record: TransactionRecord) -> bool {
        self.view
            .borrow_mut()
            .update_transaction(record, self.notifier.as_ref())
    }
}
