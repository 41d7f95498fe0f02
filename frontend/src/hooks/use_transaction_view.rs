use std::rc::Rc;

use fms_core::{
    FilterState, LoadOutcome, NotificationSink, TransactionDraft, TransactionSource,
    TransactionView, TransactionViewController, VisibleRows,
};
use shared::{TransactionId, TransactionRecord, UserScope};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::logging::Logger;

pub struct TransactionViewState {
    pub visible: VisibleRows,
    pub filter: FilterState,
    /// Nothing loaded yet or a load in flight
    pub shows_placeholder: bool,
}

impl TransactionViewState {
    pub fn from_view(view: &TransactionView) -> Self {
        Self {
            visible: view.compute_visible_rows(),
            filter: view.filter().clone(),
            shows_placeholder: view.shows_placeholder(),
        }
    }
}

pub struct UseTransactionViewResult {
    pub state: TransactionViewState,
    pub controller: Rc<TransactionViewController>,
    pub actions: TransactionViewActions,
}

#[derive(Clone, PartialEq)]
pub struct TransactionViewActions {
    pub on_search_change: Callback<String>,
    pub on_category_change: Callback<String>,
    pub on_page_change: Callback<usize>,
    pub on_rows_per_page_change: Callback<usize>,
    pub on_delete: Callback<TransactionId>,
    pub on_add: Callback<TransactionDraft>,
    pub on_update: Callback<TransactionRecord>,
}

fn spawn_load(controller: TransactionViewController, trigger: UseForceUpdateHandle) {
    spawn_local(async move {
        match controller.load().await {
            LoadOutcome::Discarded => {
                Logger::debug_with_component("TransactionView", "Load finished after teardown, ignoring");
            }
            outcome => {
                Logger::info_with_component("TransactionView", &format!("Load finished: {:?}", outcome));
                trigger.force_update();
            }
        }
    });
}

/// Transaction list state for the lifetime of the calling component.
///
/// The first render starts a load; unmounting tears the view down so a late
/// completion is dropped.
#[hook]
pub fn use_transaction_view(
    source: Rc<dyn TransactionSource>,
    notifier: Rc<dyn NotificationSink>,
    filter: FilterState,
    scope: UserScope,
) -> UseTransactionViewResult {
    let controller = use_memo((), move |_| TransactionViewController::new(filter, source, notifier, scope));
    let trigger = use_force_update();

    {
        let controller = controller.clone();
        let trigger = trigger.clone();
        use_effect_with((), move |_| {
            spawn_load((*controller).clone(), trigger);
            move || controller.teardown()
        });
    }

    let on_search_change = {
        let controller = controller.clone();
        let trigger = trigger.clone();
        use_callback((), move |term: String, _| {
            controller.set_search_term(term);
            trigger.force_update();
        })
    };

    let on_category_change = {
        let controller = controller.clone();
        let trigger = trigger.clone();
        use_callback((), move |category: String, _| {
            controller.set_filter_category(category.as_str());
            trigger.force_update();
        })
    };

    let on_page_change = {
        let controller = controller.clone();
        let trigger = trigger.clone();
        use_callback((), move |page: usize, _| {
            controller.set_page(page);
            trigger.force_update();
        })
    };

    let on_rows_per_page_change = {
        let controller = controller.clone();
        let trigger = trigger.clone();
        use_callback((), move |rows: usize, _| {
            controller.set_rows_per_page(rows);
            trigger.force_update();
        })
    };

    let on_delete = {
        let controller = controller.clone();
        let trigger = trigger.clone();
        use_callback((), move |id: TransactionId, _| {
            if controller.delete_transaction(&id) {
                trigger.force_update();
            }
        })
    };

    let on_add = {
        let controller = controller.clone();
        let trigger = trigger.clone();
        use_callback((), move |draft: TransactionDraft, _| {
            let id = controller.add_transaction(draft);
            Logger::debug_with_component("TransactionView", &format!("Added transaction {}", id));
            trigger.force_update();
        })
    };

    let on_update = {
        let controller = controller.clone();
        let trigger = trigger.clone();
        use_callback((), move |record: TransactionRecord, _| {
            if controller.update_transaction(record) {
                trigger.force_update();
            }
        })
    };

    let state = TransactionViewState::from_view(&controller.view());

    UseTransactionViewResult {
        state,
        controller,
        actions: TransactionViewActions {
            on_search_change,
            on_category_change,
            on_page_change,
            on_rows_per_page_change,
            on_delete,
            on_add,
            on_update,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fms_core::sample_transactions;

    #[test]
    fn test_state_follows_view_placeholder() {
        let mut view = TransactionView::new(FilterState::default());
        assert!(TransactionViewState::from_view(&view).shows_placeholder);

        view.begin_load();
        assert!(TransactionViewState::from_view(&view).shows_placeholder);

        let loaded = TransactionView::with_records(FilterState::default(), sample_transactions());
        let state = TransactionViewState::from_view(&loaded);
        assert!(!state.shows_placeholder);
        assert_eq!(state.visible.total_count, 7);
    }
}
