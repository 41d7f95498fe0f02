use std::rc::Rc;

use fms_core::{AppConfig, Navigator, Route, TransactionDraft, TransactionFormState, TransactionTableService};
use shared::{TransactionId, UserScope, ALL_CATEGORIES};
use yew::prelude::*;

use super::{TablePagination, TransactionFilters, TransactionForm, TransactionTable};
use crate::hooks::use_notifications::SnackbarNotifier;
use crate::hooks::use_transaction_view::use_transaction_view;
use crate::services::logging::Logger;
use crate::services::{DateUtils, RouteNavigator, SharedSource};

#[derive(Properties, PartialEq)]
pub struct TransactionsPageProps {
    /// `Transactions` for the list, `AddTransaction` for the add form
    pub route: Route,
    pub config: Rc<AppConfig>,
    pub source: SharedSource,
    pub notifier: SnackbarNotifier,
    pub on_navigate: Callback<Route>,
}

/// Transaction list page with its add and edit forms.
///
/// Both routes render this component so the loaded list survives switching
/// between them; leaving for another page tears the list down.
#[function_component(TransactionsPage)]
pub fn transactions_page(props: &TransactionsPageProps) -> Html {
    let view = use_transaction_view(
        props.source.0.clone(),
        Rc::new(props.notifier.clone()),
        props.config.initial_filter(),
        UserScope::current_user(),
    );
    let editing = use_state(|| None::<TransactionId>);
    let table_service = use_memo((), |_| TransactionTableService::new());
    let navigator = RouteNavigator::new(props.on_navigate.clone());

    let form_categories: Vec<String> = props
        .config
        .categories
        .iter()
        .filter(|c| c.as_str() != ALL_CATEGORIES)
        .cloned()
        .collect();

    let back_to_list = {
        let navigator = navigator.clone();
        Callback::from(move |_: ()| navigator.navigate(Route::Transactions))
    };

    if props.route == Route::AddTransaction {
        let on_submit = {
            let on_add = view.actions.on_add.clone();
            let back_to_list = back_to_list.clone();
            Callback::from(move |draft: TransactionDraft| {
                on_add.emit(draft);
                back_to_list.emit(());
            })
        };
        return html! {
            <div class="page transactions-page">
                <TransactionForm
                    key="add"
                    title="Add Transaction"
                    submit_label="Save Transaction"
                    initial={TransactionFormState::new(DateUtils::today())}
                    categories={form_categories}
                    {on_submit}
                    on_cancel={back_to_list}
                />
            </div>
        };
    }

    let editing_record = (*editing)
        .as_ref()
        .and_then(|id| view.controller.view().find(id).cloned());

    if let Some(record) = editing_record {
        let on_submit = {
            let on_update = view.actions.on_update.clone();
            let editing = editing.clone();
            let id = record.id.clone();
            Callback::from(move |draft: TransactionDraft| {
                on_update.emit(draft.into_record(id.clone()));
                editing.set(None);
            })
        };
        let on_cancel = {
            let editing = editing.clone();
            Callback::from(move |_: ()| editing.set(None))
        };
        return html! {
            <div class="page transactions-page">
                <TransactionForm
                    key={format!("edit-{}", record.id)}
                    title="Edit Transaction"
                    submit_label="Update Transaction"
                    initial={TransactionFormState::from_record(&record)}
                    categories={form_categories}
                    {on_submit}
                    {on_cancel}
                />
            </div>
        };
    }

    let on_edit = {
        let editing = editing.clone();
        Callback::from(move |id: TransactionId| {
            Logger::debug_with_component("TransactionsPage", &format!("Editing transaction {}", id));
            editing.set(Some(id));
        })
    };

    let on_add_click = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.navigate(Route::AddTransaction))
    };

    let state = &view.state;
    let rows = table_service.format_rows(&state.visible.rows);

    html! {
        <div class="page transactions-page">
            <div class="page-header">
                <h1>{"Transactions"}</h1>
                <button class="btn-primary" onclick={on_add_click}>
                    <i class="fas fa-plus"></i>
                    <span>{"Add Transaction"}</span>
                </button>
            </div>

            <section class="transactions-section">
                <TransactionFilters
                    search_term={state.filter.search_term.clone()}
                    category={state.filter.category.as_str().to_string()}
                    categories={props.config.categories.clone()}
                    on_search_change={view.actions.on_search_change.clone()}
                    on_category_change={view.actions.on_category_change.clone()}
                />
                <TransactionTable
                    {rows}
                    loading={state.shows_placeholder}
                    {on_edit}
                    on_delete={view.actions.on_delete.clone()}
                />
                {if state.shows_placeholder {
                    html! {}
                } else {
                    html! {
                        <TablePagination
                            visible={state.visible.clone()}
                            page_size_options={props.config.page_size_options()}
                            on_page_change={view.actions.on_page_change.clone()}
                            on_rows_per_page_change={view.actions.on_rows_per_page_change.clone()}
                        />
                    }
                }}
            </section>
        </div>
    }
}
