use fms_core::category_options;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionFiltersProps {
    pub search_term: String,
    pub category: String,
    /// Filter choices, "all" included
    pub categories: Vec<String>,
    pub on_search_change: Callback<String>,
    pub on_category_change: Callback<String>,
}

#[function_component(TransactionFilters)]
pub fn transaction_filters(props: &TransactionFiltersProps) -> Html {
    let on_search_input = {
        let on_search_change = props.on_search_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_search_change.emit(input.value());
        })
    };

    let on_category_select = {
        let on_category_change = props.on_category_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_category_change.emit(select.value());
        })
    };

    html! {
        <div class="transaction-filters">
            <div class="search-field">
                <i class="fas fa-search"></i>
                <input
                    type="text"
                    placeholder="Search transactions"
                    value={props.search_term.clone()}
                    oninput={on_search_input}
                />
            </div>
            <label class="category-filter">
                <span>{"Category"}</span>
                <select onchange={on_category_select}>
                    {for category_options(&props.categories).into_iter().map(|(value, label)| {
                        let selected = value == props.category;
                        html! { <option {value} {selected}>{label}</option> }
                    })}
                </select>
            </label>
        </div>
    }
}
