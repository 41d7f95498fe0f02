use fms_core::{
    category_options, error_for, FormField, FormValidationError, TransactionDraft, TransactionFormState,
    TransactionKind, MAX_DESCRIPTION_LENGTH,
};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionFormProps {
    pub title: AttrValue,
    pub submit_label: AttrValue,
    pub initial: TransactionFormState,
    /// Selectable categories, without "all"
    pub categories: Vec<String>,
    pub on_submit: Callback<TransactionDraft>,
    pub on_cancel: Callback<()>,
}

/// Add/edit form; emits a validated draft
#[function_component(TransactionForm)]
pub fn transaction_form(props: &TransactionFormProps) -> Html {
    let form = {
        let initial = props.initial.clone();
        use_state(move || initial)
    };
    let errors = use_state(Vec::<FormValidationError>::new);

    let update = |apply: fn(&mut TransactionFormState, String)| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        }
    };

    let on_amount_input = {
        let set = update(|f, v| f.amount_input = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };

    let on_category_change = {
        let set = update(|f, v| f.set_category(v));
        Callback::from(move |e: Event| set(e.target_unchecked_into::<HtmlSelectElement>().value()))
    };

    let on_description_input = {
        let set = update(|f, v| f.description = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlTextAreaElement>().value()))
    };

    let on_date_change = {
        let set = update(|f, v| f.date = v);
        Callback::from(move |e: Event| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };

    let kind_button = |kind: TransactionKind| {
        let onclick = {
            let form = form.clone();
            Callback::from(move |_: MouseEvent| {
                if form.kind != kind {
                    let mut next = (*form).clone();
                    next.toggle_kind();
                    form.set(next);
                }
            })
        };
        let class = classes!(
            "kind-toggle-btn",
            kind.label().to_lowercase(),
            (form.kind == kind).then_some("active")
        );
        html! {
            <button type="button" {class} {onclick}>{kind.label()}</button>
        }
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate() {
                Ok(draft) => {
                    errors.set(Vec::new());
                    on_submit.emit(draft);
                }
                Err(found) => errors.set(found),
            }
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let helper = |field: FormField| match error_for(&errors, field) {
        Some(message) => html! { <span class="field-error">{message}</span> },
        None => html! {},
    };

    html! {
        <section class="transaction-form-section">
            <h2>{props.title.clone()}</h2>
            <form class="transaction-form" {onsubmit}>
                <div class="kind-toggle">
                    {kind_button(TransactionKind::Expense)}
                    {kind_button(TransactionKind::Income)}
                </div>

                <div class="form-group">
                    <label for="amount">{"Amount"}</label>
                    <input
                        id="amount"
                        type="text"
                        inputmode="decimal"
                        placeholder="0.00"
                        value={form.amount_input.clone()}
                        oninput={on_amount_input}
                    />
                    {helper(FormField::Amount)}
                </div>

                <div class="form-group">
                    <label for="category">{"Category"}</label>
                    <select id="category" onchange={on_category_change}>
                        <option value="" selected={form.category.is_empty()} disabled=true>
                            {"Select a category"}
                        </option>
                        {for category_options(&props.categories).into_iter().map(|(value, label)| {
                            let selected = value == form.category;
                            html! { <option {value} {selected}>{label}</option> }
                        })}
                    </select>
                    {helper(FormField::Category)}
                </div>

                <div class="form-group">
                    <label for="description">{"Description"}</label>
                    <textarea
                        id="description"
                        maxlength={MAX_DESCRIPTION_LENGTH.to_string()}
                        placeholder="Optional"
                        value={form.description.clone()}
                        oninput={on_description_input}
                    />
                    {helper(FormField::Description)}
                </div>

                <div class="form-group">
                    <label for="date">{"Date"}</label>
                    <input
                        id="date"
                        type="date"
                        value={form.date.clone()}
                        onchange={on_date_change}
                    />
                    {helper(FormField::Date)}
                </div>

                <div class="form-actions">
                    <button type="button" class="btn-secondary" onclick={on_cancel}>{"Cancel"}</button>
                    <button type="submit" class="btn-primary">{props.submit_label.clone()}</button>
                </div>
            </form>
        </section>
    }
}
