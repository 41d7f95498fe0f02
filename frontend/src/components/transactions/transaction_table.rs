use fms_core::{amount_css_class, category_css_class};
use shared::{TransactionId, TransactionRow};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub rows: Vec<TransactionRow>,
    pub loading: bool,
    pub on_edit: Callback<TransactionId>,
    pub on_delete: Callback<TransactionId>,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    if props.loading {
        return html! { <div class="loading">{"Loading transactions..."}</div> };
    }

    html! {
        <div class="table-container">
            <table class="transactions-table">
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th>{"Description"}</th>
                        <th>{"Category"}</th>
                        <th class="amount-header">{"Amount"}</th>
                        <th class="actions-header">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {if props.rows.is_empty() {
                        html! {
                            <tr class="empty-row">
                                <td colspan="5">{"No transactions found"}</td>
                            </tr>
                        }
                    } else {
                        html! {
                            <>
                            {for props.rows.iter().map(|row| {
                                let on_edit = {
                                    let on_edit = props.on_edit.clone();
                                    let id = row.id.clone();
                                    Callback::from(move |_: MouseEvent| on_edit.emit(id.clone()))
                                };
                                let on_delete = {
                                    let on_delete = props.on_delete.clone();
                                    let id = row.id.clone();
                                    Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                                };
                                html! {
                                    <tr key={row.id.to_string()}>
                                        <td class="date">{&row.formatted_date}</td>
                                        <td class="description">{&row.description}</td>
                                        <td>
                                            <span class={category_css_class(row.category_style)}>
                                                {&row.category_label}
                                            </span>
                                        </td>
                                        <td class={amount_css_class(row.amount_type)}>
                                            {&row.formatted_amount}
                                        </td>
                                        <td class="actions">
                                            <button class="icon-btn edit" onclick={on_edit} title="Edit">
                                                <i class="fas fa-edit"></i>
                                            </button>
                                            <button class="icon-btn delete" onclick={on_delete} title="Delete">
                                                <i class="fas fa-trash"></i>
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })}
                            </>
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
