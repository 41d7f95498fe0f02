use fms_core::{pagination_caption, VisibleRows};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TablePaginationProps {
    pub visible: VisibleRows,
    pub page_size_options: Vec<usize>,
    pub on_page_change: Callback<usize>,
    pub on_rows_per_page_change: Callback<usize>,
}

#[function_component(TablePagination)]
pub fn table_pagination(props: &TablePaginationProps) -> Html {
    let visible = &props.visible;

    let on_rows_select = {
        let on_rows_per_page_change = props.on_rows_per_page_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(rows) = select.value().parse::<usize>() {
                on_rows_per_page_change.emit(rows);
            }
        })
    };

    let on_previous = {
        let on_page_change = props.on_page_change.clone();
        // A page left behind by a shrinking set steps straight back to the last real page
        let target = visible.page.saturating_sub(1).min(visible.last_page());
        Callback::from(move |_: MouseEvent| on_page_change.emit(target))
    };

    let on_next = {
        let on_page_change = props.on_page_change.clone();
        let target = visible.page + 1;
        Callback::from(move |_: MouseEvent| on_page_change.emit(target))
    };

    html! {
        <div class="table-pagination">
            <label class="rows-per-page">
                <span>{"Rows per page:"}</span>
                <select onchange={on_rows_select}>
                    {for props.page_size_options.iter().map(|size| {
                        let selected = *size == visible.rows_per_page;
                        html! { <option value={size.to_string()} {selected}>{size.to_string()}</option> }
                    })}
                </select>
            </label>
            <span class="pagination-caption">{pagination_caption(visible)}</span>
            <button
                class="page-btn"
                disabled={!visible.has_previous_page()}
                onclick={on_previous}
                title="Previous page"
            >
                <i class="fas fa-chevron-left"></i>
            </button>
            <button
                class="page-btn"
                disabled={!visible.has_next_page()}
                onclick={on_next}
                title="Next page"
            >
                <i class="fas fa-chevron-right"></i>
            </button>
        </div>
    }
}
