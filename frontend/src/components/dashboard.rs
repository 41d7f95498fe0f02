use fms_core::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DashboardHomeProps {
    pub on_navigate: Callback<Route>,
}

#[function_component(DashboardHome)]
pub fn dashboard_home(props: &DashboardHomeProps) -> Html {
    let shortcut = |route: Route, icon: &'static str| {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(route));
        html! {
            <button class="shortcut-card" {onclick}>
                <i class={icon}></i>
                <span>{route.title()}</span>
            </button>
        }
    };

    html! {
        <div class="page dashboard-page">
            <div class="page-header">
                <h1>{"Dashboard"}</h1>
            </div>
            <div class="shortcut-grid">
                {shortcut(Route::Transactions, "fas fa-wallet")}
                {shortcut(Route::AddTransaction, "fas fa-plus")}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PlaceholderPageProps {
    pub route: Route,
}

/// Pages that have no content yet
#[function_component(PlaceholderPage)]
pub fn placeholder_page(props: &PlaceholderPageProps) -> Html {
    html! {
        <div class="page placeholder-page">
            <div class="page-header">
                <h1>{props.route.title()}</h1>
            </div>
            <p class="placeholder-text">{"Coming soon."}</p>
        </div>
    }
}
