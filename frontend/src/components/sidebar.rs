use fms_core::{Route, SIDEBAR_ITEMS};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub current: Route,
    pub on_navigate: Callback<Route>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let active_section = props.current.sidebar_section();

    html! {
        <nav class="sidebar">
            <div class="sidebar-brand">
                <i class="fas fa-coins"></i>
                <span>{"Finance Manager"}</span>
            </div>
            <ul class="sidebar-items">
                {for SIDEBAR_ITEMS.iter().map(|item| {
                    let route = item.route;
                    let onclick = {
                        let on_navigate = props.on_navigate.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            on_navigate.emit(route);
                        })
                    };
                    html! {
                        <li class={classes!("sidebar-item", (route == active_section).then_some("active"))}>
                            <a href={route.path()} {onclick}>
                                <i class={item.icon}></i>
                                <span class="sidebar-label">{item.label}</span>
                            </a>
                        </li>
                    }
                })}
            </ul>
        </nav>
    }
}
