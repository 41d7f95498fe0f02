use fms_core::Notification;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SnackbarProps {
    pub notifications: Vec<Notification>,
    pub on_dismiss: Callback<u64>,
}

/// Bottom-left stack of transient notifications
#[function_component(Snackbar)]
pub fn snackbar(props: &SnackbarProps) -> Html {
    html! {
        <div class="snackbar-stack">
            {for props.notifications.iter().map(|notification| html! {
                <SnackbarItem
                    key={notification.id}
                    notification={notification.clone()}
                    on_dismiss={props.on_dismiss.clone()}
                />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SnackbarItemProps {
    notification: Notification,
    on_dismiss: Callback<u64>,
}

#[function_component(SnackbarItem)]
fn snackbar_item(props: &SnackbarItemProps) -> Html {
    let id = props.notification.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        let auto_hide_ms = props.notification.auto_hide_ms;
        use_effect_with(id, move |id| {
            let id = *id;
            // Dropping the timeout on unmount cancels it
            let timeout = Timeout::new(auto_hide_ms, move || on_dismiss.emit(id));
            move || drop(timeout)
        });
    }

    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("snackbar", props.notification.severity.css_class())} role="alert">
            <span class="snackbar-message">{&props.notification.message}</span>
            <button class="snackbar-close" onclick={on_close} title="Dismiss">
                <i class="fas fa-times"></i>
            </button>
        </div>
    }
}
