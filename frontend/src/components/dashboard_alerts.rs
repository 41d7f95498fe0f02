use shared::{DashboardAlert, Severity};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DashboardAlertsProps {
    pub alerts: Vec<DashboardAlert>,
}

fn alert_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "fas fa-check-circle",
        Severity::Warning => "fas fa-exclamation-triangle",
        Severity::Error => "fas fa-times-circle",
        Severity::Info => "fas fa-info-circle",
    }
}

/// Alerts above the dashboard content, each closable for the session
#[function_component(DashboardAlerts)]
pub fn dashboard_alerts(props: &DashboardAlertsProps) -> Html {
    let dismissed = use_state(Vec::<u32>::new);

    let visible: Vec<&DashboardAlert> = props
        .alerts
        .iter()
        .filter(|alert| !dismissed.contains(&alert.id))
        .collect();

    if visible.is_empty() {
        return html! {};
    }

    html! {
        <div class="dashboard-alerts">
            {for visible.into_iter().map(|alert| {
                let on_close = {
                    let dismissed = dismissed.clone();
                    let id = alert.id;
                    Callback::from(move |_: MouseEvent| {
                        let mut ids = (*dismissed).clone();
                        ids.push(id);
                        dismissed.set(ids);
                    })
                };
                html! {
                    <div key={alert.id} class={classes!("dashboard-alert", alert.severity.css_class())}>
                        <i class={alert_icon(alert.severity)}></i>
                        <span class="alert-message">{&alert.message}</span>
                        <button class="alert-close" onclick={on_close} title="Close">
                            <i class="fas fa-times"></i>
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
