mod components;
mod hooks;
mod services;

use std::rc::Rc;

use anyhow::Context;
use fms_core::{sample_alerts, AppConfig, Route, SampleTransactionSource, TransactionSource};
use yew::prelude::*;

use components::transactions::TransactionsPage;
use components::{DashboardAlerts, DashboardHome, PlaceholderPage, Sidebar, Snackbar};
use hooks::use_notifications::use_notifications;
use services::logging::{self, Logger};
use services::navigation::{initial_route, push_history};
use services::{ApiClient, DelayedSource, SharedSource};

/// Defaults, overlaid with `FMS_CONFIG_JSON` and `FMS_API_BASE_URL` when set at build time
fn load_config() -> anyhow::Result<AppConfig> {
    let config = match option_env!("FMS_CONFIG_JSON") {
        Some(json) => AppConfig::from_json_str(json).context("FMS_CONFIG_JSON is not a valid configuration")?,
        None => AppConfig::default(),
    };
    let config = match option_env!("FMS_API_BASE_URL") {
        Some(url) => config.with_api_base_url(url),
        None => config,
    };
    config.validate().context("invalid API base URL")?;
    Ok(config)
}

fn build_source(config: &AppConfig) -> Rc<dyn TransactionSource> {
    if config.use_sample_data {
        Logger::info_with_component(
            "App",
            &format!("Using sample data ({} ms delay)", config.sample_delay_ms),
        );
        Rc::new(DelayedSource::new(
            Rc::new(SampleTransactionSource::new()),
            config.sample_delay_ms,
        ))
    } else {
        Logger::info_with_component("App", &format!("Using API at {}", config.api_base_url));
        Rc::new(ApiClient::with_base_url(config.api_base_url.clone()))
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| {
        load_config().unwrap_or_else(|e| {
            Logger::error_with_component("App", &format!("{:#}, falling back to defaults", e));
            AppConfig::default()
        })
    });
    let source = {
        let config = config.clone();
        use_memo((), move |_| SharedSource(build_source(&config)))
    };
    let alerts = use_memo((), |_| sample_alerts());
    let route = use_state(initial_route);
    let notifications = use_notifications(&config);

    let on_navigate = {
        let route = route.clone();
        use_callback((), move |next: Route, _| {
            push_history(next);
            route.set(next);
        })
    };

    let content = match *route {
        Route::Dashboard => html! {
            <DashboardHome on_navigate={on_navigate.clone()} />
        },
        Route::Transactions | Route::AddTransaction => html! {
            <TransactionsPage
                route={*route}
                config={config.clone()}
                source={(*source).clone()}
                notifier={notifications.notifier.clone()}
                on_navigate={on_navigate.clone()}
            />
        },
        other => html! { <PlaceholderPage route={other} /> },
    };

    html! {
        <div class="app-layout">
            <Sidebar current={*route} on_navigate={on_navigate.clone()} />
            <main class="main-content">
                {if route.is_dashboard_route() {
                    html! { <DashboardAlerts alerts={(*alerts).clone()} /> }
                } else {
                    html! {}
                }}
                {content}
            </main>
            <Snackbar
                notifications={notifications.notifications.clone()}
                on_dismiss={notifications.on_dismiss.clone()}
            />
        </div>
    }
}

fn main() {
    logging::init(log::LevelFilter::Debug);
    yew::Renderer::<App>::new().render();
}
