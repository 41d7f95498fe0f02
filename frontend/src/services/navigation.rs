use fms_core::{Navigator, Route};
use yew::Callback;

use crate::services::logging::Logger;

/// Navigator that hands the route to the shell's route state
#[derive(Clone, PartialEq)]
pub struct RouteNavigator {
    on_navigate: Callback<Route>,
}

impl RouteNavigator {
    pub fn new(on_navigate: Callback<Route>) -> Self {
        Self { on_navigate }
    }
}

impl Navigator for RouteNavigator {
    fn navigate(&self, route: Route) {
        Logger::debug_with_component("Navigator", &format!("Navigating to {}", route.path()));
        self.on_navigate.emit(route);
    }
}

/// Route matching the address bar, falling back to the dashboard
pub fn initial_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .and_then(|path| Route::from_path(&path))
        .unwrap_or(Route::Dashboard)
}

/// Mirror the route in the address bar without reloading
pub fn push_history(route: Route) {
    let Some(history) = web_sys::window().and_then(|window| window.history().ok()) else {
        return;
    };
    if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(route.path())) {
        Logger::warn_with_component("Navigator", &format!("Could not update history: {:?}", e));
    }
}
