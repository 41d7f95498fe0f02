pub mod api;
pub mod date_utils;
pub mod delayed_source;
pub mod logging;
pub mod navigation;

pub use api::ApiClient;
pub use date_utils::DateUtils;
pub use delayed_source::{DelayedSource, SharedSource};
pub use navigation::RouteNavigator;
