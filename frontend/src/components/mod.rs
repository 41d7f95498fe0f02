pub mod dashboard;
pub mod dashboard_alerts;
pub mod sidebar;
pub mod snackbar;
pub mod transactions;

pub use dashboard::{DashboardHome, PlaceholderPage};
pub use dashboard_alerts::DashboardAlerts;
pub use sidebar::Sidebar;
pub use snackbar::Snackbar;
