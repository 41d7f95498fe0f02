//! Dashboard routes and the sidebar that links them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Dashboard,
    Transactions,
    AddTransaction,
    Budget,
    BudgetSetup,
    Reports,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Dashboard,
        Route::Transactions,
        Route::AddTransaction,
        Route::Budget,
        Route::BudgetSetup,
        Route::Reports,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::Transactions => "/dashboard/transactions",
            Route::AddTransaction => "/dashboard/transactions/add",
            Route::Budget => "/dashboard/budget",
            Route::BudgetSetup => "/dashboard/budget/setup",
            Route::Reports => "/dashboard/reports",
        }
    }

    /// Trailing slashes are ignored; unknown paths yield `None`
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Route::ALL.into_iter().find(|r| r.path() == normalized)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Transactions => "Transactions",
            Route::AddTransaction => "Add Transaction",
            Route::Budget => "Budget",
            Route::BudgetSetup => "Budget Setup",
            Route::Reports => "Reports",
        }
    }

    /// Routes under `/dashboard` carry the dashboard alerts above their content
    pub fn is_dashboard_route(&self) -> bool {
        self.path().starts_with(Route::Dashboard.path())
    }

    /// The sidebar entry highlighted while this route is shown
    pub fn sidebar_section(&self) -> Route {
        match self {
            Route::AddTransaction => Route::Transactions,
            Route::BudgetSetup => Route::Budget,
            other => *other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarItem {
    pub route: Route,
    pub label: &'static str,
    /// Font Awesome icon class
    pub icon: &'static str,
}

pub const SIDEBAR_ITEMS: [SidebarItem; 4] = [
    SidebarItem { route: Route::Dashboard, label: "Dashboard", icon: "fas fa-home" },
    SidebarItem { route: Route::Transactions, label: "Transactions", icon: "fas fa-wallet" },
    SidebarItem { route: Route::Budget, label: "Budget", icon: "fas fa-chart-pie" },
    SidebarItem { route: Route::Reports, label: "Reports", icon: "fas fa-chart-bar" },
];

/// Whatever can switch the visible page
pub trait Navigator {
    fn navigate(&self, route: Route);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_every_route_shows_dashboard_alerts() {
        assert!(Route::ALL.iter().all(Route::is_dashboard_route));
    }

    #[test]
    fn test_from_path_edge_cases() {
        assert_eq!(Route::from_path("/dashboard/transactions/"), Some(Route::Transactions));
        assert_eq!(Route::from_path("/dashboard/unknown"), None);
        assert_eq!(Route::from_path("/"), None);
        assert_eq!(Route::from_path(""), None);
    }

    #[test]
    fn test_sidebar_section() {
        assert_eq!(Route::AddTransaction.sidebar_section(), Route::Transactions);
        assert_eq!(Route::BudgetSetup.sidebar_section(), Route::Budget);
        assert_eq!(Route::Reports.sidebar_section(), Route::Reports);
        assert!(SIDEBAR_ITEMS.iter().all(|item| item.route.sidebar_section() == item.route));
    }
}
