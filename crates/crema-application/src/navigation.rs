//! Navigation provider seam.
//!
//! Routing mechanics live outside the core; the application layer only
//! needs the current route list and a way to request navigation. Routes
//! arrive here already parsed into the closed [`Route`] enum.

use crema_core::menu::Route;
use crema_core::session::StaffRole;

/// The capability the application layer needs from the host's router.
pub trait NavigationProvider {
    /// The ordered routes currently offered to the user (drives the
    /// drawer). The application layer only reads these.
    fn current_routes(&self) -> Vec<Route>;

    /// Requests navigation to the given route.
    fn navigate(&mut self, route: Route);
}

/// Simple in-memory navigator.
///
/// Suitable for tests and for hosts without a native router; real mobile
/// shells implement [`NavigationProvider`] over their own stack.
#[derive(Debug, Clone)]
pub struct MemoryNavigator {
    routes: Vec<Route>,
    current: Route,
}

impl MemoryNavigator {
    /// Creates a navigator over a fixed route list, starting at the
    /// first route.
    pub fn new(routes: Vec<Route>) -> Self {
        let current = routes.first().copied().unwrap_or(Route::Login);
        Self { routes, current }
    }

    /// The route list a freshly logged-in member of `role` sees.
    pub fn for_role(role: StaffRole) -> Self {
        let routes = match role {
            StaffRole::Admin => vec![
                Route::Home,
                Route::Profile,
                Route::Products,
                Route::Orders,
                Route::Staff,
                Route::Settings,
                Route::Help,
                Route::Privacy,
            ],
            StaffRole::Supervisor => vec![
                Route::Home,
                Route::Profile,
                Route::Products,
                Route::Orders,
                Route::Staff,
                Route::Settings,
                Route::Help,
            ],
        };
        Self::new(routes)
    }

    /// The route the navigator currently points at.
    pub fn current(&self) -> Route {
        self.current
    }
}

impl NavigationProvider for MemoryNavigator {
    fn current_routes(&self) -> Vec<Route> {
        self.routes.clone()
    }

    fn navigate(&mut self, route: Route) {
        self.current = route;
    }
}
