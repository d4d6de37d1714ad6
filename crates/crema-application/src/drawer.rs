//! Navigation drawer view model.
//!
//! The drawer is a pure consumer: it reads a store snapshot and the
//! router's route list and produces translated, role-namespaced items.
//! Mirroring for RTL locales is carried by the single `direction` value
//! on the view model, never by per-item locale checks.

use serde::Serialize;

use crema_core::locale::{Direction, Translator};
use crema_core::menu::{self, Icon, Route};
use crema_core::store::StoreSnapshot;

use crate::navigation::NavigationProvider;

/// One drawer entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawerItem {
    /// Target route.
    pub route: Route,
    /// Translated label in the active role's namespace.
    pub label: String,
    /// Icon variant, resolved from the closed route set.
    pub icon: Icon,
    /// Whether this entry is the screen currently shown.
    pub selected: bool,
}

/// Everything the drawer needs to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawerViewModel {
    /// Layout direction; the drawer mirrors as a whole off this value.
    pub direction: Direction,
    /// Active color scheme.
    pub dark_mode: bool,
    /// Header line: the user's name, or translated guest copy.
    pub header: String,
    /// Translated logout action label.
    pub logout_label: String,
    /// Drawer entries in router order; empty when unauthenticated.
    pub items: Vec<DrawerItem>,
}

/// Builds drawer view models from the current client state.
#[derive(Clone)]
pub struct DrawerService {
    translator: Translator,
}

impl DrawerService {
    /// Creates the service over the given translator.
    pub fn new(translator: Translator) -> Self {
        Self { translator }
    }

    /// Builds the drawer for the current state.
    ///
    /// Labels resolve through the `{role}.{route}` namespace with the
    /// translator's fallback chain, so a missing key degrades to copy
    /// from the default locale or the raw key, never an error.
    pub fn build(
        &self,
        snapshot: &StoreSnapshot,
        nav: &dyn NavigationProvider,
        current: Route,
    ) -> DrawerViewModel {
        let locale = snapshot.locale.current();
        let header = snapshot
            .session
            .user_name()
            .map(str::to_string)
            .unwrap_or_else(|| self.translator.translate("common.guest", locale));

        let items = match snapshot.session.role {
            Some(role) => nav
                .current_routes()
                .into_iter()
                .map(|route| DrawerItem {
                    route,
                    label: menu::resolve_menu_label(role, route, locale, &self.translator),
                    icon: route.icon(),
                    selected: route == current,
                })
                .collect(),
            None => Vec::new(),
        };

        DrawerViewModel {
            direction: snapshot.locale.direction(),
            dark_mode: snapshot.theme.dark_mode,
            header,
            logout_label: self.translator.translate("common.logout", locale),
            items,
        }
    }
}

impl Default for DrawerService {
    fn default() -> Self {
        Self::new(Translator::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::MemoryNavigator;
    use crema_core::locale::Locale;
    use crema_core::session::StaffRole;
    use crema_core::store::StateStore;

    fn admin_store() -> StateStore {
        let mut store = StateStore::new();
        store.login("Ahmed Ali", "ahmed@crema.app", "01012345678", StaffRole::Admin);
        store
    }

    #[test]
    fn test_drawer_for_admin_in_english() {
        let store = admin_store();
        let nav = MemoryNavigator::for_role(StaffRole::Admin);
        let drawer = DrawerService::default().build(&store.snapshot(), &nav, Route::Home);

        assert_eq!(drawer.direction, Direction::Ltr);
        assert_eq!(drawer.header, "Ahmed Ali");
        assert_eq!(drawer.logout_label, "Log Out");
        assert_eq!(drawer.items.len(), 8);

        let staff = drawer.items.iter().find(|i| i.route == Route::Staff).unwrap();
        assert_eq!(staff.label, "Manage Staff");
        assert_eq!(staff.icon, Icon::People);
        assert!(!staff.selected);
        assert!(drawer.items[0].selected); // Home is current
    }

    #[test]
    fn test_drawer_labels_follow_the_active_role() {
        let mut store = StateStore::new();
        store.login("Sara Adel", "sara@crema.app", "01098765432", StaffRole::Supervisor);
        let nav = MemoryNavigator::for_role(StaffRole::Supervisor);
        let drawer = DrawerService::default().build(&store.snapshot(), &nav, Route::Home);

        let staff = drawer.items.iter().find(|i| i.route == Route::Staff).unwrap();
        assert_eq!(staff.label, "My Team");
    }

    #[test]
    fn test_drawer_mirrors_in_arabic() {
        let mut store = admin_store();
        store.set_language(Locale::Ar);
        let nav = MemoryNavigator::for_role(StaffRole::Admin);
        let drawer = DrawerService::default().build(&store.snapshot(), &nav, Route::Home);

        assert_eq!(drawer.direction, Direction::Rtl);
        let products = drawer.items.iter().find(|i| i.route == Route::Products).unwrap();
        assert_eq!(products.label, "المنتجات");
        assert_eq!(drawer.logout_label, "تسجيل الخروج");
    }

    #[test]
    fn test_drawer_without_session_is_empty_with_guest_header() {
        let store = StateStore::new();
        let nav = MemoryNavigator::new(vec![Route::Login]);
        let drawer = DrawerService::default().build(&store.snapshot(), &nav, Route::Login);

        assert!(drawer.items.is_empty());
        assert_eq!(drawer.header, "Guest");
    }

    #[test]
    fn test_view_model_serializes_camel_case() {
        let store = admin_store();
        let nav = MemoryNavigator::for_role(StaffRole::Admin);
        let drawer = DrawerService::default().build(&store.snapshot(), &nav, Route::Home);
        let json = serde_json::to_value(&drawer).unwrap();
        assert_eq!(json["darkMode"], false);
        assert_eq!(json["direction"], "ltr");
        assert_eq!(json["items"][0]["route"], "Home");
    }
}
