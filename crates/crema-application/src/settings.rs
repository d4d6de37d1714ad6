//! Settings screen intents.
//!
//! Thin forwarding of user actions to store intents. Language changes go
//! through the store so the visible language and the direction flag move
//! in one transition; logout additionally asks the router for the
//! unauthenticated entry screen.

use tracing::warn;

use crema_core::error::Result;
use crema_core::menu::Route;
use crema_core::store::StateStore;

use crate::navigation::NavigationProvider;

/// Dispatches settings-screen actions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsService;

impl SettingsService {
    /// Flips the color theme.
    pub fn toggle_theme(&self, store: &mut StateStore) {
        store.toggle_theme();
    }

    /// Switches the active language from the code the language picker
    /// produced.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedLocale` for unknown codes; the store keeps
    /// the previous valid locale, so the screen stays consistent.
    pub fn change_language(&self, store: &mut StateStore, code: &str) -> Result<()> {
        store.set_language_code(code).inspect_err(|err| {
            warn!(%code, %err, "language change rejected, keeping previous locale");
        })
    }

    /// Logs out and navigates to the unauthenticated entry screen.
    pub fn logout(&self, store: &mut StateStore, nav: &mut dyn NavigationProvider) {
        store.logout();
        nav.navigate(Route::Login);
    }
}
