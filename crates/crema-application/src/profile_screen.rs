//! Profile screen view model.
//!
//! The admin and supervisor profile screens share one presenter; the
//! role namespace in the translation keys is the only difference, so
//! there is no role branching here.

use serde::Serialize;

use crema_core::locale::{Direction, Translator};
use crema_core::menu::{self, Route};
use crema_core::store::StoreSnapshot;

/// Everything the profile screen needs to render its read-only view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileViewModel {
    /// Layout direction for the whole screen.
    pub direction: Direction,
    /// Active color scheme.
    pub dark_mode: bool,
    /// Role-namespaced screen title.
    pub title: String,
    /// Translated field labels.
    pub name_label: String,
    pub email_label: String,
    pub phone_label: String,
    /// Translated action labels for the edit form.
    pub save_label: String,
    pub cancel_label: String,
    /// Current field values; empty strings when nobody is logged in.
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Builds profile screen view models.
#[derive(Clone)]
pub struct ProfileScreenService {
    translator: Translator,
}

impl ProfileScreenService {
    /// Creates the service over the given translator.
    pub fn new(translator: Translator) -> Self {
        Self { translator }
    }

    /// Builds the view model for the current state.
    pub fn build(&self, snapshot: &StoreSnapshot) -> ProfileViewModel {
        let locale = snapshot.locale.current();
        let title = match snapshot.session.role {
            Some(role) => {
                menu::resolve_menu_label(role, Route::Profile, locale, &self.translator)
            }
            None => self.translator.translate("app.title", locale),
        };

        let (name, email, phone) = snapshot
            .session
            .user
            .as_ref()
            .map(|u| (u.name.clone(), u.email.clone(), u.phone.clone()))
            .unwrap_or_default();

        ProfileViewModel {
            direction: snapshot.locale.direction(),
            dark_mode: snapshot.theme.dark_mode,
            title,
            name_label: self.translator.translate("profile.name", locale),
            email_label: self.translator.translate("profile.email", locale),
            phone_label: self.translator.translate("profile.phone", locale),
            save_label: self.translator.translate("profile.save", locale),
            cancel_label: self.translator.translate("profile.cancel", locale),
            name,
            email,
            phone,
        }
    }
}

impl Default for ProfileScreenService {
    fn default() -> Self {
        Self::new(Translator::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crema_core::locale::Locale;
    use crema_core::session::StaffRole;
    use crema_core::store::StateStore;

    #[test]
    fn test_profile_screen_for_admin() {
        let mut store = StateStore::new();
        store.login("Ahmed Ali", "ahmed@crema.app", "01012345678", StaffRole::Admin);
        let vm = ProfileScreenService::default().build(&store.snapshot());

        assert_eq!(vm.title, "My Profile");
        assert_eq!(vm.name_label, "Name");
        assert_eq!(vm.name, "Ahmed Ali");
        assert_eq!(vm.phone, "01012345678");
        assert_eq!(vm.direction, Direction::Ltr);
    }

    #[test]
    fn test_profile_screen_mirrors_in_arabic() {
        let mut store = StateStore::new();
        store.login("Sara Adel", "sara@crema.app", "01098765432", StaffRole::Supervisor);
        store.set_language(Locale::Ar);
        let vm = ProfileScreenService::default().build(&store.snapshot());

        assert_eq!(vm.direction, Direction::Rtl);
        assert_eq!(vm.title, "ملفي الشخصي");
        assert_eq!(vm.email_label, "البريد الإلكتروني");
        assert_eq!(vm.save_label, "حفظ");
    }

    #[test]
    fn test_profile_screen_without_user() {
        let store = StateStore::new();
        let vm = ProfileScreenService::default().build(&store.snapshot());
        assert_eq!(vm.title, "Crema");
        assert!(vm.name.is_empty());
        assert!(vm.email.is_empty());
    }
}
