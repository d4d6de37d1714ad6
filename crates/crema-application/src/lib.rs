//! Application layer for Crema.
//!
//! This crate provides the use-case services presenters talk to: they
//! consume the core store, translator and navigation provider and
//! produce ready-to-render view models. Screens read view models and
//! dispatch intents; they never touch store fields directly.

pub mod drawer;
pub mod navigation;
pub mod profile_editor;
pub mod profile_screen;
pub mod settings;
pub mod static_page;

pub use drawer::{DrawerItem, DrawerService, DrawerViewModel};
pub use navigation::{MemoryNavigator, NavigationProvider};
pub use profile_editor::ProfileEditSession;
pub use profile_screen::{ProfileScreenService, ProfileViewModel};
pub use settings::SettingsService;
pub use static_page::{StaticPage, StaticPageService, StaticPageViewModel};
