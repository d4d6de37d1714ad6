//! Static help and privacy pages.

use serde::Serialize;

use crema_core::locale::{Direction, Translator};
use crema_core::menu::Route;
use crema_core::store::StoreSnapshot;

/// The static informational pages of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StaticPage {
    Help,
    Privacy,
}

impl StaticPage {
    /// The route this page is reached through.
    pub fn route(self) -> Route {
        match self {
            Self::Help => Route::Help,
            Self::Privacy => Route::Privacy,
        }
    }

    fn title_key(self) -> &'static str {
        match self {
            Self::Help => "help.title",
            Self::Privacy => "privacy.title",
        }
    }

    fn body_key(self) -> &'static str {
        match self {
            Self::Help => "help.body",
            Self::Privacy => "privacy.body",
        }
    }
}

/// Translated content of one static page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticPageViewModel {
    /// Layout direction for the page.
    pub direction: Direction,
    /// Translated page title.
    pub title: String,
    /// Translated body copy.
    pub body: String,
}

/// Builds static page view models.
#[derive(Clone)]
pub struct StaticPageService {
    translator: Translator,
}

impl StaticPageService {
    /// Creates the service over the given translator.
    pub fn new(translator: Translator) -> Self {
        Self { translator }
    }

    /// Builds the given page for the current locale.
    pub fn build(&self, page: StaticPage, snapshot: &StoreSnapshot) -> StaticPageViewModel {
        let locale = snapshot.locale.current();
        StaticPageViewModel {
            direction: snapshot.locale.direction(),
            title: self.translator.translate(page.title_key(), locale),
            body: self.translator.translate(page.body_key(), locale),
        }
    }
}

impl Default for StaticPageService {
    fn default() -> Self {
        Self::new(Translator::default())
    }
}
