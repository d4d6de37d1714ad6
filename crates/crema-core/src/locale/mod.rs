//! Locale and layout-direction resolution.
//!
//! The supported language set is closed and registered here together with
//! its direction table. Direction is always derived from the locale; the
//! two are never stored or updated independently.

pub mod catalog;

pub use catalog::{StaticCatalog, TranslationCatalog, Translator};

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter};

use crate::error::{CremaError, Result};

/// Supported client locales.
///
/// A closed set: adding a language means adding a variant here along with
/// its direction and catalog table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (default fallback locale).
    En,
    /// Arabic.
    Ar,
}

/// The default fallback locale.
pub const DEFAULT_LOCALE: Locale = Locale::En;

/// Ordered list of supported locales, stable for presentation.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::Ar];

impl Locale {
    /// Attempts to parse a locale code (case-insensitive, tolerant of
    /// region tags such as `ar-EG` or `en_US`).
    ///
    /// Returns `None` for codes outside the supported set.
    pub fn parse(code: &str) -> Option<Self> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        let normalized = code.to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }

    /// Returns the layout direction for this locale.
    ///
    /// Total over the closed set: every supported locale has exactly one
    /// direction.
    pub fn direction(self) -> Direction {
        match self {
            Self::En => Direction::Ltr,
            Self::Ar => Direction::Rtl,
        }
    }

    /// Returns true if this locale uses a right-to-left script.
    pub fn is_rtl(self) -> bool {
        self.direction() == Direction::Rtl
    }
}

impl Default for Locale {
    fn default() -> Self {
        DEFAULT_LOCALE
    }
}

/// Layout flow direction derived from the active locale.
///
/// Presenters mirror all directional layout (leading/trailing margins,
/// row ordering, text alignment, icon-to-text ordering) off this single
/// value rather than per-screen locale checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left-to-right layout flow.
    Ltr,
    /// Right-to-left layout flow (mirrored).
    Rtl,
}

/// Resolves the layout direction for a raw locale code.
///
/// # Errors
///
/// Returns `UnsupportedLocale` for codes outside the registered set; the
/// caller keeps its previous valid locale rather than crashing.
pub fn resolve_direction(code: &str) -> Result<Direction> {
    Locale::parse(code)
        .map(Locale::direction)
        .ok_or_else(|| CremaError::unsupported_locale(code))
}

/// The active language together with its derived direction flag.
///
/// Invariant: `rtl` always equals `current.is_rtl()`. The fields are
/// private and only updated together, so a reader can never observe a
/// language with a stale direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalePreference {
    current: Locale,
    rtl: bool,
}

impl LocalePreference {
    /// Creates a preference for the given locale, deriving its direction.
    pub fn new(locale: Locale) -> Self {
        Self {
            current: locale,
            rtl: locale.is_rtl(),
        }
    }

    /// Returns the active locale.
    pub fn current(&self) -> Locale {
        self.current
    }

    /// Returns the derived right-to-left flag.
    pub fn rtl(&self) -> bool {
        self.rtl
    }

    /// Returns the derived layout direction.
    pub fn direction(&self) -> Direction {
        self.current.direction()
    }

    /// Switches to a new locale, recomputing the direction flag in the
    /// same transition.
    pub fn set(&mut self, locale: Locale) {
        self.current = locale;
        self.rtl = locale.is_rtl();
    }
}

impl Default for LocalePreference {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_supported_codes() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("ar"), Some(Locale::Ar));
        assert_eq!(Locale::parse("AR"), Some(Locale::Ar));
        assert_eq!(Locale::parse("ar-EG"), Some(Locale::Ar));
        assert_eq!(Locale::parse("en_US"), Some(Locale::En));
    }

    #[test]
    fn test_parse_rejects_unknown_codes() {
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::parse(""), None);
        assert_eq!(Locale::parse("  "), None);
    }

    #[test]
    fn test_every_supported_locale_has_one_direction() {
        for locale in Locale::iter() {
            let direction = locale.direction();
            assert!(direction == Direction::Ltr || direction == Direction::Rtl);
            assert_eq!(locale.is_rtl(), direction == Direction::Rtl);
        }
    }

    #[test]
    fn test_resolve_direction() {
        assert_eq!(resolve_direction("en").unwrap(), Direction::Ltr);
        assert_eq!(resolve_direction("ar").unwrap(), Direction::Rtl);
        let err = resolve_direction("fr").unwrap_err();
        assert!(err.is_unsupported_locale());
    }

    #[test]
    fn test_preference_keeps_rtl_in_sync() {
        let mut pref = LocalePreference::default();
        assert_eq!(pref.current(), Locale::En);
        assert!(!pref.rtl());

        pref.set(Locale::Ar);
        assert_eq!(pref.current(), Locale::Ar);
        assert!(pref.rtl());
        assert_eq!(pref.direction(), Direction::Rtl);

        pref.set(Locale::En);
        assert!(!pref.rtl());
    }

    #[test]
    fn test_locale_wire_form_is_lowercase() {
        assert_eq!(Locale::Ar.to_string(), "ar");
        assert_eq!(Locale::En.as_ref(), "en");
    }
}
