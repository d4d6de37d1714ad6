//! Error types for the Crema client core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::locale::Locale;

/// A shared error type for the Crema client core.
///
/// This provides typed, structured error variants. Every variant has a
/// defined, non-crashing recovery path: locale and translation failures
/// fall back locally and never surface to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CremaError {
    /// A locale code outside the registered, closed set of supported
    /// languages. Callers keep the previous valid locale.
    #[error("Unsupported locale: '{code}'")]
    UnsupportedLocale { code: String },

    /// A translation key is absent for the target locale. Callers fall
    /// back to the default locale's string, then to the raw key.
    #[error("Missing translation: '{key}' for locale '{locale}'")]
    MissingTranslation { key: String, locale: Locale },

    /// An operation that requires a logged-in user ran without one.
    #[error("No authenticated user")]
    NotAuthenticated,
}

impl CremaError {
    /// Creates an UnsupportedLocale error
    pub fn unsupported_locale(code: impl Into<String>) -> Self {
        Self::UnsupportedLocale { code: code.into() }
    }

    /// Creates a MissingTranslation error
    pub fn missing_translation(key: impl Into<String>, locale: Locale) -> Self {
        Self::MissingTranslation {
            key: key.into(),
            locale,
        }
    }

    /// Check if this is an UnsupportedLocale error
    pub fn is_unsupported_locale(&self) -> bool {
        matches!(self, Self::UnsupportedLocale { .. })
    }

    /// Check if this is a MissingTranslation error
    pub fn is_missing_translation(&self) -> bool {
        matches!(self, Self::MissingTranslation { .. })
    }
}

/// A type alias for `Result<T, CremaError>`.
pub type Result<T> = std::result::Result<T, CremaError>;
