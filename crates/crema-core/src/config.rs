//! Store configuration.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Initial values for the state store.
///
/// Nothing here persists across restarts; this is the process-start
/// baseline the store resets to.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    /// Locale active before the user picks a language.
    #[serde(default)]
    pub default_locale: Locale,
    /// Whether the dark color scheme starts enabled.
    #[serde(default)]
    pub dark_mode: bool,
}
