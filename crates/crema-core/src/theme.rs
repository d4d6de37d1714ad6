//! Color theme preference.

use serde::{Deserialize, Serialize};

/// The client color theme: light or dark, one boolean, read by every
/// presenter. Resets to the configured default on restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePreference {
    /// Whether the dark color scheme is active.
    pub dark_mode: bool,
}

impl ThemePreference {
    /// Creates a preference with the given initial scheme.
    pub fn new(dark_mode: bool) -> Self {
        Self { dark_mode }
    }

    /// Flips between light and dark. A pure flip with no guard, so two
    /// toggles always restore the original value.
    pub fn toggle(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert!(!ThemePreference::default().dark_mode);
    }

    #[test]
    fn test_toggle_is_involution() {
        for start in [false, true] {
            let mut theme = ThemePreference::new(start);
            theme.toggle();
            assert_eq!(theme.dark_mode, !start);
            theme.toggle();
            assert_eq!(theme.dark_mode, start);
        }
    }
}
