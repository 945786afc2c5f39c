//! Dark-mode state: system preference plus an optional manual override.

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme mode.
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used in CSS datasets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    const fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

/// Tracks the effective theme mode.
///
/// Starts out following the system preference; any manual switch (toggle or
/// explicit set) pins the mode, after which preference changes are ignored.
/// No persistence: the page reload starts from the system preference again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeState {
    mode: ThemeMode,
    follows_system: bool,
}

impl ThemeState {
    /// Initial state from the system color-scheme preference.
    #[must_use]
    pub const fn from_system(prefers_dark: bool) -> Self {
        Self {
            mode: ThemeMode::from_prefers_dark(prefers_dark),
            follows_system: true,
        }
    }

    /// Effective mode.
    #[must_use]
    pub const fn mode(self) -> ThemeMode {
        self.mode
    }

    /// Whether dark mode is in effect.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self.mode, ThemeMode::Dark)
    }

    /// Whether the state still tracks the system preference.
    #[must_use]
    pub const fn follows_system(self) -> bool {
        self.follows_system
    }

    /// Flips the mode and pins it as a manual override.
    pub const fn toggle(&mut self) -> ThemeMode {
        let next = match self.mode {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
        self.set_mode(next);
        next
    }

    /// Sets the mode explicitly, pinning it as a manual override.
    pub const fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.follows_system = false;
    }

    /// Applies a system preference change.
    ///
    /// Only takes effect while no manual override is pinned. Returns whether
    /// the effective mode changed.
    pub const fn system_changed(&mut self, prefers_dark: bool) -> bool {
        if !self.follows_system {
            return false;
        }
        let next = ThemeMode::from_prefers_dark(prefers_dark);
        let changed = !matches!(
            (self.mode, next),
            (ThemeMode::Light, ThemeMode::Light) | (ThemeMode::Dark, ThemeMode::Dark)
        );
        self.mode = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_from_system_preference() {
        assert!(ThemeState::from_system(true).is_dark());
        assert!(!ThemeState::from_system(false).is_dark());
    }

    #[test]
    fn toggle_flips_and_pins() {
        let mut state = ThemeState::from_system(true);
        assert_eq!(state.toggle(), ThemeMode::Light);
        assert!(!state.is_dark());
        assert!(!state.follows_system());

        // Pinned: the system flipping back to dark is ignored.
        assert!(!state.system_changed(true));
        assert!(!state.is_dark());
    }

    #[test]
    fn follows_system_until_overridden() {
        let mut state = ThemeState::from_system(false);
        assert!(state.system_changed(true));
        assert!(state.is_dark());
        assert!(!state.system_changed(true));
    }

    #[test]
    fn set_mode_pins_override() {
        let mut state = ThemeState::from_system(false);
        state.set_mode(ThemeMode::Dark);
        assert!(state.is_dark());
        assert!(!state.system_changed(false));
        assert!(state.is_dark());
    }

    #[test]
    fn theme_mode_to_str() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }
}
