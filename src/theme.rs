//! Light/dark theme toggle for the navbar.
//!
//! SYSTEM CONTEXT
//! ==============
//! The current theme lives outside the app (browser storage, OS preference)
//! and is reached through [`ThemeProvider`]. The navbar renders nothing until
//! it has been mounted, because the provider's value is not trustworthy
//! before then.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::Cell;

use crate::routes;

pub const BRAND: &str = "Custom Auth";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Read/write access to the externally stored theme.
pub trait ThemeProvider {
    /// Current theme, or `None` when nothing has been resolved yet.
    fn theme(&self) -> Option<Theme>;
    fn set_theme(&self, theme: Theme);
}

/// In-process provider, for hosts without persistent theme storage.
#[derive(Debug, Default)]
pub struct MemoryTheme {
    current: Cell<Option<Theme>>,
}

impl MemoryTheme {
    #[must_use]
    pub fn new(initial: Option<Theme>) -> Self {
        Self { current: Cell::new(initial) }
    }
}

impl ThemeProvider for MemoryTheme {
    fn theme(&self) -> Option<Theme> {
        self.current.get()
    }

    fn set_theme(&self, theme: Theme) {
        self.current.set(Some(theme));
    }
}

impl<P: ThemeProvider + ?Sized> ThemeProvider for &P {
    fn theme(&self) -> Option<Theme> {
        (**self).theme()
    }

    fn set_theme(&self, theme: Theme) {
        (**self).set_theme(theme);
    }
}

// =============================================================================
// NAVBAR
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    Sun,
    Moon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarView {
    pub brand: &'static str,
    pub home: &'static str,
    pub icon: ToggleIcon,
    /// Theme applied when the toggle is clicked.
    pub next_theme: Theme,
}

pub struct Navbar<P> {
    provider: P,
    mounted: bool,
}

impl<P: ThemeProvider> Navbar<P> {
    pub fn new(provider: P) -> Self {
        Self { provider, mounted: false }
    }

    pub fn mount(&mut self) {
        self.mounted = true;
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// What to render; `None` before mount.
    ///
    /// Dark shows a sun that switches to light. Light or unresolved shows a
    /// moon that switches to dark.
    #[must_use]
    pub fn view(&self) -> Option<NavbarView> {
        if !self.mounted {
            return None;
        }
        let (icon, next_theme) = match self.provider.theme() {
            Some(Theme::Dark) => (ToggleIcon::Sun, Theme::Light),
            Some(Theme::Light) | None => (ToggleIcon::Moon, Theme::Dark),
        };
        Some(NavbarView { brand: BRAND, home: routes::HOME, icon, next_theme })
    }

    /// Click the toggle. Returns the theme that was requested, or `None` if
    /// the navbar is not rendered yet.
    pub fn toggle(&self) -> Option<Theme> {
        let next = self.view()?.next_theme;
        tracing::debug!(theme = next.as_str(), "theme toggle");
        self.provider.set_theme(next);
        Some(next)
    }
}
