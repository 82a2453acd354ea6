//! Light/dark theme context
//!
//! Owned by the host and passed to whatever renders the header. Before the
//! host reports `mounted` the resolved theme is unknown: the toggle shows a
//! neutral icon and does nothing.

use serde::{Deserialize, Serialize};

/// Theme the user asked for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

/// Theme actually in effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeContext {
    preference: ThemePreference,
    /// Theme reported by the OS, if known
    system: Option<Theme>,
    mounted: bool,
}

impl ThemeContext {
    pub fn new(preference: ThemePreference) -> Self {
        Self {
            preference,
            ..Default::default()
        }
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn set_preference(&mut self, preference: ThemePreference) {
        self.preference = preference;
    }

    pub fn set_system_theme(&mut self, theme: Option<Theme>) {
        self.system = theme;
    }

    /// Called once the host can read the real theme
    pub fn mount(&mut self) {
        self.mounted = true;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Theme in effect, `None` until mounted. Falls back to light when the
    /// system theme is unknown.
    pub fn current(&self) -> Option<Theme> {
        if !self.mounted {
            return None;
        }
        let resolved = match self.preference {
            ThemePreference::Light => Theme::Light,
            ThemePreference::Dark => Theme::Dark,
            ThemePreference::System => self.system.unwrap_or(Theme::Light),
        };
        Some(resolved)
    }

    pub fn is_dark(&self) -> bool {
        self.current() == Some(Theme::Dark)
    }

    pub fn icon(&self) -> &'static str {
        match self.current() {
            None => "🌗",
            Some(Theme::Dark) => "☀️",
            Some(Theme::Light) => "🌙",
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        match self.current() {
            None => "테마 전환",
            Some(Theme::Dark) => "라이트 모드로 전환",
            Some(Theme::Light) => "다크 모드로 전환",
        }
    }

    /// Switch to the opposite of the current theme as an explicit
    /// preference. No-op until mounted.
    pub fn toggle(&mut self) {
        let Some(current) = self.current() else {
            return;
        };
        self.preference = match current.opposite() {
            Theme::Light => ThemePreference::Light,
            Theme::Dark => ThemePreference::Dark,
        };
        log::debug!("Theme switched to {:?}", self.preference);
    }
}
