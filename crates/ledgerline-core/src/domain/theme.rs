//! Theme preference
//!
//! The app persists a single appearance flag alongside the expense
//! collection. The stored value is the literal string `dark` or `light`;
//! any other stored value reads back as light.

use std::fmt;

/// User's appearance preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parses the stored wire value. Only the exact string `dark` selects
    /// the dark theme.
    pub fn from_wire(raw: &str) -> Self {
        if raw == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Returns the wire-format string form
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
