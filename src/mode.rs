//! The light/dark theme mode.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ThemeError;

/// The active theme mode.
///
/// There are exactly two values. The provider starts every mount in
/// [`ThemeMode::Light`] and only [`ThemeHandle::toggle`](crate::ThemeHandle::toggle)
/// moves between them.
///
/// # Example
///
/// ```rust
/// use portal_theme::ThemeMode;
///
/// assert_eq!(ThemeMode::default(), ThemeMode::Light);
/// assert_eq!(ThemeMode::Light.complement(), ThemeMode::Dark);
/// assert_eq!(ThemeMode::Dark.to_string(), "dark");
/// assert_eq!("LIGHT".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Returns the other mode.
    pub fn complement(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// The lowercase string written to the presentation attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Capitalized name, as used in control labels.
    pub fn title(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(ThemeError::UnknownMode(s.to_string())),
        }
    }
}
