//! Preference axes: theme, density, and corner radius.
//!
//! DESIGN
//! ======
//! Each axis is a closed enum with a default, so a [`ThemePreferences`] value
//! can never be partially initialised. Text forms are lowercase and shared by
//! serde, `FromStr`, and the `data-*` attributes written to the document root.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DesignSystemError;

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

// =============================================================================
// THEME
// =============================================================================

/// Color-scheme preference. `System` is stored unresolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// Concrete color scheme after `System` has been resolved against the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Resolve against the host's current dark-scheme signal.
    #[must_use]
    pub fn resolve(self, prefers_dark: bool) -> ResolvedTheme {
        match self {
            Self::Light => ResolvedTheme::Light,
            Self::Dark => ResolvedTheme::Dark,
            Self::System if prefers_dark => ResolvedTheme::Dark,
            Self::System => ResolvedTheme::Light,
        }
    }
}

impl ResolvedTheme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl FromStr for Theme {
    type Err = DesignSystemError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(DesignSystemError::invalid("theme", other)),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ResolvedTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// DENSITY
// =============================================================================

/// Spacing scale applied to component padding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Compact,
    #[default]
    Comfortable,
    Spacious,
}

impl Density {
    pub const ALL: [Self; 3] = [Self::Compact, Self::Comfortable, Self::Spacious];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Comfortable => "comfortable",
            Self::Spacious => "spacious",
        }
    }

    /// Multiplier for `--density-scale`; spacing tokens are `calc()`ed from it.
    #[must_use]
    pub fn spacing_scale(self) -> &'static str {
        match self {
            Self::Compact => "0.75",
            Self::Comfortable => "1",
            Self::Spacious => "1.25",
        }
    }
}

impl FromStr for Density {
    type Err = DesignSystemError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "compact" => Ok(Self::Compact),
            "comfortable" => Ok(Self::Comfortable),
            "spacious" => Ok(Self::Spacious),
            other => Err(DesignSystemError::invalid("density", other)),
        }
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// RADIUS
// =============================================================================

/// Border-corner rounding scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Radius {
    None,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl Radius {
    pub const ALL: [Self; 5] = [Self::None, Self::Sm, Self::Md, Self::Lg, Self::Xl];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    /// Value for the `--radius` custom property.
    #[must_use]
    pub fn css_value(self) -> &'static str {
        match self {
            Self::None => "0",
            Self::Sm => "0.25rem",
            Self::Md => "0.5rem",
            Self::Lg => "0.75rem",
            Self::Xl => "1rem",
        }
    }
}

impl FromStr for Radius {
    type Err = DesignSystemError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "none" => Ok(Self::None),
            "sm" => Ok(Self::Sm),
            "md" => Ok(Self::Md),
            "lg" => Ok(Self::Lg),
            "xl" => Ok(Self::Xl),
            other => Err(DesignSystemError::invalid("radius", other)),
        }
    }
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// SNAPSHOT
// =============================================================================

/// Current value of every preference axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePreferences {
    pub theme: Theme,
    pub density: Density,
    pub radius: Radius,
}
