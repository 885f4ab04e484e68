//! Construction-time options for the providers.
//!
//! Options can be built in code, deserialized from JSON (camelCase keys, all
//! optional), or read from environment variables. Every missing field falls
//! back to its axis default independently.

use serde::{Deserialize, Serialize};

use crate::error::DesignSystemError;
use crate::prefs::{Density, Radius, Theme, ThemePreferences};
use crate::shortcut::Shortcut;

pub const ENV_DEFAULT_THEME: &str = "DESIGN_SYSTEM_DEFAULT_THEME";
pub const ENV_DEFAULT_DENSITY: &str = "DESIGN_SYSTEM_DEFAULT_DENSITY";
pub const ENV_DEFAULT_RADIUS: &str = "DESIGN_SYSTEM_DEFAULT_RADIUS";

/// Viewport widths strictly below this are treated as mobile.
pub const DEFAULT_MOBILE_BREAKPOINT_PX: u32 = 768;

// =============================================================================
// DESIGN SYSTEM PROVIDER
// =============================================================================

/// Options accepted when the design-system provider is constructed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderOptions {
    pub default_theme: Option<Theme>,
    pub default_density: Option<Density>,
    pub default_radius: Option<Radius>,
}

impl ProviderOptions {
    /// Read options from the process environment.
    ///
    /// Optional:
    /// - `DESIGN_SYSTEM_DEFAULT_THEME`: `light`, `dark`, or `system`
    /// - `DESIGN_SYSTEM_DEFAULT_DENSITY`: `compact`, `comfortable`, or `spacious`
    /// - `DESIGN_SYSTEM_DEFAULT_RADIUS`: `none`, `sm`, `md`, `lg`, or `xl`
    pub fn from_env() -> Result<Self, DesignSystemError> {
        Self::from_lookup(env_var)
    }

    /// Build options from an arbitrary key lookup. Unset keys keep the
    /// fallback; set but unparseable keys fail.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DesignSystemError> {
        Ok(Self {
            default_theme: lookup(ENV_DEFAULT_THEME).map(|raw| raw.parse::<Theme>()).transpose()?,
            default_density: lookup(ENV_DEFAULT_DENSITY).map(|raw| raw.parse::<Density>()).transpose()?,
            default_radius: lookup(ENV_DEFAULT_RADIUS).map(|raw| raw.parse::<Radius>()).transpose()?,
        })
    }

    /// Parse options from JSON such as `{"defaultTheme":"dark"}`.
    pub fn from_json(raw: &str) -> Result<Self, DesignSystemError> {
        serde_json::from_str(raw).map_err(|e| DesignSystemError::invalid("options", e.to_string()))
    }

    /// Initial preferences with each omitted axis defaulted.
    #[must_use]
    pub fn initial_preferences(&self) -> ThemePreferences {
        ThemePreferences {
            theme: self.default_theme.unwrap_or_default(),
            density: self.default_density.unwrap_or_default(),
            radius: self.default_radius.unwrap_or_default(),
        }
    }
}

fn env_var(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(value) => Some(value),
        Err(_) => None,
    }
}

// =============================================================================
// SIDEBAR PROVIDER
// =============================================================================

/// Options accepted when a sidebar provider is constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SidebarOptions {
    /// Desktop open state used when no valid cookie is present.
    pub default_open: bool,
    pub mobile_breakpoint_px: u32,
    pub shortcut: Shortcut,
    /// Off for sidebars nested inside another provider, so one keystroke
    /// toggles only the outer sidebar.
    pub shortcut_enabled: bool,
}

impl Default for SidebarOptions {
    fn default() -> Self {
        Self {
            default_open: true,
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT_PX,
            shortcut: Shortcut::default(),
            shortcut_enabled: true,
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
