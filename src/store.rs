//! Design-system preference store.
//!
//! DESIGN
//! ======
//! The store is an explicit value owned by one provider. It keeps the three
//! preference axes and a handle to the host color-scheme signal. The stored
//! theme is never resolved in place: [`DesignSystemStore::resolved_theme`]
//! consults the host on every call, so an OS-level switch is visible on the
//! next read without any setter running.

use std::fmt;
use std::sync::Arc;

use crate::config::ProviderOptions;
use crate::host::ColorSchemeSource;
use crate::prefs::{Density, Radius, ResolvedTheme, Theme, ThemePreferences};

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const DENSITY_ATTRIBUTE: &str = "data-density";
pub const RADIUS_ATTRIBUTE: &str = "data-radius";
pub const DENSITY_SCALE_PROPERTY: &str = "--density-scale";
pub const RADIUS_PROPERTY: &str = "--radius";

/// Session-scoped UI preferences for one mounted tree.
#[derive(Clone)]
pub struct DesignSystemStore {
    prefs: ThemePreferences,
    color_scheme: Arc<dyn ColorSchemeSource>,
}

impl DesignSystemStore {
    pub fn new(options: ProviderOptions, color_scheme: Arc<dyn ColorSchemeSource>) -> Self {
        let prefs = options.initial_preferences();
        tracing::debug!(
            theme = %prefs.theme,
            density = %prefs.density,
            radius = %prefs.radius,
            "design system store initialized"
        );
        Self { prefs, color_scheme }
    }

    /// Snapshot of all three axes.
    #[must_use]
    pub fn preferences(&self) -> ThemePreferences {
        self.prefs
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.prefs.theme
    }

    #[must_use]
    pub fn density(&self) -> Density {
        self.prefs.density
    }

    #[must_use]
    pub fn radius(&self) -> Radius {
        self.prefs.radius
    }

    /// Returns `true` when the value changed.
    pub fn set_theme(&mut self, theme: Theme) -> bool {
        replace_axis("theme", &mut self.prefs.theme, theme)
    }

    /// Returns `true` when the value changed.
    pub fn set_density(&mut self, density: Density) -> bool {
        replace_axis("density", &mut self.prefs.density, density)
    }

    /// Returns `true` when the value changed.
    pub fn set_radius(&mut self, radius: Radius) -> bool {
        replace_axis("radius", &mut self.prefs.radius, radius)
    }

    /// Theme to render right now.
    #[must_use]
    pub fn resolved_theme(&self) -> ResolvedTheme {
        match self.prefs.theme {
            Theme::System => Theme::System.resolve(self.color_scheme.prefers_dark()),
            explicit => explicit.resolve(false),
        }
    }

    /// `data-*` attributes describing the current rendering to the stylesheet.
    #[must_use]
    pub fn root_attributes(&self) -> [(&'static str, &'static str); 3] {
        [
            (THEME_ATTRIBUTE, self.resolved_theme().as_str()),
            (DENSITY_ATTRIBUTE, self.prefs.density.as_str()),
            (RADIUS_ATTRIBUTE, self.prefs.radius.as_str()),
        ]
    }

    /// CSS custom properties carrying the density and radius tokens.
    #[must_use]
    pub fn root_properties(&self) -> [(&'static str, &'static str); 2] {
        [
            (DENSITY_SCALE_PROPERTY, self.prefs.density.spacing_scale()),
            (RADIUS_PROPERTY, self.prefs.radius.css_value()),
        ]
    }
}

fn replace_axis<T>(axis: &'static str, slot: &mut T, next: T) -> bool
where
    T: Copy + PartialEq + fmt::Display,
{
    if *slot == next {
        return false;
    }
    tracing::debug!(%axis, from = %slot, to = %next, "preference changed");
    *slot = next;
    true
}

impl fmt::Debug for DesignSystemStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DesignSystemStore").field("prefs", &self.prefs).finish_non_exhaustive()
    }
}
