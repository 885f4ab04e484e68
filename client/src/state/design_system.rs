//! Design-system preference context.
//!
//! DESIGN
//! ======
//! `DesignSystemContext` owns a [`DesignSystemStore`] inside an `RwSignal`.
//! Setters go through `maybe_update`, so re-setting the current value does
//! not wake subscribers. OS color-scheme changes do not touch the store;
//! they bump `scheme_epoch`, which every resolved-theme read tracks, and the
//! store then consults the host signal afresh.

use std::sync::Arc;

use design_system::host::ColorSchemeSource;
use design_system::{Density, DesignSystemError, DesignSystemStore, ProviderOptions, Radius, ResolvedTheme, Theme, ThemePreferences};
use leptos::prelude::*;

#[cfg(test)]
#[path = "design_system_test.rs"]
mod design_system_test;

const PROVIDER: &str = "DesignSystemProvider";

/// Read/write handle to the preference store of the enclosing provider.
#[derive(Clone, Copy)]
pub struct DesignSystemContext {
    store: RwSignal<DesignSystemStore>,
    scheme_epoch: RwSignal<u64>,
}

impl DesignSystemContext {
    pub fn new(options: ProviderOptions, color_scheme: Arc<dyn ColorSchemeSource>) -> Self {
        Self { store: RwSignal::new(DesignSystemStore::new(options, color_scheme)), scheme_epoch: RwSignal::new(0) }
    }

    pub fn preferences(&self) -> ThemePreferences {
        self.store.with(DesignSystemStore::preferences)
    }

    pub fn theme(&self) -> Theme {
        self.store.with(DesignSystemStore::theme)
    }

    pub fn density(&self) -> Density {
        self.store.with(DesignSystemStore::density)
    }

    pub fn radius(&self) -> Radius {
        self.store.with(DesignSystemStore::radius)
    }

    /// Theme to render now; re-runs when the OS scheme changes.
    pub fn resolved_theme(&self) -> ResolvedTheme {
        self.scheme_epoch.track();
        self.store.with(DesignSystemStore::resolved_theme)
    }

    pub fn root_attributes(&self) -> [(&'static str, &'static str); 3] {
        self.scheme_epoch.track();
        self.store.with(DesignSystemStore::root_attributes)
    }

    pub fn root_properties(&self) -> [(&'static str, &'static str); 2] {
        self.store.with(DesignSystemStore::root_properties)
    }

    pub fn set_theme(&self, theme: Theme) {
        self.store.maybe_update(|store| store.set_theme(theme));
    }

    pub fn set_density(&self, density: Density) {
        self.store.maybe_update(|store| store.set_density(density));
    }

    pub fn set_radius(&self, radius: Radius) {
        self.store.maybe_update(|store| store.set_radius(radius));
    }

    /// Host hook for the `prefers-color-scheme` change event.
    pub fn notify_color_scheme_changed(&self) {
        self.scheme_epoch.update(|epoch| *epoch = epoch.wrapping_add(1));
    }
}

/// Create the context and provide it to the current owner's subtree.
pub fn provide_design_system(options: ProviderOptions, color_scheme: Arc<dyn ColorSchemeSource>) -> DesignSystemContext {
    let context = DesignSystemContext::new(options, color_scheme);
    provide_context(context);
    context
}

/// Context of the enclosing `DesignSystemProvider`, or `MissingProvider`.
pub fn try_use_design_system() -> Result<DesignSystemContext, DesignSystemError> {
    use_context::<DesignSystemContext>().ok_or(DesignSystemError::MissingProvider { provider: PROVIDER })
}

/// Context of the enclosing `DesignSystemProvider`.
///
/// # Panics
/// When called outside a `DesignSystemProvider`; that is an integration bug.
pub fn use_design_system() -> DesignSystemContext {
    match try_use_design_system() {
        Ok(context) => context,
        Err(e) => panic!("{e}"),
    }
}
