//! Sidebar context for one `SidebarProvider` instance.
//!
//! The provider builds its context with [`provide_deferred_sidebar`] so the
//! server render and the hydrating client agree on the first frame. The
//! cookie and viewport are applied by [`SidebarContext::sync_with_host`]
//! once mounted.

use std::sync::Arc;

use design_system::host::PersistenceAdapter;
use design_system::shortcut::{KeyChord, Shortcut};
use design_system::{DesignSystemError, SidebarController, SidebarOptions, SidebarState, SidebarVisualState};
use leptos::prelude::*;

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

const PROVIDER: &str = "SidebarProvider";

/// Read/write handle to the enclosing sidebar's controller.
#[derive(Clone, Copy)]
pub struct SidebarContext {
    controller: RwSignal<SidebarController>,
}

impl SidebarContext {
    /// Context at `default_open` on a desktop viewport, ignoring host state.
    pub fn unrestored(options: SidebarOptions, persistence: Arc<dyn PersistenceAdapter>) -> Self {
        Self { controller: RwSignal::new(SidebarController::unrestored(options, persistence)) }
    }

    pub fn snapshot(&self) -> SidebarState {
        self.controller.with(SidebarController::snapshot)
    }

    /// `expanded` or `collapsed`.
    pub fn state(&self) -> SidebarVisualState {
        self.controller.with(SidebarController::visual_state)
    }

    pub fn open(&self) -> bool {
        self.controller.with(SidebarController::open)
    }

    pub fn open_mobile(&self) -> bool {
        self.controller.with(SidebarController::open_mobile)
    }

    pub fn is_mobile(&self) -> bool {
        self.controller.with(SidebarController::is_mobile)
    }

    pub fn shortcut(&self) -> Shortcut {
        self.controller.with_untracked(SidebarController::shortcut)
    }

    pub fn shortcut_enabled(&self) -> bool {
        self.controller.with_untracked(|c| c.options().shortcut_enabled)
    }

    pub fn set_open(&self, open: bool) {
        self.controller.update(|c| c.set_open(open));
    }

    pub fn update_open(&self, f: impl FnOnce(bool) -> bool) {
        self.controller.update(|c| c.update_open(f));
    }

    pub fn set_open_mobile(&self, open_mobile: bool) {
        self.controller.update(|c| c.set_open_mobile(open_mobile));
    }

    pub fn toggle_sidebar(&self) {
        self.controller.update(SidebarController::toggle);
    }

    /// Viewport resize input; only notifies when `is_mobile` flips.
    pub fn resize(&self, width: f64) {
        self.controller.maybe_update(|c| c.resize(width));
    }

    /// Apply the persisted `open` flag and the measured viewport. Notifies
    /// only when either changed.
    pub fn sync_with_host(&self, viewport_width: Option<f64>) {
        self.controller.maybe_update(|c| {
            let restored = c.restore();
            let resized = viewport_width.is_some_and(|width| c.resize(width));
            restored || resized
        });
    }

    /// Keydown input; `true` means the shortcut fired.
    pub fn handle_key(&self, chord: &KeyChord) -> bool {
        let mut handled = false;
        self.controller.maybe_update(|c| {
            handled = c.handle_key(chord);
            handled
        });
        handled
    }
}

/// Provide a context that has not read the cookie or viewport yet.
pub fn provide_deferred_sidebar(options: SidebarOptions, persistence: Arc<dyn PersistenceAdapter>) -> SidebarContext {
    let context = SidebarContext::unrestored(options, persistence);
    provide_context(context);
    context
}

/// Context of the enclosing `SidebarProvider`, or `MissingProvider`.
pub fn try_use_sidebar() -> Result<SidebarContext, DesignSystemError> {
    use_context::<SidebarContext>().ok_or(DesignSystemError::MissingProvider { provider: PROVIDER })
}

/// Context of the enclosing `SidebarProvider`.
///
/// # Panics
/// When called outside a `SidebarProvider`.
pub fn use_sidebar() -> SidebarContext {
    match try_use_sidebar() {
        Ok(context) => context,
        Err(e) => panic!("{e}"),
    }
}
