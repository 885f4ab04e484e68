//! Sidebar open/collapsed state machine.
//!
//! ARCHITECTURE
//! ============
//! Two independent axes: the desktop `open` flag (expanded/collapsed) and the
//! mobile drawer `open_mobile` flag. `is_mobile` is derived from the viewport
//! width and decides which axis [`SidebarController::toggle`] flips and which
//! one the layout renders.
//!
//! Only `open` is persisted. It is read from the sidebar cookie by
//! [`SidebarController::restore`] and written back on every `set_open`,
//! including those issued by `toggle` and the keyboard shortcut.
//!
//! [`SidebarController::new`] restores and measures immediately. A
//! server-rendered host uses [`SidebarController::unrestored`] instead, so
//! server and client start from identical state, and applies `restore` and
//! `resize` once the client has mounted.
//!
//! TRADE-OFFS
//! ==========
//! `resize` recomputes `is_mobile` on every raw host event with no debounce.
//! Each call is a single comparison, and hosts that need throttling can do
//! it before calling in.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::SidebarOptions;
use crate::cookie::{SIDEBAR_COOKIE_NAME, encode_open_state, parse_open_state};
use crate::host::PersistenceAdapter;
use crate::shortcut::{KeyChord, Shortcut};

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

/// Desktop rendering state, exposed as `data-state` on the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarVisualState {
    Expanded,
    Collapsed,
}

impl SidebarVisualState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expanded => "expanded",
            Self::Collapsed => "collapsed",
        }
    }
}

/// Snapshot of one sidebar instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarState {
    pub open: bool,
    pub open_mobile: bool,
    pub is_mobile: bool,
}

impl SidebarState {
    #[must_use]
    pub fn visual_state(&self) -> SidebarVisualState {
        if self.open { SidebarVisualState::Expanded } else { SidebarVisualState::Collapsed }
    }
}

/// `true` when `width` falls below the mobile breakpoint.
#[must_use]
pub fn is_mobile_width(width: f64, breakpoint_px: u32) -> bool {
    width < f64::from(breakpoint_px)
}

/// State machine for one sidebar provider.
#[derive(Clone)]
pub struct SidebarController {
    options: SidebarOptions,
    open: bool,
    open_mobile: bool,
    is_mobile: bool,
    persistence: Arc<dyn PersistenceAdapter>,
}

impl SidebarController {
    /// Build a controller, restoring `open` from persistence when the stored
    /// value is exactly `"true"` or `"false"`.
    pub fn new(options: SidebarOptions, persistence: Arc<dyn PersistenceAdapter>, viewport_width: Option<f64>) -> Self {
        let mut controller = Self::unrestored(options, persistence);
        controller.restore();
        if let Some(width) = viewport_width {
            controller.resize(width);
        }
        tracing::debug!(open = controller.open, is_mobile = controller.is_mobile, "sidebar controller initialized");
        controller
    }

    /// Controller at `default_open` on a desktop viewport, without consulting
    /// persistence or the host.
    pub fn unrestored(options: SidebarOptions, persistence: Arc<dyn PersistenceAdapter>) -> Self {
        Self { options, open: options.default_open, open_mobile: false, is_mobile: false, persistence }
    }

    /// Re-read `open` from persistence without writing it back. Returns
    /// `true` when the flag changed.
    pub fn restore(&mut self) -> bool {
        let open = restore_open(self.persistence.as_ref(), self.options.default_open);
        if open == self.open {
            return false;
        }
        tracing::debug!(open, "sidebar open restored");
        self.open = open;
        true
    }

    #[must_use]
    pub fn snapshot(&self) -> SidebarState {
        SidebarState { open: self.open, open_mobile: self.open_mobile, is_mobile: self.is_mobile }
    }

    #[must_use]
    pub fn open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn open_mobile(&self) -> bool {
        self.open_mobile
    }

    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    #[must_use]
    pub fn visual_state(&self) -> SidebarVisualState {
        self.snapshot().visual_state()
    }

    #[must_use]
    pub fn shortcut(&self) -> Shortcut {
        self.options.shortcut
    }

    #[must_use]
    pub fn options(&self) -> &SidebarOptions {
        &self.options
    }

    /// Set the desktop flag and persist it.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
        self.persistence.save(SIDEBAR_COOKIE_NAME, encode_open_state(open));
        tracing::debug!(open, "sidebar open set");
    }

    /// Functional form of [`set_open`](Self::set_open).
    pub fn update_open(&mut self, f: impl FnOnce(bool) -> bool) {
        let next = f(self.open);
        self.set_open(next);
    }

    pub fn set_open_mobile(&mut self, open_mobile: bool) {
        self.open_mobile = open_mobile;
        tracing::debug!(open_mobile, "sidebar mobile drawer set");
    }

    pub fn update_open_mobile(&mut self, f: impl FnOnce(bool) -> bool) {
        let next = f(self.open_mobile);
        self.set_open_mobile(next);
    }

    /// Flip whichever axis is live for the current viewport.
    pub fn toggle(&mut self) {
        if self.is_mobile {
            self.update_open_mobile(|open| !open);
        } else {
            self.update_open(|open| !open);
        }
    }

    /// Recompute `is_mobile` for a new viewport width. Returns `true` when
    /// the flag changed.
    pub fn resize(&mut self, width: f64) -> bool {
        let is_mobile = is_mobile_width(width, self.options.mobile_breakpoint_px);
        if is_mobile == self.is_mobile {
            return false;
        }
        tracing::debug!(is_mobile, width, "sidebar viewport mode changed");
        self.is_mobile = is_mobile;
        true
    }

    /// Toggle when `chord` is the sidebar shortcut and the shortcut is
    /// enabled. A `true` return means the host must suppress the browser's
    /// default handling.
    pub fn handle_key(&mut self, chord: &KeyChord) -> bool {
        if !self.options.shortcut_enabled || !self.options.shortcut.matches(chord) {
            return false;
        }
        self.toggle();
        true
    }
}

fn restore_open(persistence: &dyn PersistenceAdapter, default_open: bool) -> bool {
    let Some(raw) = persistence.load(SIDEBAR_COOKIE_NAME) else {
        return default_open;
    };
    match parse_open_state(&raw) {
        Some(open) => open,
        None => {
            tracing::debug!(value = %raw, "ignoring unrecognized sidebar cookie");
            default_open
        }
    }
}

impl fmt::Debug for SidebarController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SidebarController")
            .field("options", &self.options)
            .field("state", &self.snapshot())
            .finish_non_exhaustive()
    }
}
