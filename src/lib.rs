//! # design-system
//!
//! Framework-free state core for the design-system providers: the UI
//! preference store (theme, density, radius) and the sidebar open/collapsed
//! state machine, plus the host ports they talk to.
//!
//! ARCHITECTURE
//! ============
//! Every type here is a plain value owned by exactly one provider instance.
//! The `client` crate wraps them in Leptos signals and wires the browser
//! (cookies, `matchMedia`, window listeners) to the ports in [`host`] and
//! [`lifecycle`]. Nothing in this crate touches a browser API, so the state
//! machines are testable on the host.

pub mod chart;
pub mod config;
pub mod cookie;
pub mod error;
pub mod host;
pub mod lifecycle;
pub mod prefs;
pub mod shortcut;
pub mod sidebar;
pub mod store;

pub use config::{ProviderOptions, SidebarOptions};
pub use error::DesignSystemError;
pub use prefs::{Density, Radius, ResolvedTheme, Theme, ThemePreferences};
pub use sidebar::{SidebarController, SidebarState, SidebarVisualState};
pub use store::DesignSystemStore;
