//! Browser helpers behind the design-system ports.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module implements one host concern for the core crate: cookie
//! persistence, the OS color-scheme signal, window listeners, and the root
//! element attributes. All of them no-op outside `hydrate` so server
//! rendering and host tests stay deterministic.

pub mod color_scheme;
pub mod cookie;
pub mod listeners;
pub mod theme_root;
