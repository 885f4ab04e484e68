//! Provider-scoped client state.
//!
//! DESIGN
//! ======
//! Each context wraps one core state container in a Leptos signal and is
//! provided once per provider component. Accessor hooks fail loudly outside
//! their provider rather than inventing defaults.

pub mod design_system;
pub mod sidebar;
