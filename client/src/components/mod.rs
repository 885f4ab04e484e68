//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Providers own state and host listeners; every other component is a thin
//! view over a context from `state` or over plain props.

pub mod badge;
pub mod button;
pub mod chart;
pub mod design_system_provider;
pub mod sidebar;
pub mod theme_switcher;
