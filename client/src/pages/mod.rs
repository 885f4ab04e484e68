//! Route-level page components.

pub mod catalog;
pub mod dashboard;
pub mod dashboard_data;
