//! Error taxonomy for the preference core.
//!
//! Only integration mistakes surface as errors. Malformed persisted state
//! (foreign or corrupted cookies) is expected and handled by defaulting, so
//! it has no variant here.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors raised by the design-system core and its accessors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DesignSystemError {
    /// A context accessor ran outside the subtree of its provider.
    #[error("{provider} accessor used outside of its provider")]
    MissingProvider { provider: &'static str },

    /// A textual preference did not name a member of its axis.
    #[error("invalid {axis} preference: '{value}'")]
    InvalidPreference { axis: &'static str, value: String },
}

impl DesignSystemError {
    /// Build an [`InvalidPreference`](Self::InvalidPreference) for `axis`.
    pub fn invalid(axis: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidPreference { axis, value: value.into() }
    }
}
