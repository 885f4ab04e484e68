//! Global keyboard shortcut matching.
//!
//! A [`KeyChord`] is the host-neutral snapshot of a keydown event. The
//! sidebar toggle fires on Ctrl or Cmd plus one letter, and never when Shift
//! or Alt is also held.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "shortcut_test.rs"]
mod shortcut_test;

/// Key plus modifier state of a single keydown event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyChord {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyChord {
    /// Chord with no modifiers held.
    pub fn plain(key: impl Into<String>) -> Self {
        Self { key: key.into(), ..Self::default() }
    }

    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    #[must_use]
    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    #[must_use]
    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }
}

/// `(Ctrl | Cmd) + key` with no Shift or Alt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    pub key: char,
}

impl Default for Shortcut {
    fn default() -> Self {
        Self { key: 'b' }
    }
}

impl Shortcut {
    #[must_use]
    pub fn new(key: char) -> Self {
        Self { key }
    }

    #[must_use]
    pub fn matches(&self, chord: &KeyChord) -> bool {
        if !(chord.ctrl || chord.meta) || chord.shift || chord.alt {
            return false;
        }
        let mut chars = chord.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.eq_ignore_ascii_case(&self.key),
            _ => false,
        }
    }

    /// Human-readable label, e.g. `Ctrl/Cmd + B`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Ctrl/Cmd + {}", self.key.to_ascii_uppercase())
    }
}
