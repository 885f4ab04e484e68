//! Ports to the host environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! The core never reads cookies or media queries directly. Providers are
//! handed a [`PersistenceAdapter`] and a [`ColorSchemeSource`]; the browser
//! client implements them with `web-sys`, tests and server rendering use the
//! in-memory versions below.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is fire-and-forget. A disabled or failing store degrades
//! cross-session memory only; in-session state keeps working.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

/// Key/value persistence for small UI flags.
pub trait PersistenceAdapter: Send + Sync {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// Host signal for the OS-level dark color-scheme preference.
pub trait ColorSchemeSource: Send + Sync {
    fn prefers_dark(&self) -> bool;
}

// =============================================================================
// IN-MEMORY PERSISTENCE
// =============================================================================

/// Map-backed persistence. Clones share the same storage, which lets a test
/// "remount" a provider against what the previous one wrote.
#[derive(Clone, Debug, Default)]
pub struct MemoryPersistence {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryPersistence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.save(key, value);
        store
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self.entries.lock() {
            Ok(entries) => entries.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PersistenceAdapter for MemoryPersistence {
    fn load(&self, key: &str) -> Option<String> {
        match self.entries.lock() {
            Ok(entries) => entries.get(key).cloned(),
            Err(poisoned) => poisoned.into_inner().get(key).cloned(),
        }
    }

    fn save(&self, key: &str, value: &str) {
        match self.entries.lock() {
            Ok(mut entries) => entries.insert(key.to_owned(), value.to_owned()),
            Err(poisoned) => poisoned.into_inner().insert(key.to_owned(), value.to_owned()),
        };
    }
}

/// Persistence that stores nothing, for hosts where storage is unavailable.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPersistence;

impl PersistenceAdapter for NullPersistence {
    fn load(&self, _key: &str) -> Option<String> {
        None
    }

    fn save(&self, key: &str, _value: &str) {
        tracing::trace!(%key, "persistence disabled; dropping write");
    }
}

// =============================================================================
// FIXED COLOR SCHEME
// =============================================================================

/// Settable color-scheme signal. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct FixedColorScheme {
    dark: Arc<AtomicBool>,
}

impl FixedColorScheme {
    #[must_use]
    pub fn new(dark: bool) -> Self {
        Self { dark: Arc::new(AtomicBool::new(dark)) }
    }

    pub fn set_dark(&self, dark: bool) {
        self.dark.store(dark, Ordering::Relaxed);
    }
}

impl ColorSchemeSource for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.dark.load(Ordering::Relaxed)
    }
}
