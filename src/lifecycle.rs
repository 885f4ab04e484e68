//! Scoped ownership of host event listeners.
//!
//! A provider registers its resize, keydown, and color-scheme listeners once
//! and must remove them when it is torn down. Each registration is wrapped in
//! a [`ScopedListener`] whose release closure runs exactly once, either
//! explicitly or on drop; a [`ListenerScope`] owns all of a provider's
//! listeners and releases them together.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

type Release = Box<dyn FnOnce() + Send + Sync>;

/// One registered listener. Dropping it deregisters it.
pub struct ScopedListener {
    label: &'static str,
    release: Option<Release>,
}

impl ScopedListener {
    pub fn new(label: &'static str, release: impl FnOnce() + Send + Sync + 'static) -> Self {
        tracing::trace!(%label, "listener acquired");
        Self { label, release: Some(Box::new(release)) }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Deregister now instead of at drop.
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            tracing::trace!(label = %self.label, "listener released");
            release();
        }
    }
}

impl Drop for ScopedListener {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl std::fmt::Debug for ScopedListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedListener")
            .field("label", &self.label)
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// All listeners owned by one provider instance.
#[derive(Debug, Default)]
pub struct ListenerScope {
    listeners: Vec<ScopedListener>,
}

impl ListenerScope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, listener: ScopedListener) {
        self.listeners.push(listener);
    }

    /// Add a listener when the host managed to register one.
    pub fn push_some(&mut self, listener: Option<ScopedListener>) {
        if let Some(listener) = listener {
            self.push(listener);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Release every listener, most recently acquired first.
    pub fn release_all(&mut self) {
        while let Some(listener) = self.listeners.pop() {
            listener.release();
        }
    }
}

impl Drop for ListenerScope {
    fn drop(&mut self) {
        self.release_all();
    }
}
