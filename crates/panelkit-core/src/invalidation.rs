//! Parameter-change notification.
//!
//! Panels never decide when layout runs. When a strategy parameter changes
//! they notify their listeners with the kind of pass the host must repeat;
//! the host schedules it.

use std::fmt;

/// Which layout pass a parameter change invalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Invalidation {
    /// Natural size may have changed: re-run measure, then arrange
    Measure,
    /// Only placement changed: re-run arrange
    Arrange,
}

impl Invalidation {
    /// Whether the host must repeat the measure pass.
    #[must_use]
    pub const fn requires_measure(self) -> bool {
        matches!(self, Self::Measure)
    }
}

/// Receiver of invalidation notifications.
pub trait InvalidationListener: Send + Sync {
    /// Called after a parameter changed.
    fn invalidated(&self, kind: Invalidation);
}

impl<F> InvalidationListener for F
where
    F: Fn(Invalidation) + Send + Sync,
{
    fn invalidated(&self, kind: Invalidation) {
        self(kind);
    }
}

/// Listener registry owned by each panel.
#[derive(Default)]
pub struct Invalidator {
    listeners: Vec<Box<dyn InvalidationListener>>,
}

impl Invalidator {
    /// Create a registry with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    pub fn subscribe<L>(&mut self, listener: L)
    where
        L: InvalidationListener + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Notify every listener.
    pub fn notify(&self, kind: Invalidation) {
        tracing::trace!(?kind, listeners = self.listeners.len(), "layout invalidated");
        for listener in &self.listeners {
            listener.invalidated(kind);
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl Clone for Invalidator {
    fn clone(&self) -> Self {
        // Listeners belong to the original panel instance.
        Self::new()
    }
}

impl fmt::Debug for Invalidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invalidator")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
