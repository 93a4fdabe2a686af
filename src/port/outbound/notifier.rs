//! Observer port for outcome notifications.
//!
//! A trigger exposes one [`ObserverRegistry`] per notice type. Observers are
//! invoked synchronously, in subscription order, for every notice emitted.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

/// Trait for notice handlers.
///
/// Any `Fn(&N) + Send + Sync` closure is an observer.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - `notify` runs on the thread that delivered the tick; it should not block
pub trait Observer<N>: Send + Sync {
    /// Handle a notice.
    fn notify(&self, notice: &N);
}

impl<N, F> Observer<N> for F
where
    F: Fn(&N) + Send + Sync,
{
    fn notify(&self, notice: &N) {
        self(notice);
    }
}

/// Handle returned by [`ObserverRegistry::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Get the underlying value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

type Entry<N> = (SubscriptionId, Arc<dyn Observer<N>>);

/// Registry of observers (composite pattern).
///
/// Broadcasts notices to all subscribed observers. Delivery works on a
/// snapshot of the subscriber list taken when the notice is emitted, so
/// observers added or removed during delivery (including by an observer
/// itself) only affect later notices.
pub struct ObserverRegistry<N> {
    observers: RwLock<Vec<Entry<N>>>,
    next_id: AtomicU64,
}

impl<N> ObserverRegistry<N> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Subscribe an observer.
    pub fn subscribe<O>(&self, observer: O) -> SubscriptionId
    where
        O: Observer<N> + 'static,
    {
        self.subscribe_shared(Arc::new(observer))
    }

    /// Subscribe an observer that is already shared elsewhere.
    pub fn subscribe_shared(&self, observer: Arc<dyn Observer<N>>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.observers.write().push((id, observer));
        id
    }

    /// Remove a subscription. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.write();
        match observers.iter().position(|(sub, _)| *sub == id) {
            Some(index) => {
                observers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Notify all subscribed observers.
    pub fn notify_all(&self, notice: &N) {
        let snapshot: Vec<Arc<dyn Observer<N>>> = self
            .observers
            .read()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();

        for observer in snapshot {
            observer.notify(notice);
        }
    }

    /// Number of subscribed observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.read().len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.read().is_empty()
    }
}

impl<N> Default for ObserverRegistry<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> fmt::Debug for ObserverRegistry<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.len())
            .finish()
    }
}

/// A no-op observer for when notifications are disabled.
pub struct NullObserver;

impl<N> Observer<N> for NullObserver {
    fn notify(&self, _notice: &N) {}
}
