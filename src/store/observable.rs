//! Observable store — an owned value plus broadcast fan-out of snapshots.

use tokio::sync::broadcast;
use tracing::debug;

/// Default broadcast channel capacity.
const DEFAULT_BROADCAST_CAPACITY: usize = 64;

/// A mutable value whose every change is pushed to subscribers.
///
/// The store itself is not synchronized: the owner serializes mutations
/// (one UI event at a time), while subscribers may live on other tasks and
/// receive cloned snapshots through a broadcast channel.
pub struct Store<T> {
    value: T,
    tx: broadcast::Sender<T>,
}

impl<T: Clone> Store<T> {
    /// Create a store holding `value`.
    pub fn new(value: T) -> Self {
        let (tx, _rx) = broadcast::channel(DEFAULT_BROADCAST_CAPACITY);
        Self { value, tx }
    }

    /// Borrow the current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Clone the current value.
    pub fn snapshot(&self) -> T {
        self.value.clone()
    }

    /// Mutate the value in place, then notify subscribers.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let out = f(&mut self.value);
        self.notify();
        out
    }

    /// Subscribe to snapshots published after each mutation.
    pub fn subscribe(&self) -> broadcast::Receiver<T> {
        self.tx.subscribe()
    }

    /// Publish the current value. Returns how many subscribers received it.
    pub fn notify(&self) -> usize {
        // No receivers is fine: nobody is watching this session yet
        match self.tx.send(self.value.clone()) {
            Ok(n) => n,
            Err(_) => {
                debug!("Store notified with no subscribers");
                0
            }
        }
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl<T: Clone + Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("value", &self.value)
            .field("subscribers", &self.tx.receiver_count())
            .finish()
    }
}
