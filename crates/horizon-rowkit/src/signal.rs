//! Signal/slot plumbing for rowkit.
//!
//! A trimmed-down observer mechanism used to fan out converter and
//! refresh-controller notifications. Slots are invoked directly on the
//! emitting thread; everything in this crate runs synchronously on the
//! UI execution context, so there is no queued or cross-thread delivery.
//!
//! # Example
//!
//! ```
//! use horizon_rowkit::signal::Signal;
//!
//! let rows_reset = Signal::<usize>::new();
//! let id = rows_reset.connect(|count| {
//!     println!("now showing {count} rows");
//! });
//! rows_reset.emit(3);
//! rows_reset.disconnect(id);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific slot via [`Signal::disconnect`].
    pub struct ConnectionId;
}

/// A signal with directly-invoked slots.
///
/// When the signal is emitted, every connected slot is called immediately,
/// in connection order, with a reference to the emitted arguments.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for
///   signals with no arguments.
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Arc<dyn Fn(&Args) + Send + Sync>>>,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` do nothing. Useful during batch
    /// updates to suppress cascading notifications.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking every connected slot with `args`.
    ///
    /// Slots must not connect to or disconnect from this same signal while
    /// it is being emitted; the connection table is locked for the duration
    /// of the dispatch.
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: "horizon_rowkit::signal", "signal blocked, skipping emit");
            return;
        }

        let connections = self.connections.lock();
        tracing::trace!(
            target: "horizon_rowkit::signal",
            connection_count = connections.len(),
            "emitting signal"
        );
        for (_, slot) in connections.iter() {
            slot(&args);
        }
    }
}

impl<Args: 'static> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connections.lock().len())
            .field("blocked", &self.is_blocked())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_and_emit() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let recv = received.clone();
        signal.connect(move |n| recv.lock().push(*n));

        signal.emit(1);
        signal.emit(2);

        assert_eq!(*received.lock(), vec![1, 2]);
    }

    #[test]
    fn test_disconnect() {
        let signal = Signal::<()>::new();
        let count = Arc::new(Mutex::new(0));

        let c = count.clone();
        let id = signal.connect(move |_| *c.lock() += 1);
        assert_eq!(signal.connection_count(), 1);

        signal.emit(());
        assert!(signal.disconnect(id));
        assert!(!signal.disconnect(id));
        signal.emit(());

        assert_eq!(*count.lock(), 1);
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_blocked_emit_is_dropped() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let recv = received.clone();
        signal.connect(move |n| recv.lock().push(*n));

        signal.set_blocked(true);
        assert!(signal.is_blocked());
        signal.emit(41);

        signal.set_blocked(false);
        signal.emit(42);

        assert_eq!(*received.lock(), vec![42]);
    }

    #[test]
    fn test_multiple_slots_all_invoked() {
        let signal = Signal::<()>::new();
        let count = Arc::new(Mutex::new(0));

        for _ in 0..3 {
            let c = count.clone();
            signal.connect(move |_| *c.lock() += 1);
        }
        signal.emit(());

        assert_eq!(*count.lock(), 3);
    }
}
