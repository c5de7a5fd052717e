//=========================================================================
// Channel Bridge
//=========================================================================
//
// Forwards every value a container publishes into a crossbeam channel.
//
// Architecture:
//   Readable<T> ──subscribe──> forwarder ──try_send──> Sender<T>
//                                                        ↓
//                              consumer (e.g. renderer) ← Receiver<T>
//
// Lets a consumer drain state snapshots at its own pace (once per frame,
// or on another thread when T: Send) instead of reacting inside the
// notification callback.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::Cell;

use crossbeam_channel::{bounded, unbounded, Receiver, Sender, TrySendError};
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::{Readable, Subscription};

//=== Public API ==========================================================

/// Forwards all values from `store` into an unbounded channel.
///
/// The first value received is the store's current value. Nothing is ever
/// dropped while the receiver is alive.
///
/// ```
/// use arcade_state::prelude::*;
/// use arcade_state::core::store::bridge;
///
/// let score = Writable::new(0u32);
/// let (_sub, rx) = bridge::channel(&score);
///
/// score.set(5);
/// score.set(8);
///
/// let drained: Vec<u32> = rx.try_iter().collect();
/// assert_eq!(drained, vec![0, 5, 8]);
/// ```
pub fn channel<T, R>(store: &R) -> (Subscription, Receiver<T>)
where
    T: Clone + 'static,
    R: Readable<T>,
{
    let (tx, rx) = unbounded();
    (store.subscribe(forwarder(tx)), rx)
}

/// Forwards values from `store` into a channel holding at most `capacity`
/// pending values. When full, the newest value is dropped and a warning is
/// logged.
///
/// # Panics
///
/// Panics if `capacity == 0`.
pub fn bounded_channel<T, R>(store: &R, capacity: usize) -> (Subscription, Receiver<T>)
where
    T: Clone + 'static,
    R: Readable<T>,
{
    assert!(capacity > 0, "Channel capacity must be positive");
    let (tx, rx) = bounded(capacity);
    (store.subscribe(forwarder(tx)), rx)
}

//=== Internal Helpers ====================================================

fn forwarder<T: Clone + 'static>(tx: Sender<T>) -> impl Fn(&T) + 'static {
    let disconnected = Cell::new(false);

    move |value: &T| {
        if disconnected.get() {
            return;
        }

        match tx.try_send(value.clone()) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                warn!("Channel backlog: dropped value (capacity {:?})", tx.capacity());
            }
            Err(TrySendError::Disconnected(_)) => {
                disconnected.set(true);
                debug!("Channel receiver dropped, forwarding stopped");
            }
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
