//=========================================================================
// Writable Store
//=========================================================================
//
// Reactive container holding a single value.
//
// Architecture:
//   set(value) ──> RefCell<Rc<T>> (replace) ──> version += 1
//                                                  ↓
//        SubscriberList::snapshot() ──> pending: VecDeque<(subscriber, Rc<T>)>
//                                                  ↓
//                      outermost set() drains FIFO ──> callback(&value) ...
//
// Pattern: subscribe (immediate call) → set/update → queue → drain in order
//
// Notes:
// Single-threaded by construction (`Rc` + `RefCell`). No borrow is held
// while callbacks run, so a callback may read, subscribe, or even set the
// same store. A nested set only queues its notifications; the set already
// draining delivers them after the pending ones, so every subscriber sees
// values in set order. Unbounded re-entrant recursion is the caller's
// problem.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::subscriber_list::{Subscriber, SubscriberList};
use super::{Readable, Subscription};

//=== Shared State ========================================================

type Pending<T> = VecDeque<(Rc<Subscriber<T>>, Rc<T>)>;

struct Shared<T> {
    label: String,
    value: RefCell<Rc<T>>,
    subscribers: RefCell<SubscriberList<T>>,
    version: Cell<u64>,

    //--- Notification Queue ----------------------------------------------
    pending: RefCell<Pending<T>>,
    draining: Cell<bool>,
}

//=== DrainGuard ==========================================================

/// Clears the draining flag when the drain loop exits, including by a
/// panicking callback, so the store never stays stuck in queue-only mode.
struct DrainGuard<'a, T> {
    shared: &'a Shared<T>,
}

impl<T> Drop for DrainGuard<'_, T> {
    fn drop(&mut self) {
        self.shared.draining.set(false);
        if std::thread::panicking() {
            // Dropped outside the borrow: entries may own subscriptions.
            let leftover = std::mem::take(&mut *self.shared.pending.borrow_mut());
            drop(leftover);
        }
    }
}

//=== Writable ============================================================

/// A value container that notifies subscribers on every change.
///
/// Cloning a `Writable` produces another handle to the same container.
///
/// # Example
///
/// ```
/// use arcade_state::prelude::*;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let count = Writable::new(0);
/// let seen = Rc::new(RefCell::new(Vec::new()));
///
/// let sink = Rc::clone(&seen);
/// let sub = count.subscribe(move |v| sink.borrow_mut().push(*v));
///
/// count.set(1);
/// count.update(|v| v + 1);
/// sub.unsubscribe();
/// count.set(10);
///
/// assert_eq!(*seen.borrow(), vec![0, 1, 2]);
/// assert_eq!(count.get(), 10);
/// ```
pub struct Writable<T> {
    shared: Rc<Shared<T>>,
}

impl<T: Clone + 'static> Writable<T> {
    //--- Construction -----------------------------------------------------

    /// Creates a container seeded with `initial`. No validation is done.
    pub fn new(initial: T) -> Self {
        Self::named("store", initial)
    }

    /// Creates a container with a label used in log output.
    pub fn named(label: impl Into<String>, initial: T) -> Self {
        Self {
            shared: Rc::new(Shared {
                label: label.into(),
                value: RefCell::new(Rc::new(initial)),
                subscribers: RefCell::new(SubscriberList::new()),
                version: Cell::new(0),
                pending: RefCell::new(VecDeque::new()),
                draining: Cell::new(false),
            }),
        }
    }

    //--- Mutation ---------------------------------------------------------

    /// Replaces the held value and notifies every subscriber, in
    /// subscription order, with the new value.
    ///
    /// Called from inside a callback, the notifications are queued behind
    /// the ones still pending from the outer call.
    pub fn set(&self, value: T) {
        let value = Rc::new(value);
        let previous = self.shared.value.replace(Rc::clone(&value));
        drop(previous);

        let version = self.shared.version.get() + 1;
        self.shared.version.set(version);
        trace!("Store '{}' set (version {})", self.shared.label, version);

        self.enqueue(&value);
        self.drain();
    }

    /// Applies `f` to the current value and stores the result via [`set`].
    ///
    /// [`set`]: Writable::set
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        let current = self.current();
        self.set(f(&*current));
    }

    /// Mutates a copy of the current value in place, then stores it via
    /// [`set`]. Other fields are carried over untouched.
    ///
    /// [`set`]: Writable::set
    pub fn update_in_place<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        let mut next = self.get();
        f(&mut next);
        self.set(next);
    }

    //--- Observation ------------------------------------------------------

    /// Registers `callback`, calls it immediately with the current value,
    /// and again after every subsequent `set`/`update`.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        let current = self.current();
        let entry = self
            .shared
            .subscribers
            .borrow_mut()
            .insert(Box::new(callback));
        let id = entry.id();
        debug!("Store '{}' subscriber {} registered", self.shared.label, id);

        entry.notify(&current);

        let weak: Weak<Shared<T>> = Rc::downgrade(&self.shared);
        Subscription::new(
            id,
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    // Bound first so the entry drops after the RefMut: its
                    // callback may own a subscription to this same store.
                    let removed = shared.subscribers.borrow_mut().remove(id);
                    if removed.is_some() {
                        debug!("Store '{}' subscriber {} removed", shared.label, id);
                    }
                    drop(removed);
                }
            }),
        )
    }

    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        (*self.current()).clone()
    }

    //--- Query API --------------------------------------------------------

    /// Label used in log output (`"store"` unless created with [`named`]).
    ///
    /// [`named`]: Writable::named
    pub fn label(&self) -> &str {
        &self.shared.label
    }

    /// Number of `set`/`update` applications since creation.
    pub fn version(&self) -> u64 {
        self.shared.version.get()
    }

    /// Number of currently registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.shared.subscribers.borrow().len()
    }

    //--- Internal Helpers -------------------------------------------------

    fn current(&self) -> Rc<T> {
        Rc::clone(&self.shared.value.borrow())
    }

    fn enqueue(&self, value: &Rc<T>) {
        let snapshot = self.shared.subscribers.borrow().snapshot();
        let mut pending = self.shared.pending.borrow_mut();
        for subscriber in snapshot {
            pending.push_back((subscriber, Rc::clone(value)));
        }
    }

    /// Delivers queued notifications in FIFO order. A no-op when an outer
    /// call is already draining.
    fn drain(&self) {
        if self.shared.draining.replace(true) {
            return;
        }
        let _guard = DrainGuard {
            shared: &*self.shared,
        };

        loop {
            let next = self.shared.pending.borrow_mut().pop_front();
            let Some((subscriber, value)) = next else {
                break;
            };
            subscriber.notify(&value);
        }
    }
}

impl<T: Clone + 'static> Readable<T> for Writable<T> {
    fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        Writable::subscribe(self, callback)
    }

    fn get(&self) -> T {
        Writable::get(self)
    }
}

impl<T> Clone for Writable<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<T: Default + Clone + 'static> Default for Writable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Writable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Writable")
            .field("label", &self.shared.label)
            .field("value", &**self.shared.value.borrow())
            .field("version", &self.shared.version.get())
            .field("subscribers", &self.shared.subscribers.borrow().len())
            .finish()
    }
}

//=========================================================================
// Tests
//=========================================================================
