//=========================================================================
// Subscriber List
//=========================================================================
//
// Ordered registry of subscriber callbacks for a single container.
//
// Architecture:
//   insert() → Vec<Rc<Subscriber<T>>> (registration order)
//                     ↓
//   snapshot() → notify cycle (no borrow held while callbacks run)
//                     ↓
//   remove() → entry deactivated, returned to the caller to drop
//
// Deactivation is visible to an in-flight snapshot, so a subscriber
// cancelled mid-cycle is skipped for the rest of that cycle.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

//=== SubscriberId ========================================================

/// Identifies one registration on one container.
///
/// Ids are assigned in increasing order and never reused within a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

//=== Subscriber ==========================================================

/// A registered callback plus its liveness flag.
pub(super) struct Subscriber<T> {
    id: SubscriberId,
    active: Cell<bool>,
    callback: Box<dyn Fn(&T)>,
}

impl<T> Subscriber<T> {
    pub(super) fn id(&self) -> SubscriberId {
        self.id
    }

    /// Invokes the callback unless the subscriber has been cancelled.
    pub(super) fn notify(&self, value: &T) {
        if self.active.get() {
            (self.callback)(value);
        }
    }
}

//=== SubscriberList ======================================================

pub(super) struct SubscriberList<T> {
    entries: Vec<Rc<Subscriber<T>>>,
    next_id: u64,
}

impl<T> SubscriberList<T> {
    /// Creates an empty list.
    pub(super) fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Appends a callback and returns its entry.
    pub(super) fn insert(&mut self, callback: Box<dyn Fn(&T)>) -> Rc<Subscriber<T>> {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;

        let entry = Rc::new(Subscriber {
            id,
            active: Cell::new(true),
            callback,
        });
        self.entries.push(Rc::clone(&entry));
        entry
    }

    /// Deactivates and removes a subscriber, handing the entry back.
    ///
    /// The caller drops it once the list is no longer borrowed: the
    /// callback may own a subscription that cancels against this list.
    pub(super) fn remove(&mut self, id: SubscriberId) -> Option<Rc<Subscriber<T>>> {
        let pos = self.entries.iter().position(|s| s.id == id)?;
        let entry = self.entries.remove(pos);
        entry.active.set(false);
        Some(entry)
    }

    /// Returns the current subscribers in registration order.
    ///
    /// Cheap `Rc` clones; the caller iterates the snapshot without
    /// borrowing the list, so callbacks may subscribe or set re-entrantly.
    pub(super) fn snapshot(&self) -> Vec<Rc<Subscriber<T>>> {
        self.entries.clone()
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<T> Default for SubscriberList<T> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Tests
//=========================================================================
