//=========================================================================
// Derived Store
//=========================================================================
//
// Read-only container computed from another readable container.
//
// Architecture:
//   source ──subscribe──> map(&S) ──set──> Writable<T> (private)
//                                              ↓
//                                   Derived subscribers
//
// Recomputation is eager: every source notification produces exactly one
// notification on the derived container. Dropping the last handle cancels
// the source subscription.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

//=== Internal Dependencies ===============================================

use super::{Readable, Subscription, Writable};

//=== Derived =============================================================

/// Read-only view over another container.
pub struct Derived<T> {
    output: Writable<T>,
    _source: Rc<Subscription>,
}

impl<T: Clone + 'static> Derived<T> {
    /// Creates a derived container from `source` using `map`.
    pub fn new<S, R, F>(source: &R, map: F) -> Self
    where
        S: 'static,
        R: Readable<S>,
        F: Fn(&S) -> T + 'static,
    {
        Self::named("derived", source, map)
    }

    /// Same as [`Derived::new`] with a label used in log output.
    pub fn named<S, R, F>(label: impl Into<String>, source: &R, map: F) -> Self
    where
        S: 'static,
        R: Readable<S>,
        F: Fn(&S) -> T + 'static,
    {
        let output = Writable::named(label, map(&source.get()));

        // The source calls back immediately on subscribe; that value is
        // already the seed above.
        let primed = Cell::new(false);
        let sink = output.clone();
        let subscription = source.subscribe(move |value: &S| {
            if primed.replace(true) {
                sink.set(map(value));
            }
        });

        Self {
            output,
            _source: Rc::new(subscription),
        }
    }

    /// Number of source notifications applied since creation.
    pub fn version(&self) -> u64 {
        self.output.version()
    }

    /// Label used in log output.
    pub fn label(&self) -> &str {
        self.output.label()
    }
}

impl<T: Clone + 'static> Readable<T> for Derived<T> {
    fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        self.output.subscribe(callback)
    }

    fn get(&self) -> T {
        self.output.get()
    }
}

impl<T> Clone for Derived<T> {
    fn clone(&self) -> Self {
        Self {
            output: self.output.clone(),
            _source: Rc::clone(&self._source),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Derived<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Derived").field(&self.output).finish()
    }
}

//=========================================================================
// Tests
//=========================================================================
