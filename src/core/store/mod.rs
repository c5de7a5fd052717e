//=========================================================================
// Store System
//=========================================================================
//
// Reactive state containers with explicit subscribe/notify.
//
// Architecture:
//   Writable<T>  ── set()/update() ──> subscribers (in order)
//        │
//        ├─> Derived<U>  (read-only, recomputed from the source)
//        └─> bridge::channel()  (forwards values to a crossbeam Receiver)
//
// All containers are single-threaded (`Rc`). The only thread-crossing
// surface is the Receiver handed out by the bridge.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod bridge;
mod derived;
mod subscriber_list;
mod subscription;
mod writable;

//=== Public API ==========================================================

pub use derived::Derived;
pub use subscriber_list::SubscriberId;
pub use subscription::Subscription;
pub use writable::Writable;

//=== Readable Trait ======================================================

/// Read side shared by every container kind.
///
/// # Example
///
/// ```
/// use arcade_state::prelude::*;
///
/// fn describe<R: Readable<u32>>(store: &R) -> String {
///     format!("value = {}", store.get())
/// }
///
/// let score = Writable::new(10u32);
/// let doubled = Derived::new(&score, |s| s * 2);
///
/// assert_eq!(describe(&score), "value = 10");
/// assert_eq!(describe(&doubled), "value = 20");
/// ```
pub trait Readable<T> {
    /// Registers `callback`, calling it immediately with the current value
    /// and again on every subsequent change.
    fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + 'static;

    /// Returns a clone of the current value.
    fn get(&self) -> T;
}
