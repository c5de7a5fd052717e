//=========================================================================
// Subscription Handle
//=========================================================================
//
// Cancellation handle returned by `subscribe`.
//
// Dropping the handle cancels the subscription. `detach()` opts out and
// leaves the subscriber registered for the lifetime of the container.
// Cancelling never touches the container's held value.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use super::SubscriberId;

//=== Subscription ========================================================

/// Handle to a registered subscriber.
///
/// Holds only a weak link to its container, so an outstanding handle does
/// not keep the container alive.
#[must_use = "dropping a Subscription immediately cancels it; call `detach()` to keep it"]
pub struct Subscription {
    id: SubscriberId,
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub(crate) fn new(id: SubscriberId, cancel: Box<dyn FnOnce()>) -> Self {
        Self {
            id,
            cancel: Some(cancel),
        }
    }

    /// The id this handle cancels.
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Stops all future notifications to this subscriber.
    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    /// Releases the handle without cancelling.
    pub fn detach(mut self) {
        self.cancel = None;
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("attached", &self.cancel.is_some())
            .finish()
    }
}
