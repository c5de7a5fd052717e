//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use arcade_state::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Session
pub use crate::session::{GameSession, SessionBuilder};

// Containers
pub use crate::core::store::{Derived, Readable, Subscription, Writable};

// Game state shapes
pub use crate::core::game::{GameState, Stage, StageId, StageList};

// Errors
pub use crate::core::error::StateError;
