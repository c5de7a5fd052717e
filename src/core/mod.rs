//=========================================================================
// Core Systems
//
// Reactive containers and the game-state conventions held in them.
//
// Responsibilities:
// - `store`: shape-agnostic containers (`Writable`, `Derived`) with
//   explicit subscribe/notify, plus the channel bridge
// - `game`: the `GameState` record and `StageList` shapes
// - `error`: errors for stage lookups
//
// Notes:
// Everything here runs on one logical thread. Notification is synchronous
// and in subscription order; nothing blocks or suspends.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod error;
pub mod game;
pub mod store;

//=== Public API ==========================================================

pub use error::StateError;
pub use game::{GameState, Stage, StageId, StageList};
pub use store::{Derived, Readable, Subscription, Writable};
