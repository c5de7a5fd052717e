//=========================================================================
// Arcade State Library Root
//
// Reactive state containers for a score-tracking game menu.
//
// Responsibilities:
// - Expose the session facade (`GameSession`, `SessionBuilder`)
// - Expose the containers (`Writable`, `Derived`) for direct use
// - Define the `GameState` and `StageList` value shapes
//
// Typical usage:
// ```
// use arcade_state::GameSession;
//
// let session = GameSession::new();
// let _sub = session.game_state().subscribe(|state| {
//     println!("{}: {}", state.username, state.current_score);
// });
// session.game_state().update_in_place(|s| s.current_score += 10);
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the containers and value shapes. Most callers only need
// the session facade and the prelude.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `session` defines the builder and the owner of the two containers.
//
mod session;

//--- Public Exports ------------------------------------------------------

pub use session::{GameSession, SessionBuilder};
