//=========================================================================
// Game Conventions
//=========================================================================
//
// The two value shapes held in the session's containers:
//
//   Writable<GameState>  current stage, scores, username, cleared stages
//   Writable<StageList>  ordered stage templates with lock flags
//
// The containers are shape-agnostic; these types are conventions only.
//
//=========================================================================

//=== Module Declarations =================================================

mod game_state;
mod stage;

//=== Public API ==========================================================

pub use game_state::{GameState, DEFAULT_USERNAME};
pub use stage::{Stage, StageId, StageList, DEFAULT_STAGE_COUNT, FIRST_STAGE};
