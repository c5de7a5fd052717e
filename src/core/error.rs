//=========================================================================
// State Errors
//=========================================================================
//
// Error types for operations on the game-state conventions.
//
// The containers themselves are infallible. Errors only arise from
// lookups that reference a stage id absent from the stage list.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::game::StageId;

//=== StateError ==========================================================

/// Errors raised by stage lookups and session validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    /// The referenced stage id is not present in the stage list.
    UnknownStage(StageId),
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStage(id) => write!(f, "Unknown stage id: {}", id),
        }
    }
}

impl std::error::Error for StateError {}

//=========================================================================
// Tests
//=========================================================================
