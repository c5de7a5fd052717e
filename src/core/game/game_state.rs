//=========================================================================
// Game State
//=========================================================================
//
// The menu's score-tracking record.
//
// Field set is the union of every known shape of this record: the
// per-stage score map, accumulated score and pause flag are kept even
// where a consumer ignores them.
//
// Invariants (kept by the helpers below, not by the container):
// - high_score never decreases
// - cleared_stages grows without duplicates
// - stage_scores holds the best score seen per stage
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::BTreeMap;

//=== Internal Dependencies ===============================================

use super::stage::{StageId, FIRST_STAGE};

//=== Constants ===========================================================

/// Display name used until the player picks one.
pub const DEFAULT_USERNAME: &str = "Player 1";

//=== GameState ===========================================================

/// Score and progress record for one running UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Id of the active stage. Must name an entry in the stage list.
    pub current_stage: StageId,

    /// Score within the active stage.
    pub current_score: u32,

    pub high_score: u32,

    pub username: String,

    /// Completed stage ids, in clear order.
    pub cleared_stages: Vec<StageId>,

    /// Best score per stage.
    pub stage_scores: BTreeMap<StageId, u32>,

    /// Sum of finalized scores from earlier stages.
    pub accumulated_score: u32,

    pub is_paused: bool,
}

impl GameState {
    /// Alias for `current_score`.
    pub fn score(&self) -> u32 {
        self.current_score
    }

    //--- Cleared Stages ---------------------------------------------------

    pub fn is_cleared(&self, id: StageId) -> bool {
        self.cleared_stages.contains(&id)
    }

    /// Records `id` as cleared. Returns false if it already was.
    pub fn mark_cleared(&mut self, id: StageId) -> bool {
        if self.is_cleared(id) {
            return false;
        }
        self.cleared_stages.push(id);
        true
    }

    //--- Scores -----------------------------------------------------------

    /// Raises `high_score` to `score` if higher. Returns whether it rose.
    pub fn raise_high_score(&mut self, score: u32) -> bool {
        if score > self.high_score {
            self.high_score = score;
            true
        } else {
            false
        }
    }

    /// Keeps the best score for `id`. Returns whether the entry changed.
    pub fn record_stage_score(&mut self, id: StageId, score: u32) -> bool {
        match self.stage_scores.get(&id) {
            Some(&best) if best >= score => false,
            _ => {
                self.stage_scores.insert(id, score);
                true
            }
        }
    }

    /// Best recorded score for `id`, if any.
    pub fn best_stage_score(&self, id: StageId) -> Option<u32> {
        self.stage_scores.get(&id).copied()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            current_stage: FIRST_STAGE,
            current_score: 0,
            high_score: 0,
            username: DEFAULT_USERNAME.to_string(),
            cleared_stages: Vec::new(),
            stage_scores: BTreeMap::new(),
            accumulated_score: 0,
            is_paused: false,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
