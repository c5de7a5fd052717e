//=========================================================================
// Stages
//=========================================================================
//
// Stage templates and the ordered stage list.
//
// Only stage 1 starts unlocked. Unlocking later stages is up to external
// game logic; this module just records the flag.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use crate::core::error::StateError;

//=== Constants ===========================================================

/// Number of stages in the default list.
pub const DEFAULT_STAGE_COUNT: u32 = 5;

/// Id of the stage every new session starts on.
pub const FIRST_STAGE: StageId = 1;

//=== Stage ===============================================================

/// Positive, 1-indexed stage identifier.
pub type StageId = u32;

/// One playable stage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stage {
    pub id: StageId,
    pub name: String,
    pub unlocked: bool,
}

impl Stage {
    pub fn new(id: StageId, name: impl Into<String>, unlocked: bool) -> Self {
        Self {
            id,
            name: name.into(),
            unlocked,
        }
    }

    /// Stage named `"Stage {id}"`, unlocked only if it is the first stage.
    pub fn numbered(id: StageId) -> Self {
        Self::new(id, format!("Stage {}", id), id == FIRST_STAGE)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lock = if self.unlocked { "" } else { " (locked)" };
        write!(f, "{}{}", self.name, lock)
    }
}

//=== StageList ===========================================================

/// Ordered list of stages.
///
/// # Example
///
/// ```
/// use arcade_state::prelude::*;
///
/// let mut stages = StageList::default();
/// assert_eq!(stages.len(), 5);
/// assert!(stages.is_unlocked(1));
/// assert!(!stages.is_unlocked(2));
///
/// stages.unlock(2).unwrap();
/// assert_eq!(stages.unlocked_ids(), vec![1, 2]);
/// assert!(stages.unlock(9).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageList {
    stages: Vec<Stage>,
}

impl StageList {
    /// Builds `count` numbered stages (ids `1..=count`), only the first
    /// unlocked.
    pub fn with_defaults(count: u32) -> Self {
        Self {
            stages: (FIRST_STAGE..=count).map(Stage::numbered).collect(),
        }
    }

    //--- Query API --------------------------------------------------------

    pub fn get(&self, id: StageId) -> Option<&Stage> {
        self.stages.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: StageId) -> bool {
        self.get(id).is_some()
    }

    /// Returns false for ids not in the list.
    pub fn is_unlocked(&self, id: StageId) -> bool {
        self.get(id).is_some_and(|s| s.unlocked)
    }

    /// Ids of unlocked stages, in list order.
    pub fn unlocked_ids(&self) -> Vec<StageId> {
        self.stages
            .iter()
            .filter(|s| s.unlocked)
            .map(|s| s.id)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stage> {
        self.stages.iter()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn as_slice(&self) -> &[Stage] {
        &self.stages
    }

    //--- Mutation ---------------------------------------------------------

    /// Marks a stage unlocked. Returns whether the flag changed.
    pub fn unlock(&mut self, id: StageId) -> Result<bool, StateError> {
        let stage = self
            .stages
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(StateError::UnknownStage(id))?;

        let changed = !stage.unlocked;
        stage.unlocked = true;
        Ok(changed)
    }
}

impl Default for StageList {
    fn default() -> Self {
        Self::with_defaults(DEFAULT_STAGE_COUNT)
    }
}

impl From<Vec<Stage>> for StageList {
    fn from(stages: Vec<Stage>) -> Self {
        Self { stages }
    }
}

impl FromIterator<Stage> for StageList {
    fn from_iter<I: IntoIterator<Item = Stage>>(iter: I) -> Self {
        Self {
            stages: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a StageList {
    type Item = &'a Stage;
    type IntoIter = std::slice::Iter<'a, Stage>;

    fn into_iter(self) -> Self::IntoIter {
        self.stages.iter()
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_list_has_five_stages_only_first_unlocked() {
        let stages = StageList::default();
        assert_eq!(stages.len(), 5);

        for stage in &stages {
            assert_eq!(stage.unlocked, stage.id == 1, "stage {}", stage.id);
        }
    }

    #[test]
    fn default_names_and_ids_match_positions() {
        let stages = StageList::default();
        let names: Vec<&str> = stages.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Stage 1", "Stage 2", "Stage 3", "Stage 4", "Stage 5"]);

        let ids: Vec<StageId> = stages.iter().map(|s| s.id).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn with_zero_count_is_empty() {
        assert!(StageList::with_defaults(0).is_empty());
    }

    #[test]
    fn unknown_id_reports_locked_and_missing() {
        let stages = StageList::default();
        assert!(!stages.contains(42));
        assert!(!stages.is_unlocked(42));
        assert!(stages.get(0).is_none());
    }

    #[test]
    fn unlock_reports_change_once() {
        let mut stages = StageList::default();
        assert_eq!(stages.unlock(3), Ok(true));
        assert_eq!(stages.unlock(3), Ok(false));
        assert!(stages.is_unlocked(3));
        assert_eq!(stages.unlocked_ids(), vec![1, 3]);
    }

    #[test]
    fn unlock_unknown_stage_fails() {
        let mut stages = StageList::default();
        assert_eq!(stages.unlock(6), Err(StateError::UnknownStage(6)));
    }

    #[test]
    fn custom_list_from_vec_keeps_order() {
        let stages = StageList::from(vec![
            Stage::new(2, "Caves", false),
            Stage::new(1, "Meadow", true),
        ]);
        assert_eq!(stages.as_slice()[0].name, "Caves");
        assert_eq!(stages.get(1).map(|s| s.name.as_str()), Some("Meadow"));
    }

    #[test]
    fn stage_display_marks_locked() {
        assert_eq!(Stage::numbered(1).to_string(), "Stage 1");
        assert_eq!(Stage::numbered(2).to_string(), "Stage 2 (locked)");
    }
}
