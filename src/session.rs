//=========================================================================
// Game Session
//
// Owner of the menu's two reactive containers.
//
// Architecture:
// ```text
//     SessionBuilder  ──build()──>  GameSession
//         │                            ├─ game_state: Writable<GameState>
//         ├─ with_username()           └─ stages:     Writable<StageList>
//         ├─ with_stage_count()
//         ├─ with_stages()
//         └─ with_initial_state()
// ```
//
// Sessions are plain values passed to whoever needs them. Two sessions
// never share state.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::error::StateError;
use crate::core::game::{GameState, StageList};
use crate::core::store::Writable;

//=== SessionBuilder ======================================================

/// Builder for configuring and constructing a [`GameSession`].
///
/// # Default Values
///
/// - **Username**: `"Player 1"`
/// - **Stages**: 5 numbered stages, only stage 1 unlocked
///
/// # Examples
///
/// ```
/// use arcade_state::SessionBuilder;
///
/// let session = SessionBuilder::new()
///     .with_username("Ada")
///     .with_stage_count(3)
///     .build();
///
/// assert_eq!(session.game_state().get().username, "Ada");
/// assert_eq!(session.stages().get().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct SessionBuilder {
    username: Option<String>,
    stages: StageList,
    initial_state: Option<GameState>,
}

impl SessionBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            username: None,
            stages: StageList::default(),
            initial_state: None,
        }
    }

    /// Sets the player's display name. Overrides the name in any state
    /// passed to [`with_initial_state`](Self::with_initial_state).
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn with_username(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "Username must not be empty");
        self.username = Some(name);
        self
    }

    /// Uses `count` numbered stages with only the first unlocked.
    ///
    /// # Panics
    ///
    /// Panics if `count == 0`.
    pub fn with_stage_count(mut self, count: u32) -> Self {
        assert!(count > 0, "Stage count must be positive");
        self.stages = StageList::with_defaults(count);
        self
    }

    /// Uses a custom stage list.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    pub fn with_stages(mut self, stages: impl Into<StageList>) -> Self {
        let stages = stages.into();
        assert!(!stages.is_empty(), "Stage list must not be empty");
        self.stages = stages;
        self
    }

    /// Seeds the game state container with `state` instead of the defaults.
    /// Not validated against the stage list; see [`GameSession::validate`].
    pub fn with_initial_state(mut self, state: GameState) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Builds the session and its containers.
    pub fn build(self) -> GameSession {
        let mut state = self.initial_state.unwrap_or_default();
        if let Some(name) = self.username {
            state.username = name;
        }

        info!(
            "Building game session (user: {}, stages: {})",
            state.username,
            self.stages.len()
        );

        GameSession {
            game_state: Writable::named("gameState", state),
            stages: Writable::named("stages", self.stages),
        }
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== GameSession =========================================================

/// The game state and stage list containers for one running UI.
///
/// Cloning yields another handle to the same containers.
#[derive(Debug, Clone)]
pub struct GameSession {
    game_state: Writable<GameState>,
    stages: Writable<StageList>,
}

impl GameSession {
    /// Creates a session with default settings.
    pub fn new() -> Self {
        SessionBuilder::new().build()
    }

    /// Returns a builder for a customized session.
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    //--- Containers -------------------------------------------------------

    pub fn game_state(&self) -> &Writable<GameState> {
        &self.game_state
    }

    pub fn stages(&self) -> &Writable<StageList> {
        &self.stages
    }

    //--- Validation -------------------------------------------------------

    /// Checks that `current_stage` names a stage in the list.
    ///
    /// Never run implicitly; set/update accept any value.
    pub fn validate(&self) -> Result<(), StateError> {
        let current = self.game_state.get().current_stage;
        if self.stages.get().contains(current) {
            Ok(())
        } else {
            Err(StateError::UnknownStage(current))
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game::Stage;
    use std::cell::RefCell;
    use std::rc::Rc;

    //=====================================================================
    // SessionBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = SessionBuilder::new();
        assert!(builder.username.is_none());
        assert_eq!(builder.stages.len(), 5);
        assert!(builder.initial_state.is_none());
    }

    #[test]
    fn builder_with_username() {
        let session = SessionBuilder::new().with_username("Grace").build();
        assert_eq!(session.game_state().get().username, "Grace");
    }

    #[test]
    #[should_panic(expected = "Username must not be empty")]
    fn builder_with_username_panics_on_empty() {
        SessionBuilder::new().with_username("");
    }

    #[test]
    fn builder_with_stage_count() {
        let session = SessionBuilder::new().with_stage_count(8).build();
        let stages = session.stages().get();
        assert_eq!(stages.len(), 8);
        assert_eq!(stages.unlocked_ids(), vec![1]);
    }

    #[test]
    #[should_panic(expected = "Stage count must be positive")]
    fn builder_with_stage_count_panics_on_zero() {
        SessionBuilder::new().with_stage_count(0);
    }

    #[test]
    fn builder_with_stages() {
        let session = SessionBuilder::new()
            .with_stages(vec![Stage::new(1, "Tutorial", true)])
            .build();
        assert_eq!(session.stages().get().as_slice()[0].name, "Tutorial");
    }

    #[test]
    #[should_panic(expected = "Stage list must not be empty")]
    fn builder_with_stages_panics_on_empty() {
        SessionBuilder::new().with_stages(Vec::<Stage>::new());
    }

    #[test]
    fn username_overrides_initial_state_name() {
        let seeded = GameState {
            username: "Seed".to_string(),
            high_score: 99,
            ..GameState::default()
        };
        let session = SessionBuilder::new()
            .with_initial_state(seeded)
            .with_username("Override")
            .build();

        let state = session.game_state().get();
        assert_eq!(state.username, "Override");
        assert_eq!(state.high_score, 99);
    }

    #[test]
    fn initial_state_name_kept_without_override() {
        let seeded = GameState {
            username: "Seed".to_string(),
            ..GameState::default()
        };
        let session = SessionBuilder::new().with_initial_state(seeded).build();
        assert_eq!(session.game_state().get().username, "Seed");
    }

    //=====================================================================
    // GameSession Tests
    //=====================================================================

    #[test]
    fn default_session_matches_menu_defaults() {
        let session = GameSession::new();
        assert_eq!(session.game_state().get(), GameState::default());
        assert_eq!(session.stages().get(), StageList::default());
        assert_eq!(session.game_state().label(), "gameState");
        assert_eq!(session.stages().label(), "stages");
    }

    #[test]
    fn sessions_do_not_share_state() {
        let a = GameSession::new();
        let b = GameSession::new();

        a.game_state().update_in_place(|s| s.current_score = 10);
        assert_eq!(a.game_state().get().current_score, 10);
        assert_eq!(b.game_state().get().current_score, 0);
    }

    #[test]
    fn score_update_is_observed_with_other_fields_intact() {
        let session = GameSession::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = session
            .game_state()
            .subscribe(move |s: &GameState| sink.borrow_mut().push(s.clone()));

        session.game_state().update(|s| GameState {
            current_score: 10,
            ..s.clone()
        });

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        let last = &seen[1];
        assert_eq!(last.current_stage, 1);
        assert_eq!(last.current_score, 10);
        assert!(last.cleared_stages.is_empty());
        assert_eq!(last.username, "Player 1");
    }

    #[test]
    fn unlocking_a_stage_notifies_stage_subscribers() {
        let session = GameSession::new();
        let unlocked = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&unlocked);
        let _sub = session
            .stages()
            .subscribe(move |list: &StageList| sink.borrow_mut().push(list.unlocked_ids()));

        session.stages().update_in_place(|list| {
            list.unlock(2).expect("stage 2 exists");
        });

        assert_eq!(*unlocked.borrow(), vec![vec![1], vec![1, 2]]);
    }

    #[test]
    fn validate_accepts_default_session() {
        assert_eq!(GameSession::new().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_unknown_current_stage() {
        let session = GameSession::new();
        session.game_state().update_in_place(|s| s.current_stage = 12);
        assert_eq!(session.validate(), Err(StateError::UnknownStage(12)));
    }

    #[test]
    fn cloned_session_shares_containers() {
        let session = GameSession::new();
        let handle = session.clone();
        handle.game_state().update_in_place(|s| s.is_paused = true);
        assert!(session.game_state().get().is_paused);
    }
}
