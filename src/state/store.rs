use std::rc::Rc;
use yew::Reducible;

use super::controller;
use super::slot::StateSlot;
use crate::error::ProgressionError;
use crate::model::{Level, ProgressionAction, ProgressionState, SCHEMA_VERSION};
use crate::util::{clog, cwarn};

/// Owns the progression record and keeps its persisted copy in sync.
///
/// Every mutator writes the full record to the slot before returning, even
/// when the mutation turned out to be a no-op. `reset_game` removes the slot
/// instead of writing the default back.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressionStore<S> {
    state: ProgressionState,
    slot: S,
}

impl<S: StateSlot> ProgressionStore<S> {
    /// Reads the slot once. Missing or unusable records fall back to the
    /// default state; the failure is logged, never returned.
    pub fn load(slot: S) -> Self {
        let state = match Self::read_state(&slot) {
            Ok(Some(state)) => state,
            Ok(None) => ProgressionState::default(),
            Err(e) if e.is_corrupted() => {
                cwarn(&format!("progression: {}; starting fresh", e));
                ProgressionState::default()
            }
            Err(e) => {
                cwarn(&format!("progression: could not read saved state: {}", e));
                ProgressionState::default()
            }
        };
        Self { state, slot }
    }

    pub fn read_state(slot: &S) -> Result<Option<ProgressionState>, ProgressionError> {
        match slot.read()? {
            Some(raw) => decode(&raw).map(Some),
            None => Ok(None),
        }
    }

    pub fn state(&self) -> &ProgressionState {
        &self.state
    }

    /// No unlock check here; gated navigation goes through the controller.
    pub fn set_current_level(&mut self, level: Level) {
        self.state.set_current_level(level);
        self.persist();
    }

    pub fn unlock_level(&mut self, level: Level) {
        self.state.unlock_level(level);
        self.persist();
    }

    pub fn complete_action(&mut self, action_id: impl Into<String>) {
        let key = action_id.into();
        self.state.complete_action(&key);
        self.persist();
    }

    pub fn update_stat(&mut self, key: &str, value: f64) {
        if !value.is_finite() {
            cwarn(&format!("progression: ignoring non-finite stat '{}'", key));
        }
        self.state.update_stat(key, value);
        self.persist();
    }

    pub fn reset_game(&mut self) {
        self.state = ProgressionState::default();
        if let Err(e) = self.slot.remove() {
            cwarn(&format!("progression: failed to clear saved state: {}", e));
        }
        clog("progression: reset");
    }

    pub fn apply(&mut self, action: ProgressionAction) {
        use ProgressionAction::*;
        match action {
            CompleteAction(key) => self.complete_action(key),
            UpdateStat { key, value } => self.update_stat(&key, value),
            RequestLevel(target) => {
                if !controller::request_level(self, target) {
                    clog(&format!("progression: '{}' is locked", target));
                }
            }
            Advance => {
                controller::advance(self);
            }
            Reset => self.reset_game(),
        }
    }

    fn persist(&self) {
        let res = encode(&self.state).and_then(|raw| self.slot.write(&raw));
        if let Err(e) = res {
            cwarn(&format!("progression: failed to save state: {}", e));
        }
    }
}

impl<S: StateSlot + Clone> Reducible for ProgressionStore<S> {
    type Action = ProgressionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        new.apply(action);
        Rc::new(new)
    }
}

pub fn encode(state: &ProgressionState) -> Result<String, ProgressionError> {
    Ok(serde_json::to_string(state)?)
}

/// Parses a persisted record, rejecting versions newer than this build knows.
pub fn decode(raw: &str) -> Result<ProgressionState, ProgressionError> {
    let mut state: ProgressionState = serde_json::from_str(raw)?;
    if state.version > SCHEMA_VERSION {
        return Err(ProgressionError::UnsupportedVersion {
            found: state.version,
            supported: SCHEMA_VERSION,
        });
    }
    state.version = SCHEMA_VERSION;
    state.normalize();
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::slot::MemorySlot;

    /// Slot whose every call fails, like a browser with storage disabled.
    #[derive(Clone, Debug, PartialEq)]
    struct FailingSlot;

    impl StateSlot for FailingSlot {
        fn read(&self) -> Result<Option<String>, ProgressionError> {
            Err(ProgressionError::Storage("denied".to_string()))
        }

        fn write(&self, _raw: &str) -> Result<(), ProgressionError> {
            Err(ProgressionError::Storage("quota exceeded".to_string()))
        }

        fn remove(&self) -> Result<(), ProgressionError> {
            Err(ProgressionError::Storage("denied".to_string()))
        }
    }

    fn fresh() -> (ProgressionStore<MemorySlot>, MemorySlot) {
        let slot = MemorySlot::new();
        (ProgressionStore::load(slot.clone()), slot)
    }

    #[test]
    fn empty_slot_loads_default() {
        let (store, slot) = fresh();
        assert_eq!(store.state(), &ProgressionState::default());
        assert_eq!(slot.raw(), None);
    }

    #[test]
    fn every_mutation_is_persisted() {
        let (mut store, slot) = fresh();
        store.unlock_level(Level::About);
        let saved = decode(&slot.raw().unwrap()).unwrap();
        assert!(saved.is_unlocked(Level::About));

        store.complete_action("stat_DSA");
        store.update_stat("sessions", 3.0);
        store.set_current_level(Level::About);
        let saved = decode(&slot.raw().unwrap()).unwrap();
        assert_eq!(&saved, store.state());
    }

    #[test]
    fn no_op_mutation_still_writes() {
        let (mut store, slot) = fresh();
        store.unlock_level(Level::Landing);
        assert!(slot.raw().is_some());
    }

    #[test]
    fn complete_action_twice_keeps_one_entry() {
        let (mut store, _slot) = fresh();
        store.complete_action("stat_DSA");
        store.complete_action("stat_DSA");
        let hits = store
            .state()
            .completed_actions
            .iter()
            .filter(|a| *a == "stat_DSA")
            .count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn reload_from_same_slot_round_trips() {
        let (mut store, slot) = fresh();
        store.unlock_level(Level::About);
        store.unlock_level(Level::Skills);
        store.set_current_level(Level::Skills);
        store.complete_action("skill_OS");
        store.update_stat("sessions", 2.0);

        let reloaded = ProgressionStore::load(slot.clone());
        assert_eq!(reloaded.state(), store.state());
    }

    #[test]
    fn reset_restores_default_and_clears_slot() {
        let (mut store, slot) = fresh();
        store.unlock_level(Level::About);
        store.set_current_level(Level::About);
        store.complete_action("stat_DSA");
        store.update_stat("sessions", 1.0);

        store.reset_game();
        let s = store.state();
        assert_eq!(s.current_level, Level::Landing);
        assert_eq!(s.unlocked_levels, vec![Level::Landing]);
        assert!(s.completed_actions.is_empty());
        assert!(s.player_stats.is_empty());
        assert_eq!(slot.raw(), None);
    }

    #[test]
    fn unlocked_levels_only_grow_until_reset() {
        let (mut store, _slot) = fresh();
        let mut seen = store.state().unlocked_levels.len();
        for l in [Level::About, Level::About, Level::Contact, Level::Skills] {
            store.unlock_level(l);
            store.set_current_level(Level::Landing);
            store.complete_action("x");
            let now = store.state().unlocked_levels.len();
            assert!(now >= seen);
            seen = now;
        }
        assert_eq!(seen, 4);
    }

    #[test]
    fn corrupted_slot_falls_back_to_default() {
        let slot = MemorySlot::with_raw("{not json");
        let store = ProgressionStore::load(slot.clone());
        assert_eq!(store.state(), &ProgressionState::default());
        assert!(ProgressionStore::read_state(&slot).unwrap_err().is_corrupted());
    }

    #[test]
    fn wrong_shape_is_corrupted() {
        let slot = MemorySlot::with_raw(
            r#"{"currentLevel":"boss","unlockedLevels":[],"completedActions":[],"playerStats":{}}"#,
        );
        let store = ProgressionStore::load(slot);
        assert_eq!(store.state(), &ProgressionState::default());
    }

    #[test]
    fn newer_schema_is_rejected() {
        let raw = r#"{"version":99,"currentLevel":"about","unlockedLevels":["landing","about"],"completedActions":[],"playerStats":{}}"#;
        let err = decode(raw).unwrap_err();
        assert!(matches!(err, ProgressionError::UnsupportedVersion { found: 99, .. }));
        let store = ProgressionStore::load(MemorySlot::with_raw(raw));
        assert_eq!(store.state().current_level, Level::Landing);
    }

    #[test]
    fn legacy_record_is_normalized_on_load() {
        let raw = r#"{"currentLevel":"skills","unlockedLevels":["about","about","skills"],"completedActions":["stat_DSA","stat_DSA"],"playerStats":{"x":1}}"#;
        let store = ProgressionStore::load(MemorySlot::with_raw(raw));
        let s = store.state();
        assert_eq!(s.current_level, Level::Skills);
        assert_eq!(s.unlocked_levels, vec![Level::Landing, Level::About, Level::Skills]);
        assert_eq!(s.completed_actions, vec!["stat_DSA".to_string()]);
        assert_eq!(s.stat("x"), Some(1.0));
    }

    #[test]
    fn non_finite_stat_does_not_lose_progress() {
        let (mut store, slot) = fresh();
        store.unlock_level(Level::About);
        store.set_current_level(Level::About);
        store.update_stat("ratio", 0.25);
        store.update_stat("ratio", f64::INFINITY);
        store.update_stat("spread", f64::NAN);
        assert_eq!(store.state().stat("ratio"), Some(0.25));

        let reloaded = ProgressionStore::load(slot.clone());
        assert_eq!(reloaded.state().current_level, Level::About);
        assert_eq!(reloaded.state(), store.state());
    }

    #[test]
    fn null_stat_in_saved_record_keeps_the_rest() {
        let raw = r#"{"version":1,"currentLevel":"about","unlockedLevels":["landing","about"],"completedActions":["stat_DSA"],"playerStats":{"ratio":null}}"#;
        let store = ProgressionStore::load(MemorySlot::with_raw(raw));
        let s = store.state();
        assert_eq!(s.current_level, Level::About);
        assert!(s.has_completed("stat_DSA"));
        assert!(s.player_stats.is_empty());
    }

    #[test]
    fn unreadable_storage_loads_default() {
        let store = ProgressionStore::load(FailingSlot);
        assert_eq!(store.state(), &ProgressionState::default());
        assert!(matches!(
            ProgressionStore::read_state(&FailingSlot),
            Err(ProgressionError::Storage(_))
        ));
    }

    #[test]
    fn failed_writes_keep_memory_authoritative() {
        let mut store = ProgressionStore::load(FailingSlot);
        store.unlock_level(Level::About);
        store.set_current_level(Level::About);
        store.complete_action("stat_DSA");
        store.update_stat("sessions", 1.0);
        let s = store.state();
        assert_eq!(s.current_level, Level::About);
        assert!(s.is_unlocked(Level::About));
        assert!(s.has_completed("stat_DSA"));
        assert_eq!(s.stat("sessions"), Some(1.0));

        store.reset_game();
        assert_eq!(store.state(), &ProgressionState::default());
    }

    #[test]
    fn reducer_dispatch_persists() {
        let (store, slot) = fresh();
        let store = Rc::new(store);
        let store = store.reduce(ProgressionAction::Advance);
        let store = store.reduce(ProgressionAction::CompleteAction("stat_DSA".into()));
        assert_eq!(store.state().current_level, Level::About);
        let saved = decode(&slot.raw().unwrap()).unwrap();
        assert_eq!(&saved, store.state());

        let store = store.reduce(ProgressionAction::Reset);
        assert_eq!(store.state(), &ProgressionState::default());
        assert_eq!(slot.raw(), None);
    }

    #[test]
    fn reducer_ignores_locked_request() {
        let (store, _slot) = fresh();
        let store = Rc::new(store).reduce(ProgressionAction::RequestLevel(Level::Contact));
        assert_eq!(store.state().current_level, Level::Landing);
    }
}
