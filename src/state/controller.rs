//! Level gating and screen selection.
//!
//! The controller owns the "must be unlocked to navigate" rule. The store's
//! `set_current_level` trusts its caller, so UI code should navigate through
//! [`request_level`] or [`advance`].

use super::slot::StateSlot;
use super::store::ProgressionStore;
use crate::error::ProgressionError;
use crate::model::{Level, ProgressionState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Landing,
    CharacterStats,
    SkillTree,
    ProjectBattles,
    Timeline,
    ContactBoss,
}

pub fn screen_for(level: Level) -> Screen {
    match level {
        Level::Landing => Screen::Landing,
        Level::About => Screen::CharacterStats,
        Level::Skills => Screen::SkillTree,
        Level::Projects => Screen::ProjectBattles,
        Level::Experience => Screen::Timeline,
        Level::Contact => Screen::ContactBoss,
    }
}

pub fn try_request_level<S: StateSlot>(
    store: &mut ProgressionStore<S>,
    target: Level,
) -> Result<(), ProgressionError> {
    if !store.state().is_unlocked(target) {
        return Err(ProgressionError::InvalidLevelTransition { target });
    }
    store.set_current_level(target);
    Ok(())
}

/// Returns false and leaves the current level alone when `target` is locked.
pub fn request_level<S: StateSlot>(store: &mut ProgressionStore<S>, target: Level) -> bool {
    try_request_level(store, target).is_ok()
}

/// Unlocks the level after the current one and moves there.
pub fn advance<S: StateSlot>(store: &mut ProgressionStore<S>) -> Option<Level> {
    let next = store.state().current_level.next()?;
    store.unlock_level(next);
    store.set_current_level(next);
    Some(next)
}

pub fn show_navigation(level: Level) -> bool {
    level != Level::Landing
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub level: Level,
    pub label: String,
    pub unlocked: bool,
    pub active: bool,
}

impl NavEntry {
    pub fn tooltip(&self) -> String {
        if self.unlocked {
            self.level.as_str().to_uppercase()
        } else {
            "LOCKED".to_string()
        }
    }
}

pub fn nav_entries(state: &ProgressionState) -> Vec<NavEntry> {
    Level::ALL
        .iter()
        .map(|&level| NavEntry {
            level,
            label: level.label(),
            unlocked: state.is_unlocked(level),
            active: state.current_level == level,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::slot::MemorySlot;

    fn fresh() -> ProgressionStore<MemorySlot> {
        ProgressionStore::load(MemorySlot::new())
    }

    #[test]
    fn locked_levels_are_refused() {
        let mut store = fresh();
        for level in Level::ALL.into_iter().skip(1) {
            assert!(!request_level(&mut store, level));
            assert_eq!(store.state().current_level, Level::Landing);
        }
        let err = try_request_level(&mut store, Level::Contact).unwrap_err();
        assert!(matches!(
            err,
            ProgressionError::InvalidLevelTransition { target: Level::Contact }
        ));
    }

    #[test]
    fn unlock_then_request_scenario() {
        let mut store = fresh();
        store.unlock_level(Level::About);
        store.set_current_level(Level::About);
        assert!(!request_level(&mut store, Level::Skills));
        assert_eq!(store.state().current_level, Level::About);
        store.unlock_level(Level::Skills);
        assert!(request_level(&mut store, Level::Skills));
        assert_eq!(store.state().current_level, Level::Skills);
    }

    #[test]
    fn revisiting_earlier_levels_is_allowed() {
        let mut store = fresh();
        advance(&mut store);
        advance(&mut store);
        assert!(request_level(&mut store, Level::Landing));
        assert!(request_level(&mut store, Level::Skills));
    }

    #[test]
    fn advance_walks_the_whole_chain() {
        let mut store = fresh();
        let mut visited = Vec::new();
        while let Some(l) = advance(&mut store) {
            visited.push(l);
        }
        assert_eq!(visited, Level::ALL[1..].to_vec());
        assert_eq!(store.state().current_level, Level::Contact);
        assert_eq!(store.state().unlocked_levels, Level::ALL.to_vec());
        assert_eq!(advance(&mut store), None);
    }

    #[test]
    fn every_level_has_a_screen() {
        assert_eq!(screen_for(Level::Landing), Screen::Landing);
        assert_eq!(screen_for(Level::About), Screen::CharacterStats);
        assert_eq!(screen_for(Level::Contact), Screen::ContactBoss);
        assert!(!show_navigation(Level::Landing));
        assert!(show_navigation(Level::Experience));
    }

    #[test]
    fn nav_entries_mark_locked_and_active() {
        let mut store = fresh();
        advance(&mut store);
        let entries = nav_entries(store.state());
        assert_eq!(entries.len(), 6);
        assert!(entries[0].unlocked && !entries[0].active);
        assert!(entries[1].unlocked && entries[1].active);
        assert!(!entries[2].unlocked);
        assert_eq!(entries[2].tooltip(), "LOCKED");
        assert_eq!(entries[1].tooltip(), "ABOUT");
        assert_eq!(entries[5].label, "6");
    }
}
