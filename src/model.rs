//! Core data models for the portfolio progression.
//! Levels, tagged actions and the persisted progression record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ProgressionError;

/// Schema marker written into every persisted record.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Landing,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl Level {
    /// Linear play order.
    pub const ALL: [Level; 6] = [
        Level::Landing,
        Level::About,
        Level::Skills,
        Level::Projects,
        Level::Experience,
        Level::Contact,
    ];

    pub fn index(self) -> usize {
        match self {
            Level::Landing => 0,
            Level::About => 1,
            Level::Skills => 2,
            Level::Projects => 3,
            Level::Experience => 4,
            Level::Contact => 5,
        }
    }

    /// The level unlocked by finishing this one. `Contact` is the last.
    pub fn next(self) -> Option<Level> {
        Level::ALL.get(self.index() + 1).copied()
    }

    /// Wire name used in persisted records.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Landing => "landing",
            Level::About => "about",
            Level::Skills => "skills",
            Level::Projects => "projects",
            Level::Experience => "experience",
            Level::Contact => "contact",
        }
    }

    /// Short label shown on the navigation dots.
    pub fn label(self) -> String {
        (self.index() + 1).to_string()
    }

    pub fn title(self) -> &'static str {
        match self {
            Level::Landing => "Boot Sequence",
            Level::About => "Character Stats",
            Level::Skills => "Skill Tree",
            Level::Projects => "Project Battles",
            Level::Experience => "Timeline",
            Level::Contact => "Final Boss: Contact",
        }
    }

    /// Prefix namespacing the actions recorded on this level's screen.
    pub fn action_prefix(self) -> Option<&'static str> {
        match self {
            Level::Landing => None,
            Level::About => Some(ActionId::STAT_PREFIX),
            Level::Skills => Some(ActionId::SKILL_PREFIX),
            Level::Projects => Some(ActionId::PROJECT_PREFIX),
            Level::Experience => Some(ActionId::CHECKPOINT_PREFIX),
            Level::Contact => Some(ActionId::CONTACT_PREFIX),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ProgressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .iter()
            .copied()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| ProgressionError::UnknownLevel(s.to_string()))
    }
}

/// A micro-achievement, tagged by the level it belongs to.
///
/// Persisted records only ever contain [`ActionId::key`] strings, so the
/// string form is the compatibility format and this enum is the typed view.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActionId {
    RevealStat(String),
    UnlockSkill(String),
    DefeatProject(usize),
    VisitCheckpoint(usize),
    UnlockChannel(String),
    /// Anything not following a known prefix.
    Custom(String),
}

impl ActionId {
    pub const STAT_PREFIX: &'static str = "stat_";
    pub const SKILL_PREFIX: &'static str = "skill_";
    pub const PROJECT_PREFIX: &'static str = "project_";
    pub const CHECKPOINT_PREFIX: &'static str = "checkpoint_";
    pub const CONTACT_PREFIX: &'static str = "contact_";

    pub fn key(&self) -> String {
        match self {
            ActionId::RevealStat(label) => format!("{}{}", Self::STAT_PREFIX, label),
            ActionId::UnlockSkill(name) => format!("{}{}", Self::SKILL_PREFIX, name),
            ActionId::DefeatProject(i) => format!("{}{}", Self::PROJECT_PREFIX, i),
            ActionId::VisitCheckpoint(i) => format!("{}{}", Self::CHECKPOINT_PREFIX, i),
            ActionId::UnlockChannel(id) => format!("{}{}", Self::CONTACT_PREFIX, id),
            ActionId::Custom(raw) => raw.clone(),
        }
    }

    pub fn parse(raw: &str) -> ActionId {
        if let Some(rest) = raw.strip_prefix(Self::STAT_PREFIX) {
            return ActionId::RevealStat(rest.to_string());
        }
        if let Some(rest) = raw.strip_prefix(Self::SKILL_PREFIX) {
            return ActionId::UnlockSkill(rest.to_string());
        }
        if let Some(rest) = raw.strip_prefix(Self::PROJECT_PREFIX) {
            if let Ok(i) = rest.parse::<usize>() {
                return ActionId::DefeatProject(i);
            }
        }
        if let Some(rest) = raw.strip_prefix(Self::CHECKPOINT_PREFIX) {
            if let Ok(i) = rest.parse::<usize>() {
                return ActionId::VisitCheckpoint(i);
            }
        }
        if let Some(rest) = raw.strip_prefix(Self::CONTACT_PREFIX) {
            return ActionId::UnlockChannel(rest.to_string());
        }
        ActionId::Custom(raw.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionState {
    /// Absent in records written before versioning; those read as current.
    #[serde(default = "default_version")]
    pub version: u32,
    pub current_level: Level,
    /// No duplicates; always contains `Landing`.
    pub unlocked_levels: Vec<Level>,
    /// Append-only until a reset.
    pub completed_actions: Vec<String>,
    /// Finite values only; JSON has no spelling for NaN or infinity.
    #[serde(default, deserialize_with = "lenient_stats")]
    pub player_stats: BTreeMap<String, f64>,
}

fn default_version() -> u32 {
    SCHEMA_VERSION
}

/// Drops `null` and non-numeric entries instead of failing the whole record.
fn lenient_stats<'de, D>(de: D) -> Result<BTreeMap<String, f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: BTreeMap<String, serde_json::Value> = BTreeMap::deserialize(de)?;
    Ok(raw
        .into_iter()
        .filter_map(|(k, v)| v.as_f64().filter(|f| f.is_finite()).map(|f| (k, f)))
        .collect())
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION,
            current_level: Level::Landing,
            unlocked_levels: vec![Level::Landing],
            completed_actions: Vec::new(),
            player_stats: BTreeMap::new(),
        }
    }
}

/// Done/total counter for a single level's screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelProgress {
    pub done: usize,
    pub total: usize,
}

impl LevelProgress {
    pub fn is_complete(&self) -> bool {
        self.done >= self.total
    }

    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        (self.done.min(self.total) as f64 / self.total as f64) * 100.0
    }
}

impl ProgressionState {
    pub fn is_unlocked(&self, level: Level) -> bool {
        self.unlocked_levels.contains(&level)
    }

    pub fn has_completed(&self, key: &str) -> bool {
        self.completed_actions.iter().any(|a| a == key)
    }

    /// Suffixes of completed actions carrying `prefix`, in completion order.
    pub fn completed_with_prefix<'a>(&'a self, prefix: &str) -> Vec<&'a str> {
        self.completed_actions
            .iter()
            .filter_map(|a| a.strip_prefix(prefix))
            .collect()
    }

    pub fn level_progress(&self, level: Level, total: usize) -> LevelProgress {
        let done = match level.action_prefix() {
            Some(prefix) => self.completed_with_prefix(prefix).len(),
            None => 0,
        };
        LevelProgress { done, total }
    }

    /// Completed actions in their typed form.
    pub fn actions(&self) -> impl Iterator<Item = ActionId> + '_ {
        self.completed_actions.iter().map(|a| ActionId::parse(a))
    }

    pub fn stat(&self, key: &str) -> Option<f64> {
        self.player_stats.get(key).copied()
    }

    /// Drops duplicates and restores `Landing`; first occurrence wins.
    pub fn normalize(&mut self) {
        let mut levels: Vec<Level> = Vec::with_capacity(self.unlocked_levels.len() + 1);
        if !self.unlocked_levels.contains(&Level::Landing) {
            levels.push(Level::Landing);
        }
        for l in self.unlocked_levels.drain(..) {
            if !levels.contains(&l) {
                levels.push(l);
            }
        }
        self.unlocked_levels = levels;

        let mut actions: Vec<String> = Vec::with_capacity(self.completed_actions.len());
        for a in self.completed_actions.drain(..) {
            if !actions.contains(&a) {
                actions.push(a);
            }
        }
        self.completed_actions = actions;
    }

    // ---------------- Mutations -----------------
    // Each returns whether anything changed. Persistence is the store's job.

    pub fn set_current_level(&mut self, level: Level) -> bool {
        let changed = self.current_level != level;
        self.current_level = level;
        changed
    }

    pub fn unlock_level(&mut self, level: Level) -> bool {
        if self.is_unlocked(level) {
            return false;
        }
        self.unlocked_levels.push(level);
        true
    }

    pub fn complete_action(&mut self, key: &str) -> bool {
        if self.has_completed(key) {
            return false;
        }
        self.completed_actions.push(key.to_string());
        true
    }

    /// Non-finite values are ignored.
    pub fn update_stat(&mut self, key: &str, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        self.player_stats.insert(key.to_string(), value) != Some(value)
    }
}

// ---------------- Reducer Actions -----------------
#[derive(Clone, Debug)]
pub enum ProgressionAction {
    CompleteAction(String),
    UpdateStat { key: String, value: f64 },
    /// Gated navigation; ignored when the target is locked.
    RequestLevel(Level),
    /// Unlock the next level and move to it.
    Advance,
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_starts_on_landing() {
        let s = ProgressionState::default();
        assert_eq!(s.current_level, Level::Landing);
        assert_eq!(s.unlocked_levels, vec![Level::Landing]);
        assert!(s.completed_actions.is_empty());
        assert!(s.player_stats.is_empty());
        assert_eq!(s.version, SCHEMA_VERSION);
    }

    #[test]
    fn level_chain_is_linear() {
        let mut chain = vec![Level::Landing];
        while let Some(next) = chain.last().and_then(|l| l.next()) {
            chain.push(next);
        }
        assert_eq!(chain, Level::ALL.to_vec());
        assert_eq!(Level::Contact.next(), None);
        assert_eq!(Level::Skills.label(), "3");
    }

    #[test]
    fn level_names_parse_back() {
        for l in Level::ALL {
            assert_eq!(l.to_string().parse::<Level>().ok(), Some(l));
        }
        assert!("boss".parse::<Level>().is_err());
    }

    #[test]
    fn action_keys_use_legacy_prefixes() {
        assert_eq!(ActionId::RevealStat("DSA".into()).key(), "stat_DSA");
        assert_eq!(ActionId::UnlockSkill("OS".into()).key(), "skill_OS");
        assert_eq!(ActionId::DefeatProject(2).key(), "project_2");
        assert_eq!(ActionId::VisitCheckpoint(0).key(), "checkpoint_0");
        assert_eq!(ActionId::UnlockChannel("email".into()).key(), "contact_email");
        assert_eq!(ActionId::Custom("easter_egg".into()).key(), "easter_egg");
    }

    #[test]
    fn action_parse_recovers_tags() {
        assert_eq!(
            ActionId::parse("stat_System Design"),
            ActionId::RevealStat("System Design".into())
        );
        assert_eq!(ActionId::parse("project_3"), ActionId::DefeatProject(3));
        assert_eq!(ActionId::parse("checkpoint_1"), ActionId::VisitCheckpoint(1));
        assert_eq!(
            ActionId::parse("contact_github"),
            ActionId::UnlockChannel("github".into())
        );
        // Non-numeric project index is not a project action.
        assert_eq!(
            ActionId::parse("project_abc"),
            ActionId::Custom("project_abc".into())
        );
    }

    #[test]
    fn complete_action_is_idempotent() {
        let mut s = ProgressionState::default();
        assert!(s.complete_action("stat_DSA"));
        assert!(!s.complete_action("stat_DSA"));
        assert_eq!(s.completed_actions, vec!["stat_DSA".to_string()]);
    }

    #[test]
    fn unlock_does_not_duplicate() {
        let mut s = ProgressionState::default();
        assert!(s.unlock_level(Level::About));
        assert!(!s.unlock_level(Level::About));
        assert!(!s.unlock_level(Level::Landing));
        assert_eq!(s.unlocked_levels, vec![Level::Landing, Level::About]);
    }

    #[test]
    fn progress_counts_by_prefix() {
        let mut s = ProgressionState::default();
        s.complete_action("stat_DSA");
        s.complete_action("skill_OS");
        s.complete_action("stat_CS Fundamentals");
        assert_eq!(s.completed_with_prefix("stat_"), vec!["DSA", "CS Fundamentals"]);
        let p = s.level_progress(Level::About, 4);
        assert_eq!(p, LevelProgress { done: 2, total: 4 });
        assert!(!p.is_complete());
        assert_eq!(p.percent(), 50.0);
        assert_eq!(s.level_progress(Level::Landing, 0).percent(), 100.0);
    }

    #[test]
    fn actions_are_typed_views_of_keys() {
        let mut s = ProgressionState::default();
        s.complete_action("project_1");
        s.complete_action("checkpoint_0");
        s.complete_action("konami");
        let typed: Vec<ActionId> = s.actions().collect();
        assert_eq!(
            typed,
            vec![
                ActionId::DefeatProject(1),
                ActionId::VisitCheckpoint(0),
                ActionId::Custom("konami".into()),
            ]
        );
    }

    #[test]
    fn normalize_dedups_and_restores_landing() {
        let mut s = ProgressionState {
            unlocked_levels: vec![Level::About, Level::About, Level::Skills],
            completed_actions: vec!["a".into(), "b".into(), "a".into()],
            ..Default::default()
        };
        s.normalize();
        assert_eq!(
            s.unlocked_levels,
            vec![Level::Landing, Level::About, Level::Skills]
        );
        assert_eq!(s.completed_actions, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn update_stat_overwrites() {
        let mut s = ProgressionState::default();
        assert!(s.update_stat("sessions", 1.0));
        assert!(!s.update_stat("sessions", 1.0));
        assert!(s.update_stat("sessions", 2.0));
        assert_eq!(s.stat("sessions"), Some(2.0));
    }

    #[test]
    fn update_stat_ignores_non_finite() {
        let mut s = ProgressionState::default();
        s.update_stat("ratio", 0.5);
        assert!(!s.update_stat("ratio", f64::INFINITY));
        assert!(!s.update_stat("other", f64::NAN));
        assert_eq!(s.stat("ratio"), Some(0.5));
        assert_eq!(s.stat("other"), None);
    }

    #[test]
    fn bad_stat_entries_are_dropped_on_parse() {
        let raw = r#"{"currentLevel":"about","unlockedLevels":["landing","about"],"completedActions":[],"playerStats":{"ratio":null,"name":"x","sessions":3}}"#;
        let s: ProgressionState = serde_json::from_str(raw).unwrap();
        assert_eq!(s.current_level, Level::About);
        assert_eq!(s.player_stats.len(), 1);
        assert_eq!(s.stat("sessions"), Some(3.0));
    }

    #[test]
    fn legacy_record_without_version_parses() {
        let raw = r#"{"currentLevel":"skills","unlockedLevels":["landing","about","skills"],"completedActions":["stat_DSA"],"playerStats":{}}"#;
        let s: ProgressionState = serde_json::from_str(raw).unwrap();
        assert_eq!(s.version, SCHEMA_VERSION);
        assert_eq!(s.current_level, Level::Skills);
        assert!(s.has_completed("stat_DSA"));
    }
}
