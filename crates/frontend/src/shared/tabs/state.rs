//! Single-selection state machine behind the [`TabGroup`](super::TabGroup)
//! widget. Pure data, no DOM types, so the selection and keyboard rules are
//! testable off the browser.

use std::collections::HashMap;

use thiserror::Error;

/// One selectable control in a tab group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: String,
    pub controls_panel_id: String,
    /// Accessible text of the control, carried into announcements.
    pub label: String,
    /// Disabled tabs are skipped by keyboard cycling but stay directly
    /// activatable.
    pub disabled: bool,
}

/// One content region, exposed only while its owning tab is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub id: String,
    pub labelled_by_tab_id: String,
}

/// Construction-time validation failures. Reported once, at group setup;
/// a group that fails validation never becomes interactive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("tab group has no tabs")]
    Empty,
    #[error("duplicate tab id `{0}`")]
    DuplicateTabId(String),
    #[error("tab `{tab_id}` controls missing panel `{panel_id}`")]
    MissingPanel { tab_id: String, panel_id: String },
}

/// Runtime request for a tab id outside the group.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tab id `{0}`")]
pub struct UnknownTab(pub String);

/// Keyboard commands recognized while a tab holds focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Next,
    Prev,
    First,
    Last,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent::key` value. Unrecognized keys map to
    /// `None` and must not be intercepted by the caller.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" | "ArrowDown" => Some(Self::Next),
            "ArrowLeft" | "ArrowUp" => Some(Self::Prev),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            _ => None,
        }
    }
}

/// Outcome of a state-changing [`TabGroupState::activate`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub tab_id: String,
    pub panel_id: String,
    /// Label of the newly active tab, for the announcer.
    pub label: String,
}

/// Aggregate owning the tab/panel mapping and the single active tab.
///
/// Invariant: after construction succeeds, exactly one tab is active at
/// all times. Tabs and panels are immutable after construction; only the
/// active id changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabGroupState {
    tabs: Vec<Tab>,
    panels: HashMap<String, Panel>,
    active_tab_id: Option<String>,
}

impl TabGroupState {
    /// Validate the ordered (tab, panel) pairs and activate the initial
    /// tab: `default_tab` when it names a known tab, the first tab
    /// otherwise.
    pub fn new(pairs: Vec<(Tab, Panel)>, default_tab: Option<&str>) -> Result<Self, ConfigError> {
        if pairs.is_empty() {
            return Err(ConfigError::Empty);
        }

        let mut tabs: Vec<Tab> = Vec::with_capacity(pairs.len());
        let mut panels = HashMap::with_capacity(pairs.len());
        for (tab, panel) in pairs {
            if tabs.iter().any(|known| known.id == tab.id) {
                return Err(ConfigError::DuplicateTabId(tab.id));
            }
            panels.insert(panel.id.clone(), panel);
            tabs.push(tab);
        }
        for tab in &tabs {
            if !panels.contains_key(&tab.controls_panel_id) {
                return Err(ConfigError::MissingPanel {
                    tab_id: tab.id.clone(),
                    panel_id: tab.controls_panel_id.clone(),
                });
            }
        }

        let initial = default_tab
            .and_then(|id| tabs.iter().find(|tab| tab.id == id))
            .unwrap_or(&tabs[0])
            .id
            .clone();

        let mut state = Self {
            tabs,
            panels,
            active_tab_id: None,
        };
        // Initial activation takes the same path as user activation.
        let _ = state.activate(&initial);
        Ok(state)
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn panel(&self, panel_id: &str) -> Option<&Panel> {
        self.panels.get(panel_id)
    }

    pub fn active_tab_id(&self) -> Option<&str> {
        self.active_tab_id.as_deref()
    }

    pub fn is_active(&self, tab_id: &str) -> bool {
        self.active_tab_id.as_deref() == Some(tab_id)
    }

    fn index_of(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id == tab_id)
    }

    /// Switch the active tab. `Ok(Some(_))` on a state change, `Ok(None)`
    /// when the tab is already active, `Err` when the id is unknown; the
    /// previous selection survives anything but a successful switch.
    pub fn activate(&mut self, tab_id: &str) -> Result<Option<Activation>, UnknownTab> {
        let tab = self
            .tabs
            .iter()
            .find(|tab| tab.id == tab_id)
            .ok_or_else(|| UnknownTab(tab_id.to_string()))?;
        if self.is_active(tab_id) {
            return Ok(None);
        }
        let activation = Activation {
            tab_id: tab.id.clone(),
            panel_id: tab.controls_panel_id.clone(),
            label: tab.label.clone(),
        };
        self.active_tab_id = Some(tab.id.clone());
        Ok(Some(activation))
    }

    /// Resolve the tab a navigation key should move to, starting from the
    /// tab currently holding focus. Arrows wrap around the ends; disabled
    /// tabs are skipped. `None` when no enabled tab answers the key.
    pub fn key_target(&self, from_tab_id: &str, key: NavKey) -> Option<&Tab> {
        let from = self.index_of(from_tab_id)?;
        let len = self.tabs.len();
        let order: Vec<usize> = match key {
            NavKey::Next => (1..=len).map(|step| (from + step) % len).collect(),
            NavKey::Prev => (1..=len).map(|step| (from + len - step) % len).collect(),
            NavKey::First => (0..len).collect(),
            NavKey::Last => (0..len).rev().collect(),
        };
        order
            .into_iter()
            .map(|index| &self.tabs[index])
            .find(|tab| !tab.disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab(id: &str, panel_id: &str) -> Tab {
        Tab {
            id: id.to_string(),
            controls_panel_id: panel_id.to_string(),
            label: id.to_uppercase(),
            disabled: false,
        }
    }

    fn pair(id: &str, panel_id: &str) -> (Tab, Panel) {
        (
            tab(id, panel_id),
            Panel {
                id: panel_id.to_string(),
                labelled_by_tab_id: id.to_string(),
            },
        )
    }

    fn abc() -> TabGroupState {
        TabGroupState::new(vec![pair("a", "pa"), pair("b", "pb"), pair("c", "pc")], None).unwrap()
    }

    fn assert_only_active(state: &TabGroupState, expected: &str) {
        for tab in state.tabs() {
            assert_eq!(state.is_active(&tab.id), tab.id == expected);
        }
        assert_eq!(state.active_tab_id(), Some(expected));
    }

    #[test]
    fn first_tab_is_active_after_construction() {
        assert_only_active(&abc(), "a");
    }

    #[test]
    fn default_mark_overrides_first_tab() {
        let state =
            TabGroupState::new(vec![pair("a", "pa"), pair("b", "pb")], Some("b")).unwrap();
        assert_only_active(&state, "b");
    }

    #[test]
    fn unknown_default_falls_back_to_first_tab() {
        let state =
            TabGroupState::new(vec![pair("a", "pa"), pair("b", "pb")], Some("zzz")).unwrap();
        assert_only_active(&state, "a");
    }

    #[test]
    fn empty_group_is_rejected() {
        assert_eq!(TabGroupState::new(vec![], None), Err(ConfigError::Empty));
    }

    #[test]
    fn duplicate_tab_id_is_rejected() {
        let result = TabGroupState::new(vec![pair("a", "pa"), pair("a", "pb")], None);
        assert_eq!(result, Err(ConfigError::DuplicateTabId("a".to_string())));
    }

    #[test]
    fn dangling_panel_reference_is_rejected() {
        let broken = (tab("b", "nope"), Panel {
            id: "pb".to_string(),
            labelled_by_tab_id: "b".to_string(),
        });
        let result = TabGroupState::new(vec![pair("a", "pa"), broken], None);
        assert_eq!(
            result,
            Err(ConfigError::MissingPanel {
                tab_id: "b".to_string(),
                panel_id: "nope".to_string(),
            })
        );
    }

    #[test]
    fn activate_moves_the_single_active_marker() {
        let mut state = abc();
        let activation = state.activate("b").unwrap().unwrap();
        assert_eq!(activation.tab_id, "b");
        assert_eq!(activation.panel_id, "pb");
        assert_eq!(activation.label, "B");
        assert_only_active(&state, "b");
    }

    #[test]
    fn activate_is_idempotent() {
        let mut state = abc();
        state.activate("c").unwrap();
        assert_eq!(state.activate("c"), Ok(None));
        assert_only_active(&state, "c");
    }

    #[test]
    fn activate_unknown_id_preserves_state() {
        let mut state = abc();
        let result = state.activate("nonexistent");
        assert_eq!(result, Err(UnknownTab("nonexistent".to_string())));
        assert_only_active(&state, "a");
    }

    #[test]
    fn every_activation_keeps_exactly_one_active() {
        let mut state = abc();
        for id in ["b", "c", "a", "c", "b", "b"] {
            let _ = state.activate(id);
            let active: Vec<_> = state
                .tabs()
                .iter()
                .filter(|tab| state.is_active(&tab.id))
                .collect();
            assert_eq!(active.len(), 1);
        }
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let state = abc();
        assert_eq!(state.key_target("c", NavKey::Next).unwrap().id, "a");
    }

    #[test]
    fn prev_from_first_wraps_to_last() {
        let state = abc();
        assert_eq!(state.key_target("a", NavKey::Prev).unwrap().id, "c");
    }

    #[test]
    fn home_and_end_reach_the_endpoints() {
        let state = abc();
        assert_eq!(state.key_target("b", NavKey::First).unwrap().id, "a");
        assert_eq!(state.key_target("b", NavKey::Last).unwrap().id, "c");
    }

    #[test]
    fn arrows_skip_disabled_tabs() {
        let mut pairs = vec![pair("a", "pa"), pair("b", "pb"), pair("c", "pc")];
        pairs[1].0.disabled = true;
        let state = TabGroupState::new(pairs, None).unwrap();
        assert_eq!(state.key_target("a", NavKey::Next).unwrap().id, "c");
        assert_eq!(state.key_target("c", NavKey::Prev).unwrap().id, "a");
    }

    #[test]
    fn endpoints_skip_disabled_tabs() {
        let mut pairs = vec![pair("a", "pa"), pair("b", "pb"), pair("c", "pc")];
        pairs[0].0.disabled = true;
        pairs[2].0.disabled = true;
        let state = TabGroupState::new(pairs, Some("b")).unwrap();
        assert_eq!(state.key_target("b", NavKey::First).unwrap().id, "b");
        assert_eq!(state.key_target("b", NavKey::Last).unwrap().id, "b");
    }

    #[test]
    fn disabled_tab_is_still_directly_activatable() {
        let mut pairs = vec![pair("a", "pa"), pair("b", "pb")];
        pairs[1].0.disabled = true;
        let mut state = TabGroupState::new(pairs, None).unwrap();
        assert!(state.activate("b").unwrap().is_some());
        assert_only_active(&state, "b");
    }

    #[test]
    fn key_mapping_covers_the_aria_tab_keys() {
        assert_eq!(NavKey::from_key("ArrowRight"), Some(NavKey::Next));
        assert_eq!(NavKey::from_key("ArrowDown"), Some(NavKey::Next));
        assert_eq!(NavKey::from_key("ArrowLeft"), Some(NavKey::Prev));
        assert_eq!(NavKey::from_key("ArrowUp"), Some(NavKey::Prev));
        assert_eq!(NavKey::from_key("Home"), Some(NavKey::First));
        assert_eq!(NavKey::from_key("End"), Some(NavKey::Last));
        assert_eq!(NavKey::from_key("Enter"), None);
        assert_eq!(NavKey::from_key("Tab"), None);
    }

    #[test]
    fn panels_keep_their_owning_tab_backreference() {
        let state = abc();
        assert_eq!(state.panel("pb").unwrap().labelled_by_tab_id, "b");
        assert!(state.panel("nope").is_none());
    }
}
