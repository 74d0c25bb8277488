//! Active-tab ownership for one tab set.
//!
//! Exactly one party owns the selection for the lifetime of a tab set: the
//! caller (controlled) or the tab set itself (uncontrolled). Accepted change
//! requests are always reported back to the caller, whichever owns it.

use super::resolver::resolve_initial_active_tab;
use super::types::TabDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Controlled,
    Uncontrolled,
}

impl SelectionMode {
    pub fn from_controlled(controlled: Option<&str>) -> Self {
        if controlled.is_some() {
            SelectionMode::Controlled
        } else {
            SelectionMode::Uncontrolled
        }
    }
}

/// Why a change request was ignored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChangeRejected {
    #[error("no tab with id '{0}'")]
    UnknownTab(String),
    #[error("tab '{0}' is disabled")]
    DisabledTab(String),
}

/// A change request that passed validation. The caller notifies its
/// `on_change` listener with `tab_id` and moves focus to that tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedChange {
    pub tab_id: String,
    pub mode: SelectionMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSelection {
    mode: SelectionMode,
    held: String,
}

impl TabSelection {
    pub fn new(controlled: Option<&str>, default: Option<&str>, tabs: &[TabDescriptor]) -> Self {
        Self {
            mode: SelectionMode::from_controlled(controlled),
            held: resolve_initial_active_tab(controlled, default, tabs),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Current active id. In controlled mode this is always the caller's
    /// value; a controlled tab set that lost its value reports an empty id.
    pub fn current<'a>(&'a self, controlled: Option<&'a str>) -> &'a str {
        match self.mode {
            SelectionMode::Controlled => controlled.unwrap_or_default(),
            SelectionMode::Uncontrolled => &self.held,
        }
    }

    pub fn request_change(
        &mut self,
        tabs: &[TabDescriptor],
        tab_id: &str,
    ) -> Result<AcceptedChange, ChangeRejected> {
        let tab = tabs
            .iter()
            .find(|tab| tab.id == tab_id)
            .ok_or_else(|| ChangeRejected::UnknownTab(tab_id.to_string()))?;
        if tab.disabled {
            return Err(ChangeRejected::DisabledTab(tab_id.to_string()));
        }

        if self.mode == SelectionMode::Uncontrolled {
            self.held = tab_id.to_string();
        }

        Ok(AcceptedChange {
            tab_id: tab_id.to_string(),
            mode: self.mode,
        })
    }
}

/// Reports an accepted change to `notify` exactly once; rejected requests
/// are passed through without notification.
pub fn notify_accepted(
    outcome: Result<AcceptedChange, ChangeRejected>,
    notify: impl FnOnce(&str),
) -> Result<AcceptedChange, ChangeRejected> {
    if let Ok(accepted) = &outcome {
        notify(&accepted.tab_id);
    }
    outcome
}

/// First panel whose id equals the active id.
pub fn find_active_panel<'a, P>(
    panels: &'a [P],
    active_id: &str,
    panel_id: impl Fn(&P) -> &str,
) -> Option<&'a P> {
    panels.iter().find(|panel| panel_id(panel) == active_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs() -> Vec<TabDescriptor> {
        vec![
            TabDescriptor::new("tab1", "Tab 1"),
            TabDescriptor::new("tab2", "Tab 2"),
            TabDescriptor::new("tab3", "Tab 3").disabled(),
        ]
    }

    #[test]
    fn test_uncontrolled_change_updates_state() {
        let tabs = tabs();
        let mut selection = TabSelection::new(None, None, &tabs);
        assert_eq!(selection.mode(), SelectionMode::Uncontrolled);
        assert_eq!(selection.current(None), "tab1");

        let accepted = selection.request_change(&tabs, "tab2").unwrap();
        assert_eq!(accepted.tab_id, "tab2");
        assert_eq!(selection.current(None), "tab2");
    }

    #[test]
    fn test_controlled_change_only_reports() {
        let tabs = tabs();
        let mut selection = TabSelection::new(Some("tab2"), None, &tabs);
        assert_eq!(selection.mode(), SelectionMode::Controlled);

        let accepted = selection.request_change(&tabs, "tab1").unwrap();
        assert_eq!(
            accepted,
            AcceptedChange {
                tab_id: "tab1".into(),
                mode: SelectionMode::Controlled
            }
        );
        assert_eq!(selection.current(Some("tab2")), "tab2");
    }

    #[test]
    fn test_controlled_follows_caller_value() {
        let tabs = tabs();
        let selection = TabSelection::new(Some("tab1"), None, &tabs);
        assert_eq!(selection.current(Some("tab2")), "tab2");
        assert_eq!(selection.current(Some("")), "");
    }

    #[test]
    fn test_disabled_and_unknown_are_rejected() {
        let tabs = tabs();
        let mut selection = TabSelection::new(None, None, &tabs);

        assert_eq!(
            selection.request_change(&tabs, "tab3"),
            Err(ChangeRejected::DisabledTab("tab3".into()))
        );
        assert_eq!(
            selection.request_change(&tabs, "nope"),
            Err(ChangeRejected::UnknownTab("nope".into()))
        );
        assert_eq!(selection.current(None), "tab1");
    }

    #[test]
    fn test_default_active_tab() {
        let tabs = tabs();
        let selection = TabSelection::new(None, Some("tab2"), &tabs);
        assert_eq!(selection.current(None), "tab2");
    }

    #[test]
    fn test_badge_tab_becomes_active_on_request() {
        let tabs = vec![
            TabDescriptor::new("home", "Home"),
            TabDescriptor::new("profile", "Profile"),
            TabDescriptor::new("messages", "Messages").with_badge("warning"),
            TabDescriptor::new("settings", "Settings"),
        ];
        let mut selection = TabSelection::new(None, None, &tabs);
        assert_eq!(selection.current(None), "home");

        selection.request_change(&tabs, "messages").unwrap();
        assert_eq!(selection.current(None), "messages");
        let active = tabs.iter().find(|t| t.id == "messages").unwrap();
        assert_eq!(active.visible_badge().map(|b| b.to_string()).as_deref(), Some("warning"));
    }

    #[test]
    fn test_controlled_click_notifies_once_and_keeps_panel() {
        let tabs = tabs();
        let panels = vec![("tab1", "Panel 1"), ("tab2", "Panel 2")];
        let controlled = Some("tab2");
        let mut selection = TabSelection::new(controlled, None, &tabs);
        let mut notified = Vec::new();

        let outcome = notify_accepted(selection.request_change(&tabs, "tab1"), |id| {
            notified.push(id.to_string())
        });

        assert!(outcome.is_ok());
        assert_eq!(notified, ["tab1"]);
        let active = selection.current(controlled);
        assert_eq!(find_active_panel(&panels, active, |p| p.0).map(|p| p.1), Some("Panel 2"));
    }

    #[test]
    fn test_rejected_requests_do_not_notify() {
        let tabs = tabs();
        let mut selection = TabSelection::new(None, None, &tabs);
        let mut calls = 0;

        for id in ["tab3", "missing"] {
            let outcome = notify_accepted(selection.request_change(&tabs, id), |_| calls += 1);
            assert!(outcome.is_err());
        }
        assert_eq!(calls, 0);
        assert_eq!(selection.current(None), "tab1");
    }

    #[test]
    fn test_one_notification_per_accepted_request() {
        let tabs = tabs();
        let mut selection = TabSelection::new(None, None, &tabs);
        let mut notified = Vec::new();

        for id in ["tab2", "tab3", "tab1", "tab2"] {
            let _ = notify_accepted(selection.request_change(&tabs, id), |id| {
                notified.push(id.to_string())
            });
        }
        assert_eq!(notified, ["tab2", "tab1", "tab2"]);
        assert_eq!(selection.current(None), "tab2");
    }

    #[test]
    fn test_find_active_panel() {
        let panels = vec![("a", "panel a")];
        assert_eq!(find_active_panel(&panels, "a", |p| p.0).map(|p| p.1), Some("panel a"));
        assert!(find_active_panel(&panels, "b", |p| p.0).is_none());
        assert!(find_active_panel(&panels, "", |p| p.0).is_none());
    }
}
