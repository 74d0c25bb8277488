//! Arrow/Home/End traversal over the enabled tabs of a strip.
//!
//! No state is kept between key presses: the enabled subsequence and the
//! current position within it are recomputed from the tab list every time.

use super::types::TabDescriptor;

/// Navigation intent of a handled key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Next,
    Previous,
    First,
    Last,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` value. Unhandled keys return `None` and
    /// must not be intercepted.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" | "ArrowDown" => Some(NavKey::Next),
            "ArrowLeft" | "ArrowUp" => Some(NavKey::Previous),
            "Home" => Some(NavKey::First),
            "End" => Some(NavKey::Last),
            _ => None,
        }
    }
}

/// Id of the tab that `key` moves to from `current_id`.
///
/// Disabled tabs are skipped and movement wraps around. An active id that is
/// not among the enabled tabs behaves as if positioned just before the first
/// one. Returns `None` when no tab is enabled.
pub fn navigation_target(tabs: &[TabDescriptor], current_id: &str, key: NavKey) -> Option<String> {
    let enabled: Vec<&TabDescriptor> = tabs.iter().filter(|tab| !tab.disabled).collect();
    if enabled.is_empty() {
        return None;
    }

    let count = enabled.len();
    let current = enabled.iter().position(|tab| tab.id == current_id);

    let target = match (key, current) {
        (NavKey::Next, Some(i)) => (i + 1) % count,
        (NavKey::Next, None) => 0,
        (NavKey::Previous, Some(i)) => (i + count - 1) % count,
        (NavKey::Previous, None) => count - 1,
        (NavKey::First, _) => 0,
        (NavKey::Last, _) => count - 1,
    };

    enabled.get(target).map(|tab| tab.id.clone())
}
