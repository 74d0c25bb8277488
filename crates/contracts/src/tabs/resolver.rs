use super::types::TabDescriptor;

/// Picks the tab that is active when a tab set mounts.
///
/// A controlled value wins verbatim, even when empty or unknown. Otherwise a
/// non-empty default wins verbatim. Otherwise the first enabled tab, then the
/// first tab regardless of state, then the empty string.
pub fn resolve_initial_active_tab(
    controlled: Option<&str>,
    default: Option<&str>,
    tabs: &[TabDescriptor],
) -> String {
    if let Some(controlled) = controlled {
        return controlled.to_string();
    }
    if let Some(default) = default.filter(|d| !d.is_empty()) {
        return default.to_string();
    }
    tabs.iter()
        .find(|tab| !tab.disabled)
        .or_else(|| tabs.first())
        .map(|tab| tab.id.clone())
        .unwrap_or_default()
}
