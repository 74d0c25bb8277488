use contracts::tabs::{navigation_target, NavKey, TabDescriptor};
use web_sys::KeyboardEvent;

/// Resolves a keydown on the tab list to the tab it should activate.
///
/// Handled keys always have their default action suppressed, even when no
/// tab is enabled and nothing is returned. Other keys pass through untouched.
pub(super) fn keydown_target(
    ev: &KeyboardEvent,
    tabs: &[TabDescriptor],
    current_id: &str,
) -> Option<String> {
    let key = NavKey::from_key(&ev.key())?;
    ev.prevent_default();

    let target = navigation_target(tabs, current_id, key);
    if target.is_none() {
        log::debug!("No enabled tabs to navigate with {:?}", key);
    }
    target
}
