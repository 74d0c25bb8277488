use super::dom::find_tab_element;
use gloo_timers::future::TimeoutFuture;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Moves keyboard focus to the tab control once the current event turn has
/// finished and the tab list reflects the new selection.
///
/// Later requests simply run after earlier ones, so the last one wins. A tab
/// list or control that is gone by then is skipped.
pub(super) fn schedule_tab_focus(tab_list_ref: NodeRef<Div>, tab_id: String) {
    spawn_local(async move {
        TimeoutFuture::new(0).await;

        let Some(tab_list) = tab_list_ref.try_get_untracked().flatten() else {
            log::trace!("Tab list unmounted, skipping focus of '{}'", tab_id);
            return;
        };

        match find_tab_element(&tab_list, &tab_id) {
            Some(element) => {
                let _ = element.focus();
            }
            None => log::trace!("Tab control '{}' not found, skipping focus", tab_id),
        }
    });
}
