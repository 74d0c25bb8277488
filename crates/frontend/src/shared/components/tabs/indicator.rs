//! Sliding underline under the active tab.

use super::dom::find_tab_element;
use contracts::tabs::{sync_indicator, IndicatorGeometry, IndicatorStyle, TabMeasure};
use leptos::ev;
use leptos::html::{Div, Span};
use leptos::prelude::*;
use web_sys::{Element, HtmlElement};

struct DomTabList<'a>(&'a Element);

impl TabMeasure for DomTabList<'_> {
    fn measure_tab(&self, tab_id: &str) -> Option<IndicatorGeometry> {
        find_tab_element(self.0, tab_id)
            .map(|tab| IndicatorGeometry::new(tab.offset_left() as f64, tab.offset_width() as f64))
    }
}

struct DomIndicator<'a>(&'a HtmlElement);

impl IndicatorStyle for DomIndicator<'_> {
    fn apply_geometry(&self, geometry: &IndicatorGeometry) {
        let style = self.0.style();
        let _ = style.set_property("transform", &geometry.transform());
        let _ = style.set_property("width", &geometry.width_css());
    }
}

fn position_indicator(
    tab_list: Option<web_sys::HtmlDivElement>,
    indicator: Option<web_sys::HtmlSpanElement>,
    active_id: &str,
) {
    let tab_list = tab_list.as_ref().map(|list| DomTabList(list));
    let indicator = indicator.as_ref().map(|indicator| DomIndicator(indicator));
    if sync_indicator(tab_list.as_ref(), indicator.as_ref(), active_id).is_none() {
        log::trace!("Indicator for '{}' not positioned, keeping previous geometry", active_id);
    }
}

/// Keeps the indicator aligned with the active tab: on every active id
/// change and on every window resize. The resize subscription lives as long
/// as the calling component.
pub(super) fn use_tab_indicator(
    tab_list_ref: NodeRef<Div>,
    indicator_ref: NodeRef<Span>,
    active_tab: Memo<String>,
) {
    Effect::new(move |_| {
        let active = active_tab.get();
        position_indicator(tab_list_ref.get(), indicator_ref.get(), &active);
    });

    let handle = window_event_listener(ev::resize, move |_| {
        if let Some(active) = active_tab.try_get_untracked() {
            position_indicator(
                tab_list_ref.try_get_untracked().flatten(),
                indicator_ref.try_get_untracked().flatten(),
                &active,
            );
        }
    });
    on_cleanup(move || handle.remove());
}
