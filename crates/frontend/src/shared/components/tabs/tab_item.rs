use crate::shared::components::ui::Badge;
use contracts::tabs::markup::{badge_test_id, item_class, panel_dom_id, tab_dom_id};
use contracts::tabs::{BadgeVariant, TabDescriptor, TabVariant};
use leptos::prelude::*;

/// A single control of the tab strip.
///
/// Clicking an enabled item reports its id through `on_select`. Disabled
/// items are rendered with the `disabled` attribute and never report.
#[component]
pub fn TabItem(
    tab: TabDescriptor,
    /// Whether this item is the current tab
    #[prop(into)]
    is_active: Signal<bool>,
    #[prop(optional)] tab_variant: TabVariant,
    #[prop(optional)] tab_badge: BadgeVariant,
    /// Receives the tab id on click
    on_select: Callback<String>,
) -> impl IntoView {
    let disabled = tab.disabled;
    let dom_id = tab_dom_id(&tab.id);
    let controls = panel_dom_id(&tab.id);
    let badge = tab.visible_badge().cloned().map(|content| {
        view! { <Badge variant=tab_badge content=content test_id=badge_test_id(&tab.id) /> }
    });

    let id_for_click = tab.id.clone();
    let on_click = move |_| {
        if !disabled {
            on_select.run(id_for_click.clone());
        }
    };

    view! {
        <button
            id=dom_id.clone()
            role="tab"
            type="button"
            class=move || item_class(tab_variant, is_active.get(), disabled)
            disabled=disabled
            aria-selected=move || is_active.get().to_string()
            aria-disabled=disabled.to_string()
            aria-controls=controls
            data-testid=dom_id
            on:click=on_click
        >
            {tab.label}
            {badge}
        </button>
    }
}
