use super::focus::schedule_tab_focus;
use super::indicator::use_tab_indicator;
use super::keyboard::keydown_target;
use super::tab_item::TabItem;
use contracts::tabs::markup::{
    list_class, list_test_id, panel_class, panel_dom_id, root_class, root_test_id, tab_dom_id,
    INDICATOR_CLASS, INDICATOR_TEST_ID, TAB_LIST_LABEL,
};
use contracts::tabs::{
    find_active_panel, notify_accepted, BadgeVariant, TabDescriptor, TabSelection, TabVariant,
};
use leptos::ev;
use leptos::html::{Div, Span};
use leptos::prelude::*;

/// Content shown while the tab with the same id is active.
#[derive(Clone)]
pub struct TabPanel {
    pub id: String,
    pub class: Option<String>,
    pub children: ViewFn,
}

impl TabPanel {
    pub fn new(id: impl Into<String>, children: impl Into<ViewFn>) -> Self {
        Self {
            id: id.into(),
            class: None,
            children: children.into(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

/// Tab strip plus the panel of the active tab.
///
/// Selection is controlled when `active_tab` is given at creation and
/// uncontrolled otherwise; the mode does not change afterwards. In both modes
/// `on_change` receives every accepted change request.
#[component]
pub fn Tabs(
    /// Tabs in display order
    #[prop(into)]
    tabs: Signal<Vec<TabDescriptor>>,
    /// Panels; tabs without a panel show nothing
    #[prop(optional)]
    panels: Vec<TabPanel>,
    /// Controlled active tab id
    #[prop(optional, into)]
    active_tab: MaybeProp<String>,
    /// Initial tab id for uncontrolled mode
    #[prop(optional, into)]
    default_active_tab: Option<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(optional)] tab_variant: TabVariant,
    #[prop(optional)] tab_badge: BadgeVariant,
    /// Additional CSS classes for the root element
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let selection = RwSignal::new(tabs.with_untracked(|tabs| {
        TabSelection::new(
            active_tab.get_untracked().as_deref(),
            default_active_tab.as_deref(),
            tabs,
        )
    }));
    let current_active = Memo::new(move |_| {
        let controlled = active_tab.get();
        selection.with(|s| s.current(controlled.as_deref()).to_string())
    });
    log::debug!(
        "Tabs created in {:?} mode, active '{}'",
        selection.with_untracked(|s| s.mode()),
        current_active.get_untracked()
    );

    let tab_list_ref = NodeRef::<Div>::new();
    let indicator_ref = NodeRef::<Span>::new();

    let request_change = Callback::new(move |tab_id: String| {
        let outcome = tabs.with_untracked(|tabs| {
            selection.try_update(|selection| selection.request_change(tabs, &tab_id))
        });
        let Some(outcome) = outcome else {
            return;
        };
        let notified = notify_accepted(outcome, |tab_id| {
            if let Some(on_change) = on_change {
                on_change.run(tab_id.to_string());
            }
        });
        match notified {
            Ok(accepted) => schedule_tab_focus(tab_list_ref, accepted.tab_id),
            Err(reason) => log::debug!("Tab change ignored: {}", reason),
        }
    });

    if tab_variant.has_indicator() {
        use_tab_indicator(tab_list_ref, indicator_ref, current_active);
    }

    let on_keydown = move |ev: ev::KeyboardEvent| {
        let current = current_active.get_untracked();
        let target = tabs.with_untracked(|tabs| keydown_target(&ev, tabs, &current));
        if let Some(tab_id) = target {
            request_change.run(tab_id);
        }
    };

    let panels = StoredValue::new(panels);
    let active_panel = move || {
        current_active.with(|active| {
            panels.with_value(|panels| find_active_panel(panels, active, |p| p.id.as_str()).cloned())
        })
    };

    view! {
        <div
            class=move || root_class(tab_variant, class.get().as_deref())
            data-testid=root_test_id(tab_variant)
        >
            <div
                node_ref=tab_list_ref
                role="tablist"
                class=list_class(tab_variant)
                aria-label=TAB_LIST_LABEL
                data-testid=list_test_id(tab_variant)
                on:keydown=on_keydown
            >
                <For
                    each=move || tabs.get()
                    key=|tab| tab.clone()
                    children=move |tab: TabDescriptor| {
                        let id = tab.id.clone();
                        let is_active = Signal::derive(move || current_active.with(|active| *active == id));
                        view! {
                            <TabItem
                                tab=tab
                                is_active=is_active
                                tab_variant=tab_variant
                                tab_badge=tab_badge
                                on_select=request_change
                            />
                        }
                    }
                />
                {tab_variant.has_indicator().then(|| view! {
                    <span
                        node_ref=indicator_ref
                        class=INDICATOR_CLASS
                        aria-hidden="true"
                        data-testid=INDICATOR_TEST_ID
                    ></span>
                })}
            </div>

            {move || active_panel().map(|panel| {
                let id = panel.id.clone();
                view! {
                    <div
                        id=panel_dom_id(&id)
                        role="tabpanel"
                        class=panel_class(panel.class.as_deref())
                        aria-labelledby=tab_dom_id(&id)
                        tabindex="0"
                        data-testid=panel_dom_id(&id)
                    >
                        {panel.children.run()}
                    </div>
                }
            })}
        </div>
    }
}
