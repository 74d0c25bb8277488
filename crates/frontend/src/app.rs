use crate::shared::components::tabs::{TabPanel, Tabs};
use contracts::demo::{DemoConfig, DemoPanel, DemoSection};
use leptos::prelude::*;

const DEMO_CONFIG: &str = include_str!("demo_sections.json");

fn demo_panel(panel: &DemoPanel) -> TabPanel {
    let heading = panel.heading.clone();
    let text = panel.text.clone();
    let tab_panel = TabPanel::new(panel.id.clone(), move || {
        view! {
            <h2 class="panel__title">{heading.clone()}</h2>
            <p class="panel__text">{text.clone()}</p>
        }
    });
    match &panel.class {
        Some(class) => tab_panel.with_class(class.clone()),
        None => tab_panel,
    }
}

#[component]
fn DemoSectionView(section: DemoSection) -> impl IntoView {
    let panels: Vec<TabPanel> = section.panels.iter().map(demo_panel).collect();
    let test_id = format!("{}-variant-section", section.key);

    let tabs_view = match section.controlled_start {
        Some(start) => {
            let active = RwSignal::new(start);
            view! {
                <Tabs
                    class="tab-container"
                    tabs=section.tabs
                    panels=panels
                    active_tab=Signal::derive(move || Some(active.get()))
                    on_change=Callback::new(move |tab_id: String| active.set(tab_id))
                    tab_variant=section.tab_variant
                    tab_badge=section.tab_badge
                />
                <p class="section__text">"Active tab: " {move || active.get()}</p>
            }
            .into_any()
        }
        None => view! {
            <Tabs
                class="tab-container"
                tabs=section.tabs
                panels=panels
                tab_variant=section.tab_variant
                tab_badge=section.tab_badge
            />
        }
        .into_any(),
    };

    view! {
        <section class="section" data-testid=test_id>
            <h2 class="section__title">{section.title}</h2>
            <p class="section__text">{section.description}</p>
            {tabs_view}
        </section>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = match DemoConfig::from_json(DEMO_CONFIG) {
        Ok(config) => Some(config),
        Err(err) => {
            log::error!("{:#}", err);
            None
        }
    };

    config.map(|config| {
        view! {
            <header class="header">
                <h1 class="header__title">{config.title}</h1>
            </header>
            <main class="main">
                {config
                    .sections
                    .into_iter()
                    .map(|section| view! { <DemoSectionView section=section /> })
                    .collect_view()}
            </main>
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::tabs::{resolve_initial_active_tab, BadgeContent, TabVariant};

    #[test]
    fn test_demo_config_loads() {
        let config = DemoConfig::from_json(DEMO_CONFIG).unwrap();
        let keys: Vec<_> = config.sections.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, ["pill", "underline", "controlled"]);
    }

    #[test]
    fn test_pill_section_matches_showcase() {
        let config = DemoConfig::from_json(DEMO_CONFIG).unwrap();
        let pill = &config.sections[0];
        assert_eq!(pill.tab_variant, TabVariant::Pill);
        assert_eq!(resolve_initial_active_tab(None, None, &pill.tabs), "home");

        let messages = pill.tabs.iter().find(|t| t.id == "messages").unwrap();
        assert_eq!(messages.badge, Some(BadgeContent::Text("warning".into())));
    }

    #[test]
    fn test_panel_class_is_forwarded() {
        let config = DemoConfig::from_json(DEMO_CONFIG).unwrap();
        let underline = &config.sections[1];
        let team = underline.panels.iter().find(|p| p.id == "team").unwrap();

        let panel = demo_panel(team);
        assert_eq!(panel.id, "team");
        assert_eq!(panel.class.as_deref(), Some("panel--highlight"));
        assert_eq!(
            contracts::tabs::markup::panel_class(panel.class.as_deref()),
            "tabs__panel panel--highlight"
        );

        let home = demo_panel(&config.sections[0].panels[0]);
        assert!(home.class.is_none());
    }

    #[test]
    fn test_controlled_section_starts_on_enabled_tab() {
        let config = DemoConfig::from_json(DEMO_CONFIG).unwrap();
        let controlled = &config.sections[2];
        let start = controlled.controlled_start.as_deref().unwrap();
        let tab = controlled.tabs.iter().find(|t| t.id == start).unwrap();
        assert!(!tab.disabled);
        assert!(controlled.panels.iter().all(|p| p.id != "archive"));
    }
}
