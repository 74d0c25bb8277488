//! DOM ids, ARIA labels and CSS class names of the tab widget.
//!
//! Classes follow BEM: `tabs`, `tabs__list`, `tabs__panel`, `tabs__indicator`
//! on the container side and `tab-item`, `tab-item__badge` on the item side.

use super::types::{BadgeVariant, TabVariant};

pub const TAB_LIST_LABEL: &str = "Tab navigation";
pub const INDICATOR_CLASS: &str = "tabs__indicator";
pub const INDICATOR_TEST_ID: &str = "tab-indicator";

pub fn tab_dom_id(tab_id: &str) -> String {
    format!("tab-{}", tab_id)
}

pub fn panel_dom_id(tab_id: &str) -> String {
    format!("panel-{}", tab_id)
}

/// Selector matching a tab control inside its tab list. Attribute form so
/// that ids which are not valid CSS identifiers still match.
pub fn tab_selector(tab_id: &str) -> String {
    format!("[id=\"{}\"]", tab_dom_id(tab_id).replace('\\', "\\\\").replace('"', "\\\""))
}

pub fn badge_test_id(tab_id: &str) -> String {
    format!("badge-{}", tab_id)
}

pub fn badge_aria_label(content: &impl std::fmt::Display) -> String {
    format!("Badge: {}", content)
}

pub fn root_test_id(variant: TabVariant) -> String {
    format!("tabs-{}", variant.as_str())
}

pub fn list_test_id(variant: TabVariant) -> String {
    format!("tablist-{}", variant.as_str())
}

fn join_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> String {
    classes
        .into_iter()
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn root_class(variant: TabVariant, extra: Option<&str>) -> String {
    let variant_class = format!("tabs--{}", variant.as_str());
    let animated = if variant.has_indicator() { "tabs--animated" } else { "" };
    join_classes(["tabs", variant_class.as_str(), animated, extra.unwrap_or_default()])
}

pub fn list_class(variant: TabVariant) -> String {
    format!("tabs__list tabs__list--{}", variant.as_str())
}

pub fn item_class(variant: TabVariant, active: bool, disabled: bool) -> String {
    let variant_class = format!("tab-item--{}", variant.as_str());
    join_classes([
        "tab-item",
        variant_class.as_str(),
        if active { "tab-item--active" } else { "" },
        if disabled { "tab-item--disabled" } else { "" },
    ])
}

pub fn badge_class(variant: BadgeVariant) -> String {
    format!("tab-item__badge tab-item__badge--{}", variant.as_str())
}

pub fn panel_class(extra: Option<&str>) -> String {
    join_classes(["tabs__panel", extra.unwrap_or_default()])
}
