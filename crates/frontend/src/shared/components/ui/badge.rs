use contracts::tabs::markup::{badge_aria_label, badge_class};
use contracts::tabs::{BadgeContent, BadgeVariant};
use leptos::prelude::*;

/// Badge with a short text or number
#[component]
pub fn Badge(
    /// Badge variant: neutral (default), positive or negative
    #[prop(optional)]
    variant: BadgeVariant,
    /// Badge content
    #[prop(into)]
    content: BadgeContent,
    /// Value of the `data-testid` attribute
    #[prop(optional, into)]
    test_id: Option<String>,
) -> impl IntoView {
    let aria_label = badge_aria_label(&content);

    view! {
        <span class=badge_class(variant) aria-label=aria_label data-testid=test_id>
            {content.to_string()}
        </span>
    }
}
