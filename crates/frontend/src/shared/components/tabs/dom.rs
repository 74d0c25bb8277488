use contracts::tabs::markup::tab_selector;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// Tab control with the given tab id inside `tab_list`, if rendered.
pub(super) fn find_tab_element(tab_list: &Element, tab_id: &str) -> Option<HtmlElement> {
    tab_list
        .query_selector(&tab_selector(tab_id))
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}
