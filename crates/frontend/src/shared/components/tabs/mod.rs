//! Tab strip with switchable panels.
//!
//! Two visual variants exist: `pill` and `underline`. The underline variant
//! additionally renders a sliding indicator under the active tab.
//!
//! # Usage
//! ```ignore
//! <Tabs
//!     tabs=vec![TabDescriptor::new("home", "Home"), TabDescriptor::new("profile", "Profile")]
//!     panels=vec![TabPanel::new("home", || view! { <p>"Welcome"</p> })]
//!     tab_variant=TabVariant::Underline
//!     on_change=Callback::new(move |id: String| log::info!("switched to {}", id))
//! />
//! ```

mod dom;
mod focus;
mod indicator;
mod keyboard;
pub mod tab_item;
#[allow(clippy::module_inception)]
pub mod tabs;

pub use tab_item::TabItem;
pub use tabs::{TabPanel, Tabs};
