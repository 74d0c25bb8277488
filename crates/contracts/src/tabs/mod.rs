pub mod indicator;
pub mod markup;
pub mod navigation;
pub mod resolver;
pub mod selection;
pub mod types;

pub use indicator::{sync_indicator, IndicatorGeometry, IndicatorStyle, TabMeasure};
pub use navigation::{navigation_target, NavKey};
pub use resolver::resolve_initial_active_tab;
pub use selection::{
    find_active_panel, notify_accepted, AcceptedChange, ChangeRejected, SelectionMode,
    TabSelection,
};
pub use types::{BadgeContent, BadgeVariant, TabDescriptor, TabVariant};
