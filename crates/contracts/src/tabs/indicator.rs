/// Horizontal placement of the underline indicator, in CSS pixels,
/// relative to the tab list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IndicatorGeometry {
    pub offset: f64,
    pub width: f64,
}

impl IndicatorGeometry {
    pub fn new(offset: f64, width: f64) -> Self {
        Self { offset, width }
    }

    /// Value for the indicator's `transform` style property.
    pub fn transform(&self) -> String {
        format!("translateX({}px)", self.offset)
    }

    /// Value for the indicator's `width` style property.
    pub fn width_css(&self) -> String {
        format!("{}px", self.width)
    }
}

/// A mounted tab list that can report where one of its tabs sits.
pub trait TabMeasure {
    fn measure_tab(&self, tab_id: &str) -> Option<IndicatorGeometry>;
}

/// A mounted indicator element.
pub trait IndicatorStyle {
    fn apply_geometry(&self, geometry: &IndicatorGeometry);
}

/// Moves the indicator under the active tab and returns what was written.
///
/// Writes nothing when the tab list, the indicator or the active tab is
/// missing, so the indicator keeps its previous geometry.
pub fn sync_indicator<L: TabMeasure, I: IndicatorStyle>(
    tab_list: Option<&L>,
    indicator: Option<&I>,
    active_id: &str,
) -> Option<IndicatorGeometry> {
    let (tab_list, indicator) = (tab_list?, indicator?);
    let geometry = tab_list.measure_tab(active_id)?;
    indicator.apply_geometry(&geometry);
    Some(geometry)
}
