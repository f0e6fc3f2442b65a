//! Application message types for popviz.
//!
//! All UI events and actions are represented as messages in the Elm architecture style.

use popviz_ui::{BarChartState, RangeState};

/// Messages that can be sent to update application state.
#[derive(Debug, Clone)]
pub enum Message {
    /// Range filter state changed (drag, hover, edit, warning countdown)
    RangeChanged(RangeState),
    /// Chart hover changed
    ChartHover(BarChartState),
    /// A bar of the visible chart was clicked
    SelectBar(usize),
    /// Back button in the countries view
    BackToContinents,
}
