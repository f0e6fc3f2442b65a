//! popviz_ui - a small retained-mode UI toolkit for population dashboards
//!
//! Widgets are built from application state on every update (Elm style), lay
//! themselves out, record draw commands into a headless [`Renderer`], and turn
//! input [`Event`]s into application messages. The centrepiece is the
//! dual-handle [`Range`] selector.

mod application;
mod callback;
pub mod constants;
mod element;
mod event;
mod layout;
pub mod range_math;
mod renderer;
mod state;
mod widget;
mod widgets;

pub use application::{init_logging, Application, PointerGrab, Runtime, Settings};
pub use callback::{Callback, SideEffect};
pub use element::Element;
pub use event::{Event, KeyCode, KeyModifiers, MouseButton};
pub use layout::{Alignment, Bounds, Length, Padding, Size};
pub use range_math::RangeBounds;
pub use renderer::{Color, DrawCommand, Renderer};
pub use state::*;
pub use widget::Widget;

pub use widgets::{
    bar_chart, button, column, range, text, BarChart, Button, Column, Range, Text, Unit,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::application::{Application, Runtime, Settings};
    pub use crate::element::Element;
    pub use crate::event::{Event, KeyCode, KeyModifiers, MouseButton};
    pub use crate::layout::{Alignment, Bounds, Length, Padding, Size};
    pub use crate::range_math::RangeBounds;
    pub use crate::state::*;
    pub use crate::widgets::{bar_chart, button, column, range, text, Unit};
}
