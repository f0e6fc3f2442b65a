// Widget implementations

mod bar_chart;
mod button;
mod column;
pub(crate) mod container_helpers;
mod range;
mod text;

pub use bar_chart::{bar_chart, BarChart};
pub use button::{button, Button};
pub use column::{column, Column};
pub use range::{range, Range, Unit};
pub use text::{text, Text};
