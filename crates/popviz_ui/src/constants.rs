//! Centralized constants for popviz_ui
//!
//! All magic numbers and repeated constants are defined here for consistency
//! and easy maintenance.

use crate::layout::Padding;
use std::time::Duration;

// =============================================================================
// Typography
// =============================================================================

/// Default font size used across most widgets
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Smaller font size for secondary text (value labels, axis ticks)
pub const SMALL_FONT_SIZE: f32 = 12.0;

/// Heading font size
pub const HEADING_FONT_SIZE: f32 = 24.0;

/// Approximate character width as a ratio of font size
/// Used for text measurement approximation
pub const CHAR_WIDTH_FACTOR: f32 = 0.6;

/// Line height as a ratio of font size
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

// =============================================================================
// Layout & Spacing
// =============================================================================

/// Default spacing between children in Column
pub const DEFAULT_SPACING: f32 = 8.0;

/// Standard horizontal padding
pub const PADDING_STANDARD: f32 = 8.0;

/// Comfortable padding (buttons)
pub const PADDING_COMFORTABLE: f32 = 16.0;

/// Default padding for buttons
pub const BUTTON_PADDING: Padding = Padding {
    top: PADDING_STANDARD,
    right: PADDING_COMFORTABLE,
    bottom: PADDING_STANDARD,
    left: PADDING_COMFORTABLE,
};

// =============================================================================
// Range selector
// =============================================================================

/// Total height of the range widget
pub const RANGE_HEIGHT: f32 = 100.0;

/// Width of the draggable track
pub const RANGE_TRACK_WIDTH: f32 = 300.0;

/// Height of the draggable track
pub const RANGE_TRACK_HEIGHT: f32 = 10.0;

/// Width reserved on each side of the track for the editable bound labels
pub const RANGE_BOUND_WIDTH: f32 = 90.0;

/// Handle diameter when idle
pub const RANGE_HANDLE_SIZE: f32 = 18.0;

/// Handle diameter when hovered or dragged
pub const RANGE_HANDLE_SIZE_ACTIVE: f32 = 22.0;

/// Handle offset above the track top edge when idle
pub const RANGE_HANDLE_OFFSET: f32 = 4.0;

/// Handle offset above the track top edge when hovered or dragged
pub const RANGE_HANDLE_OFFSET_ACTIVE: f32 = 6.0;

/// Horizontal shift applied so the handle sits centered on its position
pub const RANGE_HANDLE_MARGIN_LEFT: f32 = 10.0;

/// Vertical distance between the track and the floating value labels
pub const RANGE_VALUE_LABEL_OFFSET: f32 = 30.0;

/// Floating value labels are shifted left by this many percent of the track
pub const RANGE_VALUE_LABEL_SHIFT_PERCENT: f64 = 3.0;

/// Fraction of the domain span below which the two value labels collide
pub const RANGE_OVERLAP_THRESHOLD: f64 = 0.15;

/// Fraction of the domain span that decides which handle is drawn on top
pub const RANGE_Z_ORDER_THRESHOLD: f64 = 0.1;

/// How long the invalid-input warning stays visible
pub const RANGE_WARNING_DURATION: Duration = Duration::from_secs(3);

/// Text shown while the invalid-input warning is visible
pub const RANGE_WARNING_TEXT: &str = "Invalid value";

// =============================================================================
// Bar chart
// =============================================================================

/// Default chart width when shrinking
pub const CHART_DEFAULT_WIDTH: f32 = 640.0;

/// Default chart height
pub const CHART_HEIGHT: f32 = 320.0;

/// Space reserved left of the plot for tick labels and the axis title
pub const CHART_AXIS_WIDTH: f32 = 80.0;

/// Space reserved below the plot for category labels
pub const CHART_LABEL_HEIGHT: f32 = 40.0;

/// Space above the plot
pub const CHART_TOP_MARGIN: f32 = 12.0;

/// Number of tick intervals on the value axis
pub const CHART_TICK_COUNT: usize = 4;

/// Fraction of a category slot occupied by its bar
pub const CHART_BAR_FILL: f32 = 0.8;

/// Bars shorter than this are drawn (and hit-tested) at this height
pub const CHART_MIN_BAR_HEIGHT: f32 = 2.0;

// =============================================================================
// Tolerances & Math
// =============================================================================

/// Epsilon for float comparison (close to integer check)
pub const FLOAT_EPSILON: f64 = 0.0001;

// =============================================================================
// Helper Functions
// =============================================================================

/// Calculate approximate character width for a given font size
#[inline]
pub fn char_width(font_size: f32) -> f32 {
    font_size * CHAR_WIDTH_FACTOR
}

/// Calculate approximate line height for a given font size
#[inline]
pub fn line_height(font_size: f32) -> f32 {
    font_size * LINE_HEIGHT_FACTOR
}

/// Approximate rendered width of a string
#[inline]
pub fn text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * char_width(font_size)
}

/// Format a number, avoiding excessive decimal places
/// If close to integer, displays as integer
/// Otherwise displays with up to 3 decimals, trimming trailing zeros
pub fn format_number(value: f64) -> String {
    if (value - value.round()).abs() < FLOAT_EPSILON {
        format!("{}", value.round() as i64)
    } else {
        let formatted = format!("{:.3}", value);
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

/// Format a value with exactly two decimals; NaN renders as `NaN`
pub fn format_fixed2(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{:.2}", value)
    }
}
