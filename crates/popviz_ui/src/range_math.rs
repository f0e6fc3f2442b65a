//! Range selector geometry.
//!
//! Pure conversions between domain values, integer track percentages and
//! pointer positions, kept apart from the widget for testability.

use crate::constants::RANGE_OVERLAP_THRESHOLD;

/// An inclusive `[min, max]` pair, used both for the domain a range selector
/// covers and for the sub-range the user selected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeBounds {
    pub min: f64,
    pub max: f64,
}

impl RangeBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `max - min`
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// A usable domain: both ends finite, `min < max`, and a finite span
    pub fn is_valid_domain(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min < self.max
            && self.span().is_finite()
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a value into `[min, max]`
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// Whether `other` lies completely inside these bounds
    pub fn encloses(&self, other: &RangeBounds) -> bool {
        self.min <= other.min && other.min <= other.max && other.max <= self.max
    }
}

/// Map a value to its position along the track, as a whole percentage.
///
/// Rounds half up, so `12.5` becomes `13`. The domain must be valid; callers
/// never hand a degenerate domain to this function.
pub fn value_to_percent(value: f64, domain: RangeBounds) -> f64 {
    let ratio = (value - domain.min) / domain.span();
    (ratio * 100.0 + 0.5).floor()
}

/// Map a track percentage back to a domain value.
pub fn percent_to_value(percent: f64, domain: RangeBounds) -> f64 {
    (domain.span() / 100.0) * percent + domain.min
}

/// Convert a pointer x coordinate to an (unclamped) track percentage.
///
/// Returns `None` while the track has not been measured yet.
pub fn x_to_percent(x: f32, track_x: f32, track_width: f32) -> Option<f64> {
    if !(track_width > 0.0) || !track_width.is_finite() {
        return None;
    }
    Some((x - track_x) as f64 / track_width as f64 * 100.0)
}

/// Convert a track percentage to an x coordinate.
pub fn percent_to_x(percent: f64, track_x: f32, track_width: f32) -> f32 {
    track_x + (percent / 100.0) as f32 * track_width
}

/// Whether the two value labels would collide.
pub fn labels_overlap(selection: RangeBounds, domain: RangeBounds) -> bool {
    (selection.max - selection.min).abs() < RANGE_OVERLAP_THRESHOLD * domain.span()
}
