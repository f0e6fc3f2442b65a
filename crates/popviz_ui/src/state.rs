//! Widget state types for stateful widgets
//!
//! Widgets are rebuilt from the application's view on every frame, so anything
//! that must survive between frames lives in one of these records. The
//! application owns the record, hands a copy to the widget when building the
//! view, and stores the updated copy the widget sends back in its message.

use std::time::Duration;

use crate::constants::{RANGE_WARNING_DURATION, RANGE_Z_ORDER_THRESHOLD};
use crate::range_math::{self, RangeBounds};

/// One of the two range handles (or the bound label on the same side)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    Min,
    Max,
}

/// Interaction state machine of the range selector.
///
/// Exactly one state is active; `Idle` is both the initial state and the
/// state between gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeInteraction {
    #[default]
    Idle,
    DraggingMin,
    DraggingMax,
    EditingMin,
    EditingMax,
}

impl RangeInteraction {
    fn dragging_of(handle: Handle) -> Self {
        match handle {
            Handle::Min => RangeInteraction::DraggingMin,
            Handle::Max => RangeInteraction::DraggingMax,
        }
    }

    fn editing_of(handle: Handle) -> Self {
        match handle {
            Handle::Min => RangeInteraction::EditingMin,
            Handle::Max => RangeInteraction::EditingMax,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, RangeInteraction::Idle)
    }

    /// The handle being dragged, if any
    pub fn dragging(&self) -> Option<Handle> {
        match self {
            RangeInteraction::DraggingMin => Some(Handle::Min),
            RangeInteraction::DraggingMax => Some(Handle::Max),
            _ => None,
        }
    }

    /// The bound being edited, if any
    pub fn editing(&self) -> Option<Handle> {
        match self {
            RangeInteraction::EditingMin => Some(Handle::Min),
            RangeInteraction::EditingMax => Some(Handle::Max),
            _ => None,
        }
    }
}

/// Which handle the pointer is over. Purely visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeHover {
    #[default]
    None,
    Min,
    Max,
}

impl RangeHover {
    fn is(&self, handle: Handle) -> bool {
        matches!(
            (self, handle),
            (RangeHover::Min, Handle::Min) | (RangeHover::Max, Handle::Max)
        )
    }
}

/// A single cancellable delayed hide.
///
/// Arming while already armed replaces the pending deadline instead of
/// stacking a second one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WarningTimer {
    remaining: Option<Duration>,
}

impl WarningTimer {
    /// Show the warning for `duration`, replacing any pending hide
    pub fn arm(&mut self, duration: Duration) {
        self.remaining = Some(duration);
    }

    /// Hide immediately
    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    pub fn is_visible(&self) -> bool {
        self.remaining.is_some()
    }

    /// Time left before the warning hides
    pub fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    /// Let time pass. Returns true when the warning hid during this step.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        match self.remaining {
            Some(left) if elapsed >= left => {
                self.remaining = None;
                true
            }
            Some(left) => {
                self.remaining = Some(left - elapsed);
                false
            }
            None => false,
        }
    }
}

/// Outcome of committing an inline bound edit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditCommit {
    /// The domain was replaced; carries the (re-clamped) selection
    Accepted(RangeBounds),
    /// The input was invalid; the editor stays open and the warning shows
    Rejected,
    /// No editor was open
    NotEditing,
}

/// State for the dual-handle range selector
///
/// Invariants, holding after every method returns:
/// - `domain.min < domain.max`, both finite
/// - `domain.min <= selection.min <= selection.max <= domain.max`
/// - the edit buffer is only meaningful while an `Editing*` state is active
#[derive(Debug, Clone, PartialEq)]
pub struct RangeState {
    domain: RangeBounds,
    selection: RangeBounds,
    interaction: RangeInteraction,
    hover: RangeHover,
    /// Text of the open inline editor
    edit_buffer: String,
    /// The seeded editor text is selected; the first typed text replaces it
    edit_replace_pending: bool,
    /// Selection when the current drag started
    drag_origin: Option<RangeBounds>,
    warning: WarningTimer,
}

impl RangeState {
    /// Create a selector covering `[min, max]`, with everything selected.
    ///
    /// A degenerate or non-finite domain is widened to a usable one.
    pub fn new(min: f64, max: f64) -> Self {
        let requested = RangeBounds::new(min, max);
        let domain = if requested.is_valid_domain() {
            requested
        } else {
            let lo = if min.is_finite() { min } else { 0.0 };
            let (lo, hi) = if RangeBounds::new(lo, max).is_valid_domain() {
                (lo, max)
            } else {
                widen(lo)
            };
            log::warn!(
                "Range: invalid domain [{}, {}], using [{}, {}]",
                min,
                max,
                lo,
                hi
            );
            RangeBounds::new(lo, hi)
        };

        Self {
            domain,
            selection: domain,
            interaction: RangeInteraction::Idle,
            hover: RangeHover::None,
            edit_buffer: String::new(),
            edit_replace_pending: false,
            drag_origin: None,
            warning: WarningTimer::default(),
        }
    }

    pub fn domain(&self) -> RangeBounds {
        self.domain
    }

    pub fn selection(&self) -> RangeBounds {
        self.selection
    }

    pub fn interaction(&self) -> RangeInteraction {
        self.interaction
    }

    pub fn hover(&self) -> RangeHover {
        self.hover
    }

    /// Text of the open inline editor
    pub fn edit_buffer(&self) -> Option<&str> {
        self.interaction
            .editing()
            .map(|_| self.edit_buffer.as_str())
    }

    pub fn is_warning_visible(&self) -> bool {
        self.warning.is_visible()
    }

    pub fn warning(&self) -> WarningTimer {
        self.warning
    }

    /// Whether the selection is narrow enough for the value labels to collide
    pub fn overlap(&self) -> bool {
        range_math::labels_overlap(self.selection, self.domain)
    }

    /// Whether a handle is drawn enlarged (hovered or dragged)
    pub fn is_handle_active(&self, handle: Handle) -> bool {
        self.hover.is(handle) || self.interaction.dragging() == Some(handle)
    }

    /// The handle painted (and hit-tested) on top when both overlap.
    ///
    /// The min handle is raised when it sits near the domain's upper end so it
    /// can still be grabbed once both handles are pushed against `max`; the
    /// max handle is raised when the selection starts near the lower end.
    pub fn top_handle(&self) -> Handle {
        let near = self.domain.span() * RANGE_Z_ORDER_THRESHOLD;
        let min_raised = self.domain.max - self.selection.min < near;
        let max_raised = self.selection.min - self.domain.min < near;
        if min_raised && !max_raised {
            Handle::Min
        } else {
            Handle::Max
        }
    }

    /// Domain and selection invariants
    pub fn is_consistent(&self) -> bool {
        self.domain.is_valid_domain() && self.domain.encloses(&self.selection)
    }

    // =========================================================================
    // Dragging
    // =========================================================================

    /// Pointer went down on a handle. Only starts a drag from `Idle`.
    pub fn press(&mut self, handle: Handle) -> bool {
        if !self.interaction.is_idle() {
            return false;
        }
        self.interaction = RangeInteraction::dragging_of(handle);
        self.drag_origin = Some(self.selection);
        log::debug!("Range: drag start {:?}", handle);
        true
    }

    /// Move the dragged handle to a track percentage.
    ///
    /// The value is clamped to the domain and then against the other handle,
    /// so the handles can touch but never cross. Returns true if the
    /// selection changed.
    pub fn drag_to_percent(&mut self, percent: f64) -> bool {
        let Some(handle) = self.interaction.dragging() else {
            return false;
        };
        if percent.is_nan() {
            return false;
        }

        let value = self
            .domain
            .clamp(range_math::percent_to_value(percent, self.domain));
        let previous = self.selection;
        match handle {
            Handle::Min => self.selection.min = value.min(self.selection.max),
            Handle::Max => self.selection.max = value.max(self.selection.min),
        }
        self.selection != previous
    }

    /// Pointer released. Ends the drag and returns the selection if the drag
    /// changed it.
    pub fn release(&mut self) -> Option<RangeBounds> {
        let handle = self.interaction.dragging()?;
        self.interaction = RangeInteraction::Idle;
        let origin = self.drag_origin.take();
        log::debug!(
            "Range: drag end {:?}, selection [{}, {}]",
            handle,
            self.selection.min,
            self.selection.max
        );
        (origin != Some(self.selection)).then_some(self.selection)
    }

    /// Update which handle the pointer is over. Returns true if it changed.
    pub fn set_hover(&mut self, hover: RangeHover) -> bool {
        if self.hover == hover {
            return false;
        }
        self.hover = hover;
        true
    }

    // =========================================================================
    // Domain editing
    // =========================================================================

    /// Open the inline editor for one bound, seeded with its current value.
    /// Only one editor can be open, and never during a drag.
    pub fn begin_edit(&mut self, handle: Handle) -> bool {
        if !self.interaction.is_idle() {
            return false;
        }
        let seed = match handle {
            Handle::Min => self.domain.min,
            Handle::Max => self.domain.max,
        };
        self.edit_buffer = seed.to_string();
        self.edit_replace_pending = true;
        self.interaction = RangeInteraction::editing_of(handle);
        log::debug!("Range: editing {:?}, seeded '{}'", handle, self.edit_buffer);
        true
    }

    /// Type into the open editor. Characters that can't be part of a number
    /// are ignored. Returns true if the buffer changed.
    pub fn push_edit_text(&mut self, text: &str) -> bool {
        if self.interaction.editing().is_none() {
            return false;
        }
        let mut buffer = if self.edit_replace_pending {
            String::new()
        } else {
            self.edit_buffer.clone()
        };
        let mut changed = false;
        for c in text.chars() {
            if accepts_number_char(&buffer, c) {
                buffer.push(c);
                changed = true;
            }
        }
        if changed {
            self.edit_buffer = buffer;
            self.edit_replace_pending = false;
        }
        changed
    }

    /// Backspace in the open editor
    pub fn pop_edit_char(&mut self) -> bool {
        if self.interaction.editing().is_none() {
            return false;
        }
        if self.edit_replace_pending {
            self.edit_replace_pending = false;
            let had_text = !self.edit_buffer.is_empty();
            self.edit_buffer.clear();
            return had_text;
        }
        self.edit_buffer.pop().is_some()
    }

    /// Replace the whole editor text (hosts with their own text field)
    pub fn set_edit_text(&mut self, text: impl Into<String>) -> bool {
        if self.interaction.editing().is_none() {
            return false;
        }
        self.edit_buffer = text.into();
        self.edit_replace_pending = false;
        true
    }

    /// Close the editor without committing
    pub fn cancel_edit(&mut self) -> bool {
        if self.interaction.editing().is_none() {
            return false;
        }
        self.interaction = RangeInteraction::Idle;
        self.edit_buffer.clear();
        self.edit_replace_pending = false;
        true
    }

    /// Commit the open editor (blur or Enter).
    ///
    /// A new min must be a number below the current domain max, a new max a
    /// number above the current domain min. On success the domain bound is
    /// replaced and both selection ends are pulled inside the new domain. On
    /// failure the editor stays open with its text and the warning is
    /// (re-)armed.
    pub fn commit_edit(&mut self) -> EditCommit {
        let Some(handle) = self.interaction.editing() else {
            return EditCommit::NotEditing;
        };
        let value = parse_edit_value(&self.edit_buffer);

        let candidate = match handle {
            Handle::Min => RangeBounds::new(value, self.domain.max),
            Handle::Max => RangeBounds::new(self.domain.min, value),
        };
        if !candidate.is_valid_domain() {
            self.warning.arm(RANGE_WARNING_DURATION);
            self.edit_replace_pending = false;
            log::warn!(
                "Range: rejected {:?} bound '{}' for domain [{}, {}]",
                handle,
                self.edit_buffer,
                self.domain.min,
                self.domain.max
            );
            return EditCommit::Rejected;
        }

        match handle {
            Handle::Min => {
                self.domain.min = value;
                // Both ends move up; the upper one too if it fell below
                if value > self.selection.min {
                    self.selection.min = value;
                }
                if value > self.selection.max {
                    self.selection.max = value;
                }
            }
            Handle::Max => {
                self.domain.max = value;
                if value < self.selection.min {
                    self.selection.min = value;
                }
                if value < self.selection.max {
                    self.selection.max = value;
                }
            }
        }

        self.interaction = RangeInteraction::Idle;
        self.edit_buffer.clear();
        self.edit_replace_pending = false;
        log::debug!(
            "Range: domain now [{}, {}], selection [{}, {}]",
            self.domain.min,
            self.domain.max,
            self.selection.min,
            self.selection.max
        );
        EditCommit::Accepted(self.selection)
    }

    // =========================================================================
    // Time & lifecycle
    // =========================================================================

    /// Let time pass for the warning. Returns true if the warning hid.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.warning.advance(elapsed)
    }

    /// Abandon any gesture in progress (the widget is going away)
    pub fn reset_interaction(&mut self) {
        if !self.interaction.is_idle() {
            log::debug!("Range: abandoning {:?}", self.interaction);
        }
        self.interaction = RangeInteraction::Idle;
        self.drag_origin = None;
        self.edit_buffer.clear();
        self.edit_replace_pending = false;
        self.hover = RangeHover::None;
    }
}

impl Default for RangeState {
    fn default() -> Self {
        Self::new(0.0, 100.0)
    }
}

/// Whether `c` may be appended to `buffer` in a numeric editor.
///
/// A sign is only allowed first or right after the exponent marker, a decimal
/// point only once in the mantissa, and a single exponent after a digit.
fn accepts_number_char(buffer: &str, c: char) -> bool {
    let has_exponent = buffer.contains(['e', 'E']);
    match c {
        '0'..='9' => true,
        '-' => buffer.is_empty() || buffer.ends_with(['e', 'E']),
        '.' => !buffer.contains('.') && !has_exponent,
        'e' | 'E' => !has_exponent && buffer.chars().any(|c| c.is_ascii_digit()),
        _ => false,
    }
}

/// A valid domain starting at (or, near the top of the f64 range, ending at)
/// `value`. The step is at least one unit and never below the spacing of
/// floats at that magnitude.
fn widen(value: f64) -> (f64, f64) {
    let step = (value.abs() * 2.0 * f64::EPSILON).max(1.0);
    if (value + step).is_finite() {
        (value, value + step)
    } else {
        (value - step, value)
    }
}

/// Parse editor text the way a numeric input does: surrounding whitespace is
/// ignored, empty text is zero, and anything else that isn't a number is NaN.
pub fn parse_edit_value(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// State for bar charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BarChartState {
    /// Bar under the pointer (shows the tooltip)
    pub hovered: Option<usize>,
}

impl BarChartState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dragged(state: &mut RangeState, handle: Handle, percent: f64) -> Option<RangeBounds> {
        assert!(state.press(handle));
        state.drag_to_percent(percent);
        state.release()
    }

    #[test]
    fn test_initial_selection_equals_domain() {
        let state = RangeState::new(5.99, 79.99);
        assert_eq!(state.domain(), RangeBounds::new(5.99, 79.99));
        assert_eq!(state.selection(), state.domain());
        assert_eq!(state.interaction(), RangeInteraction::Idle);
        assert!(!state.is_warning_visible());
        assert!(state.is_consistent());
    }

    #[test]
    fn test_degenerate_domain_is_widened() {
        let state = RangeState::new(10.0, 10.0);
        assert_eq!(state.domain(), RangeBounds::new(10.0, 11.0));
        assert!(state.is_consistent());

        let state = RangeState::new(f64::NAN, 5.0);
        assert_eq!(state.domain(), RangeBounds::new(0.0, 5.0));
    }

    #[test]
    fn test_degenerate_domain_at_large_magnitudes() {
        for (min, max) in [
            (1e17, 1e17),
            (-1e17, -1e17),
            (f64::MAX, f64::MAX),
            (-1e308, 1e308),
            (1e20, f64::INFINITY),
        ] {
            let state = RangeState::new(min, max);
            let domain = state.domain();
            assert!(domain.min < domain.max, "[{min}, {max}] gave {domain:?}");
            assert!(domain.span().is_finite(), "[{min}, {max}] gave {domain:?}");
            assert!(state.is_consistent());
        }
    }

    #[test]
    fn test_commit_with_overflowing_span_is_rejected() {
        let mut state = RangeState::new(-1e308, 0.0);
        assert!(state.begin_edit(Handle::Max));
        assert!(state.set_edit_text("1e308"));
        assert_eq!(state.commit_edit(), EditCommit::Rejected);
        assert!(state.is_warning_visible());
        assert_eq!(state.domain(), RangeBounds::new(-1e308, 0.0));

        assert!(state.set_edit_text("1e300"));
        assert!(matches!(state.commit_edit(), EditCommit::Accepted(_)));
        assert!(state.domain().span().is_finite());
    }

    #[test]
    fn test_drag_min_updates_selection() {
        let mut state = RangeState::new(0.0, 100.0);
        assert!(state.press(Handle::Min));
        assert_eq!(state.interaction(), RangeInteraction::DraggingMin);

        assert!(state.drag_to_percent(25.0));
        assert_eq!(state.selection().min, 25.0);
        assert_eq!(state.selection().max, 100.0);

        assert_eq!(state.release(), Some(RangeBounds::new(25.0, 100.0)));
        assert_eq!(state.interaction(), RangeInteraction::Idle);
    }

    #[test]
    fn test_drag_is_clamped_to_domain() {
        let mut state = RangeState::new(10.0, 20.0);
        state.press(Handle::Max);
        state.drag_to_percent(250.0);
        assert_eq!(state.selection().max, 20.0);
        state.release();

        state.press(Handle::Min);
        state.drag_to_percent(-40.0);
        assert_eq!(state.selection().min, 10.0);
        assert!(state.is_consistent());
    }

    #[test]
    fn test_min_dragged_past_max_stops_at_max() {
        let mut state = RangeState::new(0.0, 100.0);
        dragged(&mut state, Handle::Max, 40.0);
        assert_eq!(state.selection().max, 40.0);

        state.press(Handle::Min);
        state.drag_to_percent(80.0);
        assert_eq!(state.selection().min, 40.0);
        assert_eq!(state.selection().min, state.selection().max);
    }

    #[test]
    fn test_max_dragged_below_min_stops_at_min() {
        let mut state = RangeState::new(0.0, 100.0);
        dragged(&mut state, Handle::Min, 60.0);
        state.press(Handle::Max);
        state.drag_to_percent(10.0);
        assert_eq!(state.selection().max, 60.0);
    }

    #[test]
    fn test_release_without_change_reports_nothing() {
        let mut state = RangeState::new(0.0, 100.0);
        state.press(Handle::Min);
        assert_eq!(state.release(), None);

        // Moving away and back is not a change either
        state.press(Handle::Min);
        state.drag_to_percent(30.0);
        state.drag_to_percent(0.0);
        assert_eq!(state.release(), None);
    }

    #[test]
    fn test_drag_without_press_is_ignored() {
        let mut state = RangeState::new(0.0, 100.0);
        assert!(!state.drag_to_percent(50.0));
        assert_eq!(state.release(), None);
        assert_eq!(state.selection(), RangeBounds::new(0.0, 100.0));
    }

    #[test]
    fn test_cannot_drag_while_editing() {
        let mut state = RangeState::new(0.0, 100.0);
        assert!(state.begin_edit(Handle::Min));
        assert!(!state.press(Handle::Max));
        assert_eq!(state.interaction(), RangeInteraction::EditingMin);
    }

    #[test]
    fn test_only_one_editor_at_a_time() {
        let mut state = RangeState::new(0.0, 100.0);
        assert!(state.begin_edit(Handle::Min));
        assert!(!state.begin_edit(Handle::Max));
        assert_eq!(state.interaction(), RangeInteraction::EditingMin);
    }

    #[test]
    fn test_edit_seeded_with_bound_and_replaced_on_type() {
        let mut state = RangeState::new(5.99, 79.99);
        state.begin_edit(Handle::Max);
        assert_eq!(state.edit_buffer(), Some("79.99"));

        assert!(state.push_edit_text("9"));
        assert!(state.push_edit_text("0"));
        assert_eq!(state.edit_buffer(), Some("90"));

        assert!(!state.push_edit_text("x"));
        assert!(state.pop_edit_char());
        assert_eq!(state.edit_buffer(), Some("9"));
    }

    #[test]
    fn test_typed_characters_are_filtered() {
        let mut state = RangeState::new(0.0, 100.0);
        state.begin_edit(Handle::Min);
        assert!(state.push_edit_text("-1.5.2e-3e"));
        assert_eq!(state.edit_buffer(), Some("-1.52e-3"));
        assert!(!state.push_edit_text("-"));
        assert!(!state.push_edit_text("abc"));
    }

    #[test]
    fn test_backspace_on_seeded_text_clears_it() {
        let mut state = RangeState::new(0.0, 100.0);
        state.begin_edit(Handle::Max);
        assert!(state.pop_edit_char());
        assert_eq!(state.edit_buffer(), Some(""));
    }

    #[test]
    fn test_commit_min_above_max_is_rejected() {
        let mut state = RangeState::new(0.0, 40.0);
        state.begin_edit(Handle::Min);
        state.push_edit_text("50");

        assert_eq!(state.commit_edit(), EditCommit::Rejected);
        assert_eq!(state.interaction(), RangeInteraction::EditingMin);
        assert_eq!(state.edit_buffer(), Some("50"));
        assert!(state.is_warning_visible());
        assert_eq!(state.domain(), RangeBounds::new(0.0, 40.0));

        assert!(!state.advance(Duration::from_millis(2900)));
        assert!(state.is_warning_visible());
        assert!(state.advance(Duration::from_millis(100)));
        assert!(!state.is_warning_visible());
        // Still editing after the warning hides
        assert_eq!(state.interaction(), RangeInteraction::EditingMin);
    }

    #[test]
    fn test_repeated_rejection_rearms_warning() {
        let mut state = RangeState::new(0.0, 40.0);
        state.begin_edit(Handle::Min);
        state.push_edit_text("50");
        state.commit_edit();
        state.advance(Duration::from_secs(2));

        assert_eq!(state.commit_edit(), EditCommit::Rejected);
        assert_eq!(state.warning().remaining(), Some(RANGE_WARNING_DURATION));

        state.advance(Duration::from_secs(2));
        assert!(state.is_warning_visible());
        state.advance(Duration::from_secs(1));
        assert!(!state.is_warning_visible());
    }

    #[test]
    fn test_commit_nan_is_rejected() {
        let mut state = RangeState::new(0.0, 100.0);
        state.begin_edit(Handle::Max);
        state.set_edit_text("1e");
        assert_eq!(state.commit_edit(), EditCommit::Rejected);

        state.set_edit_text("--3");
        assert_eq!(state.commit_edit(), EditCommit::Rejected);
        assert_eq!(state.domain(), RangeBounds::new(0.0, 100.0));
    }

    #[test]
    fn test_commit_max_extends_domain_without_touching_selection() {
        let mut state = RangeState::new(0.0, 100.0);
        state.begin_edit(Handle::Max);
        state.push_edit_text("200");

        assert_eq!(
            state.commit_edit(),
            EditCommit::Accepted(RangeBounds::new(0.0, 100.0))
        );
        assert_eq!(state.domain(), RangeBounds::new(0.0, 200.0));
        assert_eq!(state.selection(), RangeBounds::new(0.0, 100.0));
        assert_eq!(state.interaction(), RangeInteraction::Idle);
        assert_eq!(state.edit_buffer(), None);
    }

    #[test]
    fn test_commit_max_pulls_selection_down() {
        let mut state = RangeState::new(0.0, 100.0);
        state.begin_edit(Handle::Max);
        state.push_edit_text("60");
        assert_eq!(
            state.commit_edit(),
            EditCommit::Accepted(RangeBounds::new(0.0, 60.0))
        );
        assert!(state.is_consistent());
    }

    #[test]
    fn test_min_edit_pulls_both_selection_ends_up() {
        let mut state = RangeState::new(0.0, 100.0);
        dragged(&mut state, Handle::Min, 20.0);
        dragged(&mut state, Handle::Max, 30.0);
        assert_eq!(state.selection(), RangeBounds::new(20.0, 30.0));

        state.begin_edit(Handle::Min);
        state.push_edit_text("50");
        assert_eq!(
            state.commit_edit(),
            EditCommit::Accepted(RangeBounds::new(50.0, 50.0))
        );
        assert_eq!(state.domain(), RangeBounds::new(50.0, 100.0));
    }

    #[test]
    fn test_max_edit_pulls_both_selection_ends_down() {
        let mut state = RangeState::new(0.0, 100.0);
        dragged(&mut state, Handle::Min, 20.0);
        dragged(&mut state, Handle::Max, 30.0);

        state.begin_edit(Handle::Max);
        state.push_edit_text("10");
        assert_eq!(
            state.commit_edit(),
            EditCommit::Accepted(RangeBounds::new(10.0, 10.0))
        );
        assert_eq!(state.domain(), RangeBounds::new(0.0, 10.0));
    }

    #[test]
    fn test_empty_buffer_commits_as_zero() {
        let mut state = RangeState::new(-50.0, 50.0);
        state.begin_edit(Handle::Max);
        state.pop_edit_char();
        assert_eq!(
            state.commit_edit(),
            EditCommit::Accepted(RangeBounds::new(-50.0, 0.0))
        );
    }

    #[test]
    fn test_cancel_edit_keeps_domain() {
        let mut state = RangeState::new(0.0, 100.0);
        state.begin_edit(Handle::Min);
        state.push_edit_text("20");
        assert!(state.cancel_edit());
        assert_eq!(state.interaction(), RangeInteraction::Idle);
        assert_eq!(state.domain(), RangeBounds::new(0.0, 100.0));
        assert_eq!(state.commit_edit(), EditCommit::NotEditing);
    }

    #[test]
    fn test_overlap_flag() {
        let mut state = RangeState::new(0.0, 100.0);
        assert!(!state.overlap());
        dragged(&mut state, Handle::Min, 50.0);
        dragged(&mut state, Handle::Max, 60.0);
        assert!(state.overlap());
    }

    #[test]
    fn test_top_handle_near_boundaries() {
        let mut state = RangeState::new(0.0, 100.0);
        // Selection starts at the domain min: max handle on top
        assert_eq!(state.top_handle(), Handle::Max);

        dragged(&mut state, Handle::Min, 95.0);
        assert_eq!(state.top_handle(), Handle::Min);
    }

    #[test]
    fn test_handle_active_from_hover_or_drag() {
        let mut state = RangeState::new(0.0, 100.0);
        assert!(state.set_hover(RangeHover::Min));
        assert!(!state.set_hover(RangeHover::Min));
        assert!(state.is_handle_active(Handle::Min));
        assert!(!state.is_handle_active(Handle::Max));

        state.set_hover(RangeHover::None);
        state.press(Handle::Max);
        assert!(state.is_handle_active(Handle::Max));
    }

    #[test]
    fn test_reset_interaction_abandons_drag() {
        let mut state = RangeState::new(0.0, 100.0);
        state.press(Handle::Min);
        state.drag_to_percent(10.0);
        state.reset_interaction();
        assert_eq!(state.interaction(), RangeInteraction::Idle);
        assert_eq!(state.release(), None);
        assert_eq!(state.selection().min, 10.0);
    }

    #[test]
    fn test_parse_edit_value() {
        assert_eq!(parse_edit_value(" 42.5 "), 42.5);
        assert_eq!(parse_edit_value(""), 0.0);
        assert_eq!(parse_edit_value("1e3"), 1000.0);
        assert!(parse_edit_value("abc").is_nan());
    }

    #[test]
    fn test_warning_timer() {
        let mut timer = WarningTimer::default();
        assert!(!timer.advance(Duration::from_secs(10)));
        timer.arm(Duration::from_secs(3));
        assert!(timer.is_visible());
        timer.cancel();
        assert!(!timer.is_visible());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Press(bool),
        Drag(f64),
        Release,
        EditMin(f64),
        EditMax(f64),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<bool>().prop_map(Op::Press),
            (-50.0f64..150.0).prop_map(Op::Drag),
            Just(Op::Release),
            (-200.0f64..200.0).prop_map(Op::EditMin),
            (-200.0f64..200.0).prop_map(Op::EditMax),
        ]
    }

    proptest! {
        #[test]
        fn prop_selection_stays_inside_domain(
            lo in -100.0f64..100.0,
            span in 0.5f64..500.0,
            ops in prop::collection::vec(op_strategy(), 1..60),
        ) {
            let mut state = RangeState::new(lo, lo + span);
            for op in ops {
                match op {
                    Op::Press(min) => {
                        state.press(if min { Handle::Min } else { Handle::Max });
                    }
                    Op::Drag(p) => {
                        state.drag_to_percent(p);
                    }
                    Op::Release => {
                        state.release();
                    }
                    Op::EditMin(v) | Op::EditMax(v) => {
                        let handle = if matches!(op, Op::EditMin(_)) {
                            Handle::Min
                        } else {
                            Handle::Max
                        };
                        state.reset_interaction();
                        state.begin_edit(handle);
                        state.set_edit_text(v.to_string());
                        if state.commit_edit() == EditCommit::Rejected {
                            state.cancel_edit();
                        }
                    }
                }
                prop_assert!(state.is_consistent(), "broken invariant: {:?}", state);
            }
        }
    }
}
