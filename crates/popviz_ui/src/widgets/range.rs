//! Dual-handle range selector widget
//!
//! Two handles on a horizontal track select a sub-range `[min, max]` of a
//! numeric domain. The domain bounds are shown as labels on either side of the
//! track; clicking one opens an inline editor that replaces that bound on
//! commit (Enter or focus moving elsewhere).
//!
//! All interaction state lives in [`RangeState`]. The widget works on a copy
//! and hands the updated copy back through `on_change`; committed selection
//! changes are additionally reported through `on_range_change`.

use crate::callback::{Callback, SideEffect};
use crate::constants::{
    format_fixed2, line_height, text_width, RANGE_BOUND_WIDTH, RANGE_HANDLE_MARGIN_LEFT,
    RANGE_HANDLE_OFFSET, RANGE_HANDLE_OFFSET_ACTIVE, RANGE_HANDLE_SIZE, RANGE_HANDLE_SIZE_ACTIVE,
    RANGE_HEIGHT, RANGE_TRACK_HEIGHT, RANGE_TRACK_WIDTH, RANGE_VALUE_LABEL_OFFSET,
    RANGE_VALUE_LABEL_SHIFT_PERCENT, RANGE_WARNING_TEXT, SMALL_FONT_SIZE,
};
use crate::event::{Event, KeyCode, MouseButton};
use crate::layout::{Bounds, Length, Size};
use crate::range_math::{percent_to_x, value_to_percent, x_to_percent};
use crate::renderer::{Color, Renderer};
use crate::state::{EditCommit, Handle, RangeHover, RangeState};
use crate::widget::Widget;

/// Horizontal padding inside a bound label
const LABEL_PADDING_X: f32 = 20.0;
/// Vertical padding inside a bound label
const LABEL_PADDING_Y: f32 = 10.0;

/// Magnitude suffix shown after every number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    #[default]
    Millions,
    Billions,
}

impl Unit {
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Millions => "M",
            Unit::Billions => "B",
        }
    }

    /// `"{value:.2} {suffix}"`, or `"NaN {suffix}"`
    pub fn label(&self, value: f64) -> String {
        format!("{} {}", format_fixed2(value), self.suffix())
    }
}

/// Absolute positions of the widget's parts for one set of bounds
#[derive(Debug, Clone, Copy)]
struct RangeGeometry {
    min_label: Bounds,
    max_label: Bounds,
    track: Bounds,
}

impl RangeGeometry {
    fn new(bounds: Bounds) -> Self {
        let label_width = RANGE_BOUND_WIDTH.min(bounds.width / 2.0);
        let label_height = line_height(SMALL_FONT_SIZE) + LABEL_PADDING_Y * 2.0;
        let label_y = bounds.center_y() - label_height / 2.0;
        let track_width = (bounds.width - label_width * 2.0).max(0.0);

        Self {
            min_label: Bounds::new(bounds.x, label_y, label_width, label_height),
            max_label: Bounds::new(
                bounds.x + label_width + track_width,
                label_y,
                label_width,
                label_height,
            ),
            track: Bounds::new(
                bounds.x + label_width,
                bounds.center_y() - RANGE_TRACK_HEIGHT / 2.0,
                track_width,
                RANGE_TRACK_HEIGHT,
            ),
        }
    }

    fn label(&self, handle: Handle) -> Bounds {
        match handle {
            Handle::Min => self.min_label,
            Handle::Max => self.max_label,
        }
    }
}

/// A dual-handle range selector
pub struct Range<M> {
    state: RangeState,
    unit: Unit,
    width: Length,
    on_change: Callback<RangeState, M>,
    on_range_change: SideEffect<(f64, f64)>,
}

impl<M> Range<M> {
    /// Create a range selector showing `state`
    pub fn new(state: &RangeState) -> Self {
        Self {
            state: state.clone(),
            unit: Unit::default(),
            width: Length::Shrink,
            on_change: Callback::none(),
            on_range_change: SideEffect::none(),
        }
    }

    /// Set the label suffix
    pub fn unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Set the width
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Receive every state update (drag positions, hover, editor text, timer)
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(RangeState) -> M + 'static,
    {
        self.on_change = Callback::new(f);
        self
    }

    /// Be notified once per committed selection change
    pub fn on_range_change<F>(mut self, f: F) -> Self
    where
        F: Fn(f64, f64) + 'static,
    {
        self.on_range_change = SideEffect::new(move |(min, max)| f(min, max));
        self
    }

    fn emit_change(&self) -> Option<M> {
        self.on_change.call(self.state.clone())
    }

    /// Center and radius of a handle
    fn handle_circle(&self, handle: Handle, track: Bounds) -> (f32, f32, f32) {
        let selection = self.state.selection();
        let value = match handle {
            Handle::Min => selection.min,
            Handle::Max => selection.max,
        };
        let percent = value_to_percent(value, self.state.domain());
        let left = percent_to_x(percent, track.x, track.width);

        let (size, offset) = if self.state.is_handle_active(handle) {
            (RANGE_HANDLE_SIZE_ACTIVE, RANGE_HANDLE_OFFSET_ACTIVE)
        } else {
            (RANGE_HANDLE_SIZE, RANGE_HANDLE_OFFSET)
        };
        let radius = size / 2.0;
        (
            left - RANGE_HANDLE_MARGIN_LEFT + radius,
            track.y - offset + radius,
            radius,
        )
    }

    /// Handles in paint order, bottom first
    fn paint_order(&self) -> [Handle; 2] {
        match self.state.top_handle() {
            Handle::Min => [Handle::Max, Handle::Min],
            Handle::Max => [Handle::Min, Handle::Max],
        }
    }

    /// Topmost handle under the pointer
    fn handle_at(&self, x: f32, y: f32, track: Bounds) -> Option<Handle> {
        self.paint_order().into_iter().rev().find(|&handle| {
            let (cx, cy, radius) = self.handle_circle(handle, track);
            let (dx, dy) = (x - cx, y - cy);
            dx * dx + dy * dy <= radius * radius
        })
    }

    fn commit_edit(&mut self) -> Option<M> {
        match self.state.commit_edit() {
            EditCommit::Accepted(selection) => {
                log::debug!(
                    "Range: committed selection [{}, {}]",
                    selection.min,
                    selection.max
                );
                self.on_range_change.emit((selection.min, selection.max));
                self.emit_change()
            }
            EditCommit::Rejected => self.emit_change(),
            EditCommit::NotEditing => None,
        }
    }

    fn end_drag(&mut self) -> Option<M> {
        self.state.interaction().dragging()?;
        if let Some(selection) = self.state.release() {
            self.on_range_change.emit((selection.min, selection.max));
        }
        self.emit_change()
    }

    fn draw_bound(&self, renderer: &mut Renderer, handle: Handle, area: Bounds) {
        let font_size = SMALL_FONT_SIZE;
        let text_y = area.center_y() - line_height(font_size) / 2.0;

        if self.state.interaction().editing() == Some(handle) {
            let buffer = self.state.edit_buffer().unwrap_or_default();
            let editor = Bounds::new(
                area.x + 2.0,
                area.y + LABEL_PADDING_Y / 2.0,
                area.width - 4.0,
                area.height - LABEL_PADDING_Y,
            );
            renderer.fill_rect(editor, Color::WHITE);
            renderer.stroke_rect(editor, Color::ACCENT, 1.0);
            renderer.text(buffer, editor.x + 4.0, text_y, font_size, Color::TEXT_PRIMARY);

            let cursor_x = editor.x + 4.0 + text_width(buffer, font_size);
            renderer.line(
                cursor_x,
                text_y,
                cursor_x,
                text_y + line_height(font_size),
                Color::TEXT_PRIMARY,
                1.0,
            );
            return;
        }

        let bound = match handle {
            Handle::Min => self.state.domain().min,
            Handle::Max => self.state.domain().max,
        };
        let label = self.unit.label(bound);
        let x = (area.x + LABEL_PADDING_X).min(area.right() - text_width(&label, font_size));
        renderer.text(&label, x.max(area.x), text_y, font_size, Color::TEXT_PRIMARY);
    }
}

impl<M: 'static> Widget<M> for Range<M> {
    fn layout(&mut self, available: Size) -> Size {
        let intrinsic = RANGE_BOUND_WIDTH * 2.0 + RANGE_TRACK_WIDTH;
        Size::new(self.width.resolve(available.width, intrinsic), RANGE_HEIGHT)
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        let geometry = RangeGeometry::new(bounds);
        let track = geometry.track;
        let domain = self.state.domain();
        let selection = self.state.selection();

        self.draw_bound(renderer, Handle::Min, geometry.min_label);
        self.draw_bound(renderer, Handle::Max, geometry.max_label);

        // Track and selected span
        renderer.fill_rect(track, Color::TRACK);
        let min_percent = value_to_percent(selection.min, domain);
        let max_percent = value_to_percent(selection.max, domain);
        let fill_start = percent_to_x(min_percent, track.x, track.width);
        let fill_end = percent_to_x(max_percent, track.x, track.width);
        if fill_end > fill_start {
            renderer.fill_rect(
                Bounds::new(fill_start, track.y, fill_end - fill_start, track.height),
                Color::ACCENT,
            );
        }

        for handle in self.paint_order() {
            let (cx, cy, radius) = self.handle_circle(handle, track);
            renderer.fill_circle(cx, cy + 1.0, radius + 1.0, Color::SHADOW);
            let color = if self.state.is_handle_active(handle) {
                Color::ACCENT.lighten(0.2)
            } else {
                Color::ACCENT
            };
            renderer.fill_circle(cx, cy, radius, color);
        }

        // Value labels; the min label moves above the track when they'd collide
        let label_size = SMALL_FONT_SIZE;
        let below_y = track.y + RANGE_VALUE_LABEL_OFFSET;
        let min_y = if self.state.overlap() {
            track.y - RANGE_VALUE_LABEL_OFFSET
        } else {
            below_y
        };
        let min_x = percent_to_x(
            min_percent - RANGE_VALUE_LABEL_SHIFT_PERCENT,
            track.x,
            track.width,
        );
        let max_x = percent_to_x(
            max_percent - RANGE_VALUE_LABEL_SHIFT_PERCENT,
            track.x,
            track.width,
        );
        renderer.text(
            &self.unit.label(selection.min),
            min_x,
            min_y,
            label_size,
            Color::TEXT_SECONDARY,
        );
        renderer.text(
            &self.unit.label(selection.max),
            max_x,
            below_y,
            label_size,
            Color::TEXT_SECONDARY,
        );

        if self.state.is_warning_visible() {
            let width = text_width(RANGE_WARNING_TEXT, label_size) + 8.0;
            let height = line_height(label_size) + 4.0;
            let banner = Bounds::new(bounds.x, bounds.bottom() - height, width, height);
            renderer.fill_rect(banner, Color::WARNING);
            renderer.text(
                RANGE_WARNING_TEXT,
                banner.x + 4.0,
                banner.y + 2.0,
                label_size,
                Color::WARNING_TEXT,
            );
        }
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        let geometry = RangeGeometry::new(bounds);

        match event {
            Event::MouseMove { position, .. } => {
                if self.state.interaction().dragging().is_some() {
                    // An unmeasured track can't map positions; skip the move
                    let track = geometry.track;
                    let percent = x_to_percent(position.0, track.x, track.width)?;
                    if self.state.drag_to_percent(percent) {
                        return self.emit_change();
                    }
                    return None;
                }

                let hover = match self.handle_at(position.0, position.1, geometry.track) {
                    Some(Handle::Min) => RangeHover::Min,
                    Some(Handle::Max) => RangeHover::Max,
                    None => RangeHover::None,
                };
                if self.state.set_hover(hover) {
                    return self.emit_change();
                }
                None
            }

            Event::MousePress {
                button: MouseButton::Left,
                position,
                ..
            } => {
                let (x, y) = *position;
                if !bounds.contains(x, y) {
                    return None;
                }

                if let Some(handle) = self.handle_at(x, y, geometry.track) {
                    if self.state.press(handle) {
                        return self.emit_change();
                    }
                    return None;
                }

                for handle in [Handle::Min, Handle::Max] {
                    if geometry.label(handle).contains(x, y) && self.state.begin_edit(handle) {
                        return self.emit_change();
                    }
                }
                None
            }

            Event::MouseRelease {
                button: MouseButton::Left,
                ..
            } => self.end_drag(),

            Event::GlobalMousePress { position, .. } => {
                let editing = self.state.interaction().editing()?;
                // Clicking inside the open editor keeps it open
                if geometry.label(editing).contains(position.0, position.1) {
                    return None;
                }
                log::debug!("Range: pointer down outside editor, committing");
                self.commit_edit()
            }

            Event::FocusLost => {
                if self.state.interaction().dragging().is_some() {
                    return self.end_drag();
                }
                self.commit_edit()
            }

            Event::TextInput { text } => {
                if self.state.push_edit_text(text) {
                    return self.emit_change();
                }
                None
            }

            Event::KeyPress { key, .. } => {
                self.state.interaction().editing()?;
                match key {
                    KeyCode::Enter => self.commit_edit(),
                    KeyCode::Escape => {
                        self.state.cancel_edit();
                        self.emit_change()
                    }
                    KeyCode::Backspace => {
                        if self.state.pop_edit_char() {
                            return self.emit_change();
                        }
                        None
                    }
                    _ => None,
                }
            }

            Event::Tick { elapsed } => {
                if !self.state.is_warning_visible() {
                    return None;
                }
                if self.state.advance(*elapsed) {
                    log::debug!("Range: warning hidden");
                }
                self.emit_change()
            }

            _ => None,
        }
    }

    fn has_active_drag(&self) -> bool {
        self.state.interaction().dragging().is_some()
    }
}

/// Helper function to create a range selector
pub fn range<M>(state: &RangeState) -> Range<M> {
    Range::new(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyModifiers;
    use crate::range_math::RangeBounds;
    use crate::state::RangeInteraction;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    const BOUNDS: Bounds = Bounds {
        x: 0.0,
        y: 0.0,
        width: 480.0,
        height: 100.0,
    };

    // Track spans x = 90..390, handles sit on y = 50
    const HANDLE_Y: f32 = 50.0;

    fn track_x(percent: f32) -> f32 {
        90.0 + percent * 3.0
    }

    /// Handle center for a percentage while the handle is idle
    fn handle_x(percent: f32) -> f32 {
        track_x(percent) - 1.0
    }

    #[derive(Debug)]
    enum Msg {
        Changed(RangeState),
    }

    /// Drives a rebuilt widget per event, the way an application does
    struct Harness {
        state: RangeState,
        notified: Rc<RefCell<Vec<(f64, f64)>>>,
        unit: Unit,
    }

    impl Harness {
        fn new(min: f64, max: f64) -> Self {
            Self {
                state: RangeState::new(min, max),
                notified: Rc::new(RefCell::new(Vec::new())),
                unit: Unit::Millions,
            }
        }

        fn widget(&self) -> Range<Msg> {
            let sink = Rc::clone(&self.notified);
            let mut widget = range(&self.state)
                .unit(self.unit)
                .on_change(Msg::Changed)
                .on_range_change(move |min, max| sink.borrow_mut().push((min, max)));
            widget.layout(Size::new(BOUNDS.width, BOUNDS.height));
            widget
        }

        fn send(&mut self, event: Event) -> bool {
            match self.widget().on_event(&event, BOUNDS) {
                Some(Msg::Changed(state)) => {
                    self.state = state;
                    true
                }
                None => false,
            }
        }

        fn press(&mut self, x: f32, y: f32) -> bool {
            self.send(Event::GlobalMousePress {
                button: MouseButton::Left,
                position: (x, y),
            });
            self.send(Event::MousePress {
                button: MouseButton::Left,
                position: (x, y),
                modifiers: KeyModifiers::default(),
            })
        }

        fn move_to(&mut self, x: f32, y: f32) -> bool {
            self.send(Event::MouseMove {
                position: (x, y),
                modifiers: KeyModifiers::default(),
            })
        }

        fn release(&mut self, x: f32, y: f32) -> bool {
            self.send(Event::MouseRelease {
                button: MouseButton::Left,
                position: (x, y),
                modifiers: KeyModifiers::default(),
            })
        }

        fn key(&mut self, key: KeyCode) -> bool {
            self.send(Event::KeyPress {
                key,
                modifiers: KeyModifiers::default(),
            })
        }

        fn type_text(&mut self, text: &str) -> bool {
            self.send(Event::TextInput {
                text: text.to_string(),
            })
        }

        fn frame(&self) -> Renderer {
            let mut renderer = Renderer::new(480, 100);
            self.widget().draw(&mut renderer, BOUNDS);
            renderer
        }

        fn notifications(&self) -> Vec<(f64, f64)> {
            self.notified.borrow().clone()
        }
    }

    #[test]
    fn test_initial_labels() {
        let h = Harness::new(0.0, 100.0);
        let frame = h.frame();
        assert!(frame.find_text("0.00 M").is_some());
        assert!(frame.find_text("100.00 M").is_some());

        let mut h = Harness::new(5.99, 79.99);
        h.unit = Unit::Billions;
        let frame = h.frame();
        assert!(frame.find_text("5.99 B").is_some());
        assert!(frame.find_text("79.99 B").is_some());
    }

    #[test]
    fn test_drag_max_handle_notifies_once_on_release() {
        let mut h = Harness::new(0.0, 100.0);
        assert!(h.press(handle_x(100.0), HANDLE_Y));
        assert_eq!(h.state.interaction(), RangeInteraction::DraggingMax);

        assert!(h.move_to(track_x(75.0), HANDLE_Y));
        assert!(h.move_to(track_x(50.0), HANDLE_Y));
        assert!(h.notifications().is_empty());
        assert_eq!(h.state.selection().max, 50.0);

        // Released far outside the widget
        assert!(h.release(1000.0, 600.0));
        assert_eq!(h.state.interaction(), RangeInteraction::Idle);
        assert_eq!(h.notifications(), vec![(0.0, 50.0)]);
    }

    #[test]
    fn test_drag_continues_outside_bounds() {
        let mut h = Harness::new(0.0, 100.0);
        h.press(handle_x(0.0), HANDLE_Y);
        assert!(h.widget().has_active_drag());

        assert!(h.move_to(track_x(25.0), 900.0));
        assert_eq!(h.state.selection().min, 25.0);
        h.move_to(-500.0, 900.0);
        assert_eq!(h.state.selection().min, 0.0);
    }

    #[test]
    fn test_release_without_movement_does_not_notify() {
        let mut h = Harness::new(0.0, 100.0);
        h.press(handle_x(0.0), HANDLE_Y);
        assert!(h.release(handle_x(0.0), HANDLE_Y));
        assert!(h.notifications().is_empty());
    }

    #[test]
    fn test_min_handle_dragged_past_max_is_clamped() {
        let mut h = Harness::new(0.0, 100.0);
        h.press(handle_x(100.0), HANDLE_Y);
        h.move_to(track_x(50.0), HANDLE_Y);
        h.release(track_x(50.0), HANDLE_Y);

        h.press(handle_x(0.0), HANDLE_Y);
        h.move_to(track_x(75.0), HANDLE_Y);
        assert_eq!(h.state.selection().min, h.state.selection().max);
        assert_eq!(h.state.selection().min, 50.0);
        h.release(track_x(75.0), HANDLE_Y);
        assert_eq!(h.notifications(), vec![(0.0, 50.0), (50.0, 50.0)]);
    }

    #[test]
    fn test_stacked_handles_at_max_grab_min() {
        let mut h = Harness::new(0.0, 100.0);
        h.press(handle_x(0.0), HANDLE_Y);
        h.move_to(track_x(100.0), HANDLE_Y);
        h.release(track_x(100.0), HANDLE_Y);
        assert_eq!(h.state.selection(), RangeBounds::new(100.0, 100.0));

        // Both handles overlap at the end; the min handle must be on top
        h.press(handle_x(100.0), HANDLE_Y);
        assert_eq!(h.state.interaction(), RangeInteraction::DraggingMin);
    }

    #[test]
    fn test_hover_enlarges_handle() {
        let mut h = Harness::new(0.0, 100.0);
        assert!(h.move_to(handle_x(0.0), HANDLE_Y));
        assert_eq!(h.state.hover(), RangeHover::Min);
        assert!(!h.move_to(handle_x(0.0) + 1.0, HANDLE_Y));

        let track = RangeGeometry::new(BOUNDS).track;
        let (_, _, radius) = h.widget().handle_circle(Handle::Min, track);
        assert_eq!(radius, RANGE_HANDLE_SIZE_ACTIVE / 2.0);

        assert!(h.move_to(240.0, 5.0));
        assert_eq!(h.state.hover(), RangeHover::None);
    }

    #[test]
    fn test_rejected_min_edit_shows_warning_then_hides() {
        let mut h = Harness::new(0.0, 40.0);
        assert!(h.press(45.0, 50.0));
        assert_eq!(h.state.interaction(), RangeInteraction::EditingMin);
        assert_eq!(h.state.edit_buffer(), Some("0"));

        h.type_text("50");
        assert!(h.key(KeyCode::Enter));
        assert_eq!(h.state.interaction(), RangeInteraction::EditingMin);
        assert!(h.frame().find_text(RANGE_WARNING_TEXT).is_some());
        assert!(h.notifications().is_empty());

        h.send(Event::Tick {
            elapsed: Duration::from_millis(2500),
        });
        assert!(h.state.is_warning_visible());
        h.send(Event::Tick {
            elapsed: Duration::from_millis(500),
        });
        assert!(!h.state.is_warning_visible());
        assert!(h.frame().find_text(RANGE_WARNING_TEXT).is_none());
        assert_eq!(h.state.edit_buffer(), Some("50"));
    }

    #[test]
    fn test_max_edit_commits_on_click_elsewhere() {
        let mut h = Harness::new(0.0, 100.0);
        h.press(435.0, 50.0);
        assert_eq!(h.state.interaction(), RangeInteraction::EditingMax);
        h.type_text("200");

        // Clicking inside the editor keeps it open
        h.press(435.0, 50.0);
        assert_eq!(h.state.interaction(), RangeInteraction::EditingMax);

        h.press(240.0, 95.0);
        assert_eq!(h.state.interaction(), RangeInteraction::Idle);
        assert_eq!(h.state.domain(), RangeBounds::new(0.0, 200.0));
        assert_eq!(h.state.selection(), RangeBounds::new(0.0, 100.0));
        assert_eq!(h.notifications(), vec![(0.0, 100.0)]);
        assert!(h.frame().find_text("200.00 M").is_some());
    }

    #[test]
    fn test_clicking_other_label_commits_first() {
        let mut h = Harness::new(0.0, 100.0);
        h.press(45.0, 50.0);
        h.type_text("10");
        h.press(435.0, 50.0);

        assert_eq!(h.state.domain().min, 10.0);
        assert_eq!(h.state.interaction(), RangeInteraction::EditingMax);
        assert_eq!(h.notifications(), vec![(10.0, 100.0)]);
    }

    #[test]
    fn test_escape_cancels_edit() {
        let mut h = Harness::new(0.0, 100.0);
        h.press(45.0, 50.0);
        h.type_text("30");
        assert!(h.key(KeyCode::Escape));
        assert_eq!(h.state.interaction(), RangeInteraction::Idle);
        assert_eq!(h.state.domain().min, 0.0);
        assert!(h.notifications().is_empty());
    }

    #[test]
    fn test_editor_shows_buffer() {
        let mut h = Harness::new(0.0, 100.0);
        h.press(45.0, 50.0);
        h.type_text("12");
        h.key(KeyCode::Backspace);
        assert!(h.frame().find_text("1").is_some());
    }

    #[test]
    fn test_overlapping_labels_move_min_above() {
        let mut h = Harness::new(0.0, 100.0);
        h.press(handle_x(0.0), HANDLE_Y);
        h.move_to(track_x(95.0), HANDLE_Y);
        h.release(track_x(95.0), HANDLE_Y);
        assert!(h.state.overlap());

        let frame = h.frame();
        let track_y = RangeGeometry::new(BOUNDS).track.y;
        match frame.find_text("95.00 M") {
            Some(crate::renderer::DrawCommand::Text { y, .. }) => {
                assert_eq!(*y, track_y - RANGE_VALUE_LABEL_OFFSET)
            }
            other => panic!("missing min label: {:?}", other),
        }
    }

    #[test]
    fn test_zero_width_track_ignores_moves() {
        let state = {
            let mut s = RangeState::new(0.0, 100.0);
            s.press(Handle::Min);
            s
        };
        let mut widget: Range<Msg> = range(&state).on_change(Msg::Changed);
        let narrow = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let event = Event::MouseMove {
            position: (50.0, 50.0),
            modifiers: KeyModifiers::default(),
        };
        assert!(widget.on_event(&event, narrow).is_none());
    }

    #[test]
    fn test_nan_label() {
        assert_eq!(Unit::Millions.label(f64::NAN), "NaN M");
        assert_eq!(Unit::Billions.label(1.5), "1.50 B");
    }
}
