//! Helper functions for container layout widgets

use crate::element::Element;
use crate::event::Event;
use crate::layout::Bounds;
use crate::renderer::Renderer;

/// Dispatch an event to child elements.
///
/// Broadcast events (`GlobalMousePress`, `FocusLost`, `Tick`) reach every
/// child so editors can blur and timers can run; the last message wins.
/// Keyboard events go to the first child that produces a message. Pointer
/// events are filtered by the container's bounds, except for releases and
/// for moves while a child is dragging, which may happen anywhere.
///
/// # Arguments
/// * `children` - Mutable slice of child elements
/// * `child_bounds` - Cached bounds for each child (relative to container)
/// * `event` - The event to dispatch
/// * `container_bounds` - Absolute bounds of the container
pub fn dispatch_event_to_children<M: 'static>(
    children: &mut [Element<M>],
    child_bounds: &[Bounds],
    event: &Event,
    container_bounds: Bounds,
) -> Option<M> {
    if event.is_broadcast() {
        let mut result: Option<M> = None;
        for (child, bounds) in children.iter_mut().zip(child_bounds.iter()) {
            let absolute_bounds = bounds.translate(container_bounds);
            if let Some(msg) = child.on_event(event, absolute_bounds) {
                result = Some(msg);
            }
        }
        return result;
    }

    if matches!(event, Event::TextInput { .. } | Event::KeyPress { .. }) {
        for (child, bounds) in children.iter_mut().zip(child_bounds.iter()) {
            let absolute_bounds = bounds.translate(container_bounds);
            if let Some(msg) = child.on_event(event, absolute_bounds) {
                return Some(msg);
            }
        }
        return None;
    }

    let has_drag = children.iter().any(|c| c.has_active_drag());

    // Releases always pass so a drag started inside can end outside
    let should_filter = !matches!(event, Event::MouseRelease { .. })
        && !(matches!(event, Event::MouseMove { .. }) && has_drag);

    if should_filter {
        if let Some((x, y)) = event.position() {
            if !container_bounds.contains(x, y) && !has_drag {
                return None;
            }
        }
    }

    // A dragging child owns the pointer
    if has_drag {
        for (child, bounds) in children.iter_mut().zip(child_bounds.iter()) {
            if child.has_active_drag() {
                let absolute_bounds = bounds.translate(container_bounds);
                return child.on_event(event, absolute_bounds);
            }
        }
    }

    // Pointer moves reach every child so hover state can clear on leave
    if matches!(event, Event::MouseMove { .. } | Event::MouseRelease { .. }) {
        let mut result: Option<M> = None;
        for (child, bounds) in children.iter_mut().zip(child_bounds.iter()) {
            let absolute_bounds = bounds.translate(container_bounds);
            if let Some(msg) = child.on_event(event, absolute_bounds) {
                result = Some(msg);
            }
        }
        return result;
    }

    for (child, bounds) in children.iter_mut().zip(child_bounds.iter()) {
        let absolute_bounds = bounds.translate(container_bounds);
        if let Some(pos) = event.position() {
            if !absolute_bounds.contains(pos.0, pos.1) {
                continue;
            }
        }
        if let Some(msg) = child.on_event(event, absolute_bounds) {
            return Some(msg);
        }
    }

    None
}

/// Draw all children at their cached positions
pub fn draw_children<M>(
    children: &[Element<M>],
    child_bounds: &[Bounds],
    renderer: &mut Renderer,
    container_bounds: Bounds,
) {
    for (child, bounds) in children.iter().zip(child_bounds.iter()) {
        child.draw(renderer, bounds.translate(container_bounds));
    }
}
