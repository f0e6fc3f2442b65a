//! Column layout widget

use crate::constants::DEFAULT_SPACING;
use crate::element::Element;
use crate::event::Event;
use crate::layout::{Alignment, Bounds, Length, Padding, Size};
use crate::renderer::Renderer;
use crate::widget::Widget;

use super::container_helpers;

/// A vertical column layout widget
pub struct Column<M> {
    children: Vec<Element<M>>,
    spacing: f32,
    padding: Padding,
    width: Length,
    height: Length,
    align_x: Alignment,
    /// Cached child bounds from layout
    child_bounds: Vec<Bounds>,
}

impl<M> Column<M> {
    /// Create a new column with the given children
    pub fn new(children: Vec<Element<M>>) -> Self {
        Self {
            children,
            spacing: DEFAULT_SPACING,
            padding: Padding::ZERO,
            width: Length::Shrink,
            height: Length::Shrink,
            align_x: Alignment::Start,
            child_bounds: Vec::new(),
        }
    }

    /// Append a child
    pub fn push(mut self, child: Element<M>) -> Self {
        self.children.push(child);
        self
    }

    /// Set spacing between children
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set padding around the column
    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Set the width
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Set the height
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    /// Set horizontal alignment of children
    pub fn align_x(mut self, align: Alignment) -> Self {
        self.align_x = align;
        self
    }
}

impl<M: 'static> Widget<M> for Column<M> {
    fn has_active_drag(&self) -> bool {
        self.children.iter().any(|c| c.has_active_drag())
    }

    fn layout(&mut self, available: Size) -> Size {
        let inner_available = Size::new(
            (available.width - self.padding.horizontal()).max(0.0),
            (available.height - self.padding.vertical()).max(0.0),
        );

        let mut max_width: f32 = 0.0;
        for child in self.children.iter_mut() {
            let child_size = child.layout(inner_available);
            max_width = max_width.max(child_size.width);
        }

        let align_width = if self.width == Length::Shrink {
            max_width
        } else {
            self.width
                .resolve(available.width, max_width + self.padding.horizontal())
                - self.padding.horizontal()
        };

        self.child_bounds.clear();
        let mut y = self.padding.top;
        for child in self.children.iter() {
            let child_size = child.cached_size();
            let x_offset = self.align_x.align(align_width, child_size.width);
            self.child_bounds.push(Bounds::new(
                self.padding.left + x_offset,
                y,
                child_size.width,
                child_size.height,
            ));
            y += child_size.height + self.spacing;
        }

        let content_height = if self.children.is_empty() {
            0.0
        } else {
            y - self.spacing - self.padding.top
        };
        log::trace!(
            "Column layout: {} children, content {}x{}",
            self.children.len(),
            max_width,
            content_height
        );

        Size::new(
            self.width
                .resolve(available.width, max_width + self.padding.horizontal()),
            self.height
                .resolve(available.height, content_height + self.padding.vertical()),
        )
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        container_helpers::draw_children(&self.children, &self.child_bounds, renderer, bounds);
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        container_helpers::dispatch_event_to_children(
            &mut self.children,
            &self.child_bounds,
            event,
            bounds,
        )
    }
}

/// Helper function to create a column
pub fn column<M>(children: Vec<Element<M>>) -> Column<M> {
    Column::new(children)
}
