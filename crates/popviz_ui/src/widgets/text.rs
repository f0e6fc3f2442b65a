//! Text widget

use crate::constants::{line_height, text_width, DEFAULT_FONT_SIZE};
use crate::layout::{Bounds, Length, Size};
use crate::renderer::{Color, Renderer};
use crate::widget::Widget;

/// A text display widget
pub struct Text {
    content: String,
    size: f32,
    color: Color,
    width: Length,
}

impl Text {
    /// Create a new text widget
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            size: DEFAULT_FONT_SIZE,
            color: Color::TEXT_PRIMARY,
            width: Length::Shrink,
        }
    }

    /// Set the font size
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set the text color
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the width
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    fn measure(&self) -> Size {
        Size::new(text_width(&self.content, self.size), line_height(self.size))
    }
}

impl<M> Widget<M> for Text {
    fn layout(&mut self, available: Size) -> Size {
        let content_size = self.measure();
        Size::new(
            self.width.resolve(available.width, content_size.width),
            content_size.height,
        )
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        renderer.text(&self.content, bounds.x, bounds.y, self.size, self.color);
    }
}

/// Helper function to create a text widget
pub fn text(content: impl Into<String>) -> Text {
    Text::new(content)
}
