//! Button widget

use crate::constants::{line_height, text_width, BUTTON_PADDING, DEFAULT_FONT_SIZE};
use crate::event::{Event, MouseButton};
use crate::layout::{Alignment, Bounds, Length, Padding, Size};
use crate::renderer::{Color, Renderer};
use crate::widget::Widget;

/// Button state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ButtonState {
    #[default]
    Normal,
    Hovered,
    Pressed,
}

/// A clickable button widget
pub struct Button<M> {
    label: String,
    on_click: Option<M>,
    width: Length,
    height: Length,
    padding: Padding,
    state: ButtonState,
    /// Horizontal text alignment
    text_align: Alignment,
    /// Font size for button label
    font_size: f32,
}

impl<M> Button<M> {
    /// Create a new button with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_click: None,
            width: Length::Shrink,
            height: Length::Shrink,
            padding: BUTTON_PADDING,
            state: ButtonState::Normal,
            text_align: Alignment::Center,
            font_size: DEFAULT_FONT_SIZE,
        }
    }

    /// Set the click handler
    pub fn on_click(mut self, message: M) -> Self {
        self.on_click = Some(message);
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

    /// Set the padding
    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Set the text alignment
    pub fn text_align(mut self, align: Alignment) -> Self {
        self.text_align = align;
        self
    }

    /// Set the font size
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    fn content_size(&self) -> Size {
        Size::new(
            text_width(&self.label, self.font_size),
            line_height(self.font_size),
        )
    }

    fn background_color(&self) -> Color {
        match self.state {
            ButtonState::Normal => Color::BUTTON_BG,
            ButtonState::Hovered => Color::BUTTON_HOVER,
            ButtonState::Pressed => Color::BUTTON_ACTIVE,
        }
    }
}

impl<M: Clone + 'static> Widget<M> for Button<M> {
    fn layout(&mut self, available: Size) -> Size {
        let content = self.content_size();
        let min_width = content.width + self.padding.horizontal();
        let min_height = content.height + self.padding.vertical();

        Size::new(
            self.width.resolve(available.width, min_width),
            self.height.resolve(available.height, min_height),
        )
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        renderer.fill_rect(bounds, self.background_color());
        renderer.stroke_rect(bounds, Color::BORDER, 1.0);

        let content = self.content_size();
        let inner_width = bounds.width - self.padding.horizontal();
        let label_width = content.width.min(inner_width);
        let text_x = bounds.x + self.padding.left + self.text_align.align(inner_width, label_width);
        let text_y = bounds.y + (bounds.height - self.font_size) / 2.0;

        renderer.text(
            &self.label,
            text_x,
            text_y,
            self.font_size,
            Color::TEXT_PRIMARY,
        );
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        match event {
            Event::MouseMove { position, .. } => {
                let inside = bounds.contains(position.0, position.1);
                if inside && self.state != ButtonState::Pressed {
                    self.state = ButtonState::Hovered;
                } else if !inside && self.state == ButtonState::Hovered {
                    self.state = ButtonState::Normal;
                }
                None
            }

            Event::MousePress {
                button: MouseButton::Left,
                position,
                ..
            } => {
                if !bounds.contains(position.0, position.1) {
                    return None;
                }
                self.state = ButtonState::Pressed;
                // Fire on press: a blur from the same click may rebuild the
                // view before the release arrives
                log::debug!("Button '{}' clicked", self.label);
                self.on_click.clone()
            }

            Event::MouseRelease {
                button: MouseButton::Left,
                position,
                ..
            } => {
                self.state = if bounds.contains(position.0, position.1) {
                    ButtonState::Hovered
                } else {
                    ButtonState::Normal
                };
                None
            }

            _ => None,
        }
    }
}

/// Helper function to create a button
pub fn button<M>(label: impl Into<String>) -> Button<M> {
    Button::new(label)
}
