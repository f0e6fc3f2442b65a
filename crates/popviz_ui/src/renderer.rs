//! Headless renderer that records draw commands
//!
//! Widgets describe a frame through high-level primitives; the renderer keeps
//! them as an ordered list of [`DrawCommand`]s that a presentation backend (or a
//! test) consumes. Later commands paint over earlier ones.

use crate::layout::Bounds;

/// A draw command recorded during a frame
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        bounds: Bounds,
        color: Color,
    },
    StrokeRect {
        bounds: Bounds,
        color: Color,
        width: f32,
    },
    FillCircle {
        center: (f32, f32),
        radius: f32,
        color: Color,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        color: Color,
        width: f32,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
    },
}

/// The renderer abstracts presentation details away from widgets.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl Renderer {
    /// Create a renderer for a surface of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Resize the surface
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Get the current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Drop all recorded commands (start of a frame)
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Commands recorded for the current frame, in paint order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// All text drawn this frame, in paint order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Find the first text command with exactly this content
    pub fn find_text(&self, needle: &str) -> Option<&DrawCommand> {
        self.commands
            .iter()
            .find(|cmd| matches!(cmd, DrawCommand::Text { text, .. } if text == needle))
    }

    // Drawing primitives that widgets can use

    /// Draw a filled rectangle.
    pub fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        self.commands.push(DrawCommand::FillRect { bounds, color });
    }

    /// Draw a rectangle outline.
    pub fn stroke_rect(&mut self, bounds: Bounds, color: Color, width: f32) {
        self.commands
            .push(DrawCommand::StrokeRect { bounds, color, width });
    }

    /// Draw a filled circle.
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center: (cx, cy),
            radius,
            color,
        });
    }

    /// Draw a line segment.
    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color, width: f32) {
        self.commands.push(DrawCommand::Line {
            from: (x1, y1),
            to: (x2, y2),
            color,
            width,
        });
    }

    /// Draw text with its top-left corner at `(x, y)`.
    pub fn text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            size,
            color,
        });
    }
}

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Main text color
    pub const TEXT_PRIMARY: Color = Color::rgb(0.1, 0.1, 0.12);
    /// De-emphasized text
    pub const TEXT_SECONDARY: Color = Color::rgb(0.4, 0.4, 0.45);
    /// Neutral border
    pub const BORDER: Color = Color::rgb(0.7, 0.7, 0.72);
    /// Range track background (lightgray)
    pub const TRACK: Color = Color::rgb(0.827, 0.827, 0.827);
    /// Selected span of the range track (dodgerblue)
    pub const ACCENT: Color = Color::rgb(0.118, 0.565, 1.0);
    /// Handle shadow
    pub const SHADOW: Color = Color::rgba(0.0, 0.0, 0.0, 0.5);
    /// Bar fill
    pub const BAR_FILL: Color = Color::rgba(0.294, 0.753, 0.753, 0.6);
    /// Bar outline
    pub const BAR_BORDER: Color = Color::rgb(0.294, 0.753, 0.753);
    /// Warning banner background
    pub const WARNING: Color = Color::rgb(1.0, 0.957, 0.898);
    /// Warning banner text
    pub const WARNING_TEXT: Color = Color::rgb(0.4, 0.235, 0.0);
    /// Button background
    pub const BUTTON_BG: Color = Color::rgb(0.94, 0.94, 0.95);
    /// Hovered button background
    pub const BUTTON_HOVER: Color = Color::rgb(0.88, 0.9, 0.94);
    /// Pressed button background
    pub const BUTTON_ACTIVE: Color = Color::rgb(0.8, 0.84, 0.9);
    /// Tooltip background
    pub const TOOLTIP_BG: Color = Color::rgba(0.1, 0.1, 0.12, 0.9);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Move each channel towards white by `amount` (0..1)
    pub fn lighten(&self, amount: f32) -> Self {
        Self {
            r: self.r + (1.0 - self.r) * amount,
            g: self.g + (1.0 - self.g) * amount,
            b: self.b + (1.0 - self.b) * amount,
            a: self.a,
        }
    }

    /// Move each channel towards black by `amount` (0..1)
    pub fn darken(&self, amount: f32) -> Self {
        Self {
            r: self.r * (1.0 - amount),
            g: self.g * (1.0 - amount),
            b: self.b * (1.0 - amount),
            a: self.a,
        }
    }
}
