//! Input events delivered to widgets

use std::time::Duration;

/// Events that widgets can respond to.
///
/// Positions are absolute surface coordinates `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Mouse button pressed over the widget tree
    MousePress {
        button: MouseButton,
        position: (f32, f32),
        modifiers: KeyModifiers,
    },
    /// Mouse button pressed anywhere; sent to every widget before `MousePress`
    /// so focused widgets can blur on outside clicks
    GlobalMousePress {
        button: MouseButton,
        position: (f32, f32),
    },
    /// Mouse button released
    MouseRelease {
        button: MouseButton,
        position: (f32, f32),
        modifiers: KeyModifiers,
    },
    /// Pointer moved
    MouseMove {
        position: (f32, f32),
        modifiers: KeyModifiers,
    },
    /// Key pressed
    KeyPress {
        key: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Committed text from the keyboard
    TextInput { text: String },
    /// The surface lost keyboard focus
    FocusLost,
    /// Time advanced by `elapsed` since the previous tick
    Tick { elapsed: Duration },
}

impl Event {
    /// Pointer position carried by the event, if any
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            Event::MousePress { position, .. }
            | Event::GlobalMousePress { position, .. }
            | Event::MouseRelease { position, .. }
            | Event::MouseMove { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Events every widget must see regardless of where the pointer is
    pub fn is_broadcast(&self) -> bool {
        matches!(
            self,
            Event::GlobalMousePress { .. } | Event::FocusLost | Event::Tick { .. }
        )
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Keyboard keys (simplified set).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    Other,
}

/// Keyboard modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}
