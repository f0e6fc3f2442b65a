//! Callback abstraction for widget event handlers
//!
//! Instead of manually writing `Option<Box<dyn Fn(T) -> M>>` repeatedly,
//! widgets use `Callback<T, M>` for handlers that produce application messages
//! and `SideEffect<T>` for handlers that only notify.
//!
//! # Examples
//!
//! ```ignore
//! use popviz_ui::Callback;
//!
//! struct MyWidget<M> {
//!     on_change: Callback<f64, M>,
//! }
//!
//! impl<M> MyWidget<M> {
//!     fn trigger_change(&self, value: f64) -> Option<M> {
//!         self.on_change.call(value)
//!     }
//! }
//! ```

use std::fmt;

/// A callback wrapper that encapsulates optional event handlers.
///
/// # Type Parameters
///
/// - `T`: The input type for the callback (e.g., new widget state)
/// - `M`: The message type returned by the callback
pub struct Callback<T, M> {
    f: Option<Box<dyn Fn(T) -> M>>,
}

impl<T, M> Callback<T, M> {
    /// Create a new callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> M + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the callback with a value, if it exists.
    ///
    /// Returns `Some(message)` if the callback is set, or `None` if no callback is registered.
    pub fn call(&self, value: T) -> Option<M> {
        self.f.as_ref().map(|f| f(value))
    }

    /// Check if the callback is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }
}

impl<T, M> Default for Callback<T, M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T, M> fmt::Debug for Callback<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_some())
            .finish()
    }
}

// =============================================================================
// Side-effect Callback (SideEffect)
// =============================================================================

/// A side-effect callback that doesn't return a message.
///
/// Used for synchronous notifications such as a range selection change, where
/// the owner reacts through state it captured in the closure.
///
/// # Example
///
/// ```ignore
/// let seen = Rc::new(Cell::new((0.0, 0.0)));
/// let sink = Rc::clone(&seen);
/// let notify = SideEffect::new(move |(min, max)| sink.set((min, max)));
/// ```
pub struct SideEffect<T = ()> {
    f: Option<Box<dyn Fn(T)>>,
}

impl<T> SideEffect<T> {
    /// Create a new side-effect callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty side-effect callback.
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the side-effect callback, if it exists.
    pub fn emit(&self, value: T) {
        if let Some(ref f) = self.f {
            f(value);
        }
    }

    /// Check if the callback is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }
}

impl<T> Default for SideEffect<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> fmt::Debug for SideEffect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SideEffect")
            .field("set", &self.is_some())
            .finish()
    }
}
