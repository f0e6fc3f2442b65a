//! Application trait and the headless runtime that drives it

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use web_time::Instant;

use crate::element::Element;
use crate::event::{Event, KeyCode, KeyModifiers, MouseButton};
use crate::layout::{Bounds, Size};
use crate::renderer::Renderer;

/// Core application trait that defines the lifecycle of a popviz_ui application.
///
/// Inspired by the Elm Architecture: applications keep state, respond to
/// messages, and produce a view. The view is rebuilt after every message.
pub trait Application: Sized {
    /// The message type that this application handles.
    type Message: 'static;

    /// Title of the window (or session)
    fn title(&self) -> String;

    /// Update the application state in response to a message.
    fn update(&mut self, message: Self::Message);

    /// Produce the view tree for the current application state.
    fn view(&self) -> Element<Self::Message>;
}

/// Settings for running an application.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Window title (can be overridden by Application::title)
    pub window_title: Option<String>,

    /// Initial viewport size
    pub window_size: (u32, u32),

    /// Log level filter (can be overridden by `RUST_LOG`)
    pub log_level: log::LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: None,
            window_size: (1024, 900),
            log_level: log::LevelFilter::Info,
        }
    }
}

/// Initialize `env_logger` at `level`, letting `RUST_LOG` refine it.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(level: log::LevelFilter) {
    let result = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .try_init();
    if result.is_ok() {
        log::debug!("Logging initialized at {}", level);
    }
}

/// Registration of the global pointer listeners a drag needs.
///
/// While one is alive, pointer moves and releases are delivered even when the
/// pointer is outside the viewport. Dropping it unregisters the listeners.
#[derive(Debug)]
pub struct PointerGrab {
    listeners: Rc<Cell<usize>>,
}

impl PointerGrab {
    fn acquire(listeners: &Rc<Cell<usize>>) -> Self {
        listeners.set(listeners.get() + 1);
        log::trace!("Pointer grab acquired ({} listeners)", listeners.get());
        Self {
            listeners: Rc::clone(listeners),
        }
    }
}

impl Drop for PointerGrab {
    fn drop(&mut self) {
        self.listeners.set(self.listeners.get().saturating_sub(1));
        log::trace!("Pointer grab released ({} listeners)", self.listeners.get());
    }
}

/// Headless driver for an [`Application`].
///
/// Owns the current view, routes events into it, feeds produced messages to
/// `update`, and records frames into a [`Renderer`].
pub struct Runtime<A: Application> {
    app: A,
    root: Element<A::Message>,
    renderer: Renderer,
    viewport: Size,
    grab: Option<PointerGrab>,
    listeners: Rc<Cell<usize>>,
    last_tick: Instant,
}

impl<A: Application> Runtime<A> {
    pub fn new(app: A, settings: &Settings) -> Self {
        let (width, height) = settings.window_size;
        let viewport = Size::new(width as f32, height as f32);
        let title = settings.window_title.clone().unwrap_or_else(|| app.title());
        log::info!("Starting '{}' at {}x{}", title, width, height);

        let mut root = app.view();
        root.layout(viewport);

        Self {
            app,
            root,
            renderer: Renderer::new(width, height),
            viewport,
            grab: None,
            listeners: Rc::new(Cell::new(0)),
            last_tick: Instant::now(),
        }
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    /// Apply a message directly, as if a widget had produced it
    pub fn update(&mut self, message: A::Message) {
        self.app.update(message);
        self.rebuild();
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Size::new(width as f32, height as f32);
        self.renderer.resize(width, height);
        self.root.layout(self.viewport);
    }

    /// Whether a drag currently holds the pointer
    pub fn is_pointer_grabbed(&self) -> bool {
        self.grab.is_some()
    }

    /// Shared count of registered global pointer listeners
    pub fn pointer_listeners(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.listeners)
    }

    fn bounds(&self) -> Bounds {
        Bounds::from_size(self.viewport)
    }

    fn rebuild(&mut self) {
        self.root = self.app.view();
        self.root.layout(self.viewport);
        self.sync_grab();
    }

    /// Hold the grab exactly while some widget is dragging
    fn sync_grab(&mut self) {
        let dragging = self.root.has_active_drag();
        if dragging && self.grab.is_none() {
            self.grab = Some(PointerGrab::acquire(&self.listeners));
        } else if !dragging {
            self.grab = None;
        }
    }

    /// Deliver an event to the view. Returns true if it produced a message.
    pub fn dispatch(&mut self, event: Event) -> bool {
        let bounds = self.bounds();
        if let Some((x, y)) = event.position() {
            // Without a grab the host only reports the pointer inside the viewport
            if self.grab.is_none() && !bounds.contains(x, y) {
                return false;
            }
        }

        match self.root.on_event(&event, bounds) {
            Some(message) => {
                self.app.update(message);
                self.rebuild();
                true
            }
            None => {
                self.sync_grab();
                false
            }
        }
    }

    pub fn mouse_move(&mut self, x: f32, y: f32) -> bool {
        self.dispatch(Event::MouseMove {
            position: (x, y),
            modifiers: KeyModifiers::default(),
        })
    }

    /// Press the left button: every widget first sees the global press (to
    /// blur), then the targeted press is delivered.
    pub fn mouse_press(&mut self, x: f32, y: f32) -> bool {
        let blurred = self.dispatch(Event::GlobalMousePress {
            button: MouseButton::Left,
            position: (x, y),
        });
        let pressed = self.dispatch(Event::MousePress {
            button: MouseButton::Left,
            position: (x, y),
            modifiers: KeyModifiers::default(),
        });
        blurred || pressed
    }

    pub fn mouse_release(&mut self, x: f32, y: f32) -> bool {
        self.dispatch(Event::MouseRelease {
            button: MouseButton::Left,
            position: (x, y),
            modifiers: KeyModifiers::default(),
        })
    }

    pub fn key_press(&mut self, key: KeyCode) -> bool {
        self.dispatch(Event::KeyPress {
            key,
            modifiers: KeyModifiers::default(),
        })
    }

    pub fn text_input(&mut self, text: &str) -> bool {
        self.dispatch(Event::TextInput {
            text: text.to_string(),
        })
    }

    pub fn focus_lost(&mut self) -> bool {
        self.dispatch(Event::FocusLost)
    }

    /// Let a fixed amount of time pass
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.last_tick += elapsed;
        self.dispatch(Event::Tick { elapsed })
    }

    /// Let the wall-clock time since the previous tick pass
    pub fn tick(&mut self) -> bool {
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        self.dispatch(Event::Tick { elapsed })
    }

    /// Record the current view into the renderer
    pub fn frame(&mut self) -> &Renderer {
        let bounds = self.bounds();
        self.renderer.clear();
        self.root.draw(&mut self.renderer, bounds);
        &self.renderer
    }
}
