//! Desktop engine coordinating all components
//!
//! The engine is the page-level dispatcher: it owns the event bus, the
//! window manager and the viewport, allocates window ids and routes host
//! input (pointer events on a window, taskbar clicks) to the right window.
//! After every routed input it drains the event bus into the manager so
//! structural changes are applied in the order windows requested them.

use serde::Serialize;
use tracing::{debug, info};

use crate::config::DesktopConfig;
use crate::error::{DesktopError, DesktopResult};
use crate::events::EventBus;
use crate::input::InputResult;
use crate::math::{Rect, Vec2};
use crate::surface::WindowSurface;
use crate::types::{PointerId, WindowId};
use crate::viewport::Viewport;
use crate::window::{Window, WindowConfig, WindowDefaults, WindowManager, WindowRegion};

/// Serializable view of one window for a rendering host
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WindowSnapshot {
    pub id: WindowId,
    pub title: String,
    pub address: String,
    /// Geometry resolved to pixels in the current viewport
    pub rect: Rect,
    pub maximized: bool,
    pub minimized: bool,
    pub stacking: u32,
    /// Highest stacking value on the desktop
    pub topmost: bool,
}

/// Desktop engine coordinating the window stack, events and input
pub struct DesktopEngine<S: WindowSurface> {
    config: DesktopConfig,
    viewport: Viewport,
    windows: WindowManager<S>,
    events: EventBus<S>,
    next_window_id: WindowId,
}

impl<S: WindowSurface> DesktopEngine<S> {
    /// Create an engine bound to its desktop and taskbar regions
    pub fn new(config: DesktopConfig, desktop: S::Container, taskbar: S::Container) -> Self {
        let windows = WindowManager::new(
            desktop,
            taskbar,
            config.cascade_offset,
            config.stacking_base,
        );
        Self {
            config,
            viewport: Viewport::default(),
            windows,
            events: EventBus::new(),
            next_window_id: 1,
        }
    }

    /// Initialize with the desktop region's dimensions
    pub fn init(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        info!(width, height, "desktop initialized");
    }

    /// Update the desktop region's dimensions
    ///
    /// Existing windows keep their pixel geometry; maximized windows
    /// follow the viewport through their percentage layout.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        debug!(width, height, "viewport resized");
    }

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Read access to the window stack
    pub fn windows(&self) -> &WindowManager<S> {
        &self.windows
    }

    /// Event bus shared with every window
    pub fn events(&self) -> &EventBus<S> {
        &self.events
    }

    /// Id the next opened window will receive
    ///
    /// Hosts that bind a surface to its window id build it with this.
    pub fn next_window_id(&self) -> WindowId {
        self.next_window_id
    }

    /// Geometry defaults for the current viewport
    pub fn window_defaults(&self) -> WindowDefaults {
        WindowDefaults::centered(
            self.viewport.size,
            self.config.default_size,
            self.config.min_size,
        )
    }

    /// Apply every pending window event to the manager
    ///
    /// Returns how many events were processed.
    pub fn dispatch_events(&mut self) -> usize {
        let mut processed = 0;
        while let Some(event) = self.events.next_event() {
            debug!(event = event.name(), window = event.window_id(), "dispatch");
            self.windows.handle_event(event);
            processed += 1;
        }
        processed
    }

    /// Focus a window through its focus request
    pub fn focus_window(&mut self, id: WindowId) -> bool {
        let Some(window) = self.windows.get(id) else {
            return false;
        };
        window.request_focus();
        self.dispatch_events();
        true
    }

    /// Close a window through its close request
    pub fn close_window(&mut self, id: WindowId) -> bool {
        let Some(window) = self.windows.get(id) else {
            return false;
        };
        window.request_close();
        self.dispatch_events();
        true
    }

    /// Toggle minimized; returns the new state
    pub fn toggle_minimized(&mut self, id: WindowId) -> Option<bool> {
        self.windows.get_mut(id).map(|w| w.toggle_minimized())
    }

    /// Toggle maximized; returns the new state
    pub fn toggle_maximized(&mut self, id: WindowId) -> Option<bool> {
        self.windows.get_mut(id).map(|w| w.toggle_maximized())
    }

    /// Handle pointer-down on a region of a window
    ///
    /// Every region raises the window. The status bar starts a move, a
    /// border starts a resize and the buttons minimize, maximize or close.
    pub fn handle_pointer_down(
        &mut self,
        id: WindowId,
        region: WindowRegion,
        pointer: PointerId,
        x: f32,
        y: f32,
    ) -> InputResult {
        let Some(window) = self.windows.get_mut(id) else {
            return InputResult::Unhandled;
        };
        let at = Vec2::new(x, y);

        window.request_focus();
        match region {
            WindowRegion::Content => {}
            WindowRegion::TitleBar => window.begin_move(pointer, at),
            WindowRegion::Resize(handle) => window.begin_resize(pointer, handle.edges(), at),
            WindowRegion::MinimizeButton => {
                window.toggle_minimized();
            }
            WindowRegion::MaximizeButton => {
                window.toggle_maximized();
            }
            WindowRegion::CloseButton => window.request_close(),
        }

        self.dispatch_events();
        InputResult::Handled
    }

    /// Handle pointer-move for a window's interaction session
    pub fn handle_pointer_move(
        &mut self,
        id: WindowId,
        pointer: PointerId,
        x: f32,
        y: f32,
    ) -> InputResult {
        match self.windows.get_mut(id) {
            Some(window) if window.interaction().pointer() == Some(pointer) => {
                window.pointer_move(pointer, Vec2::new(x, y));
                InputResult::Handled
            }
            _ => InputResult::Unhandled,
        }
    }

    /// Handle pointer-up, ending the window's session
    pub fn handle_pointer_up(&mut self, id: WindowId, pointer: PointerId) -> InputResult {
        let ended = self
            .windows
            .get_mut(id)
            .is_some_and(|window| window.pointer_up(pointer));
        if ended {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    /// Handle pointer-cancel or lost capture, forcing the session to Idle
    pub fn handle_pointer_cancel(&mut self, id: WindowId, pointer: PointerId) -> InputResult {
        match self.windows.get_mut(id) {
            Some(window) if window.interaction().pointer() == Some(pointer) => {
                window.cancel_interaction();
                InputResult::Handled
            }
            _ => InputResult::Unhandled,
        }
    }

    /// Handle a click on a window's taskbar entry
    ///
    /// A minimized window is shown and raised; the topmost visible window
    /// is minimized; any other window is raised.
    pub fn handle_taskbar_click(&mut self, id: WindowId) -> InputResult {
        let topmost_visible = self.windows.topmost_visible();
        let Some(window) = self.windows.get_mut(id) else {
            return InputResult::Unhandled;
        };

        if window.is_minimized() {
            window.toggle_minimized();
            window.request_focus();
        } else if topmost_visible == Some(id) {
            window.toggle_minimized();
        } else {
            window.request_focus();
        }

        self.dispatch_events();
        InputResult::Handled
    }

    /// Snapshot of one window
    pub fn snapshot(&self, id: WindowId) -> DesktopResult<WindowSnapshot> {
        let window = self
            .windows
            .get(id)
            .ok_or(DesktopError::WindowNotFound(id))?;
        Ok(self.snapshot_of(window))
    }

    /// Snapshots of all windows, bottom to top
    pub fn snapshots(&self) -> Vec<WindowSnapshot> {
        self.windows
            .windows_by_z()
            .map(|w| self.snapshot_of(w))
            .collect()
    }

    /// Snapshots rendered as JSON for a JS host
    pub fn snapshot_json(&self) -> DesktopResult<String> {
        Ok(serde_json::to_string(&self.snapshots())?)
    }

    fn snapshot_of(&self, window: &Window<S>) -> WindowSnapshot {
        WindowSnapshot {
            id: window.id(),
            title: window.content().title.clone(),
            address: window.content().address.clone(),
            rect: window.geometry().resolve(self.viewport.size),
            maximized: window.is_maximized(),
            minimized: window.is_minimized(),
            stacking: window.stacking().unwrap_or(self.config.stacking_base),
            topmost: self.windows.topmost() == Some(window.id()),
        }
    }

    /// Detach every remaining window (page teardown)
    pub fn shutdown(&mut self) -> usize {
        self.dispatch_events();
        self.windows.close_all()
    }
}

impl<S: WindowSurface + 'static> DesktopEngine<S> {
    /// Open a window hosting `config.content` on the given surface
    ///
    /// The window announces itself with `Created`; the manager registers
    /// it on top of the stack before this returns.
    pub fn open_window(&mut self, config: WindowConfig, surface: S) -> WindowId {
        let id = self.next_window_id;
        self.next_window_id += 1;

        let defaults = self.window_defaults();
        Window::create(id, config, &defaults, surface, &self.events);
        self.dispatch_events();
        id
    }

    /// Open a window with default geometry
    pub fn open(&mut self, address: &str, title: &str, surface: S) -> WindowId {
        self.open_window(WindowConfig::new(address, title), surface)
    }
}
