//! Window event protocol
//!
//! Windows never change the window stack themselves. They express intent
//! by emitting [`WindowEvent`]s onto a page-level [`EventBus`]; the
//! `WindowManager` consumes them and is the only writer of ordering.
//!
//! | Event            | Payload         | Meaning                              |
//! |------------------|-----------------|--------------------------------------|
//! | `Created`        | the window      | register and attach a new window     |
//! | `FocusRequested` | window id       | raise the window to the top          |
//! | `CloseRequested` | window id       | detach and remove the window         |

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use crate::surface::WindowSurface;
use crate::types::WindowId;
use crate::window::Window;

/// Lifecycle event emitted by a window
pub enum WindowEvent<S: WindowSurface> {
    /// A new window exists; ownership moves to whoever handles the event
    Created(Window<S>),
    /// The window wants to become topmost
    FocusRequested(WindowId),
    /// The window wants to be detached and removed
    CloseRequested(WindowId),
}

impl<S: WindowSurface> WindowEvent<S> {
    /// Id of the window the event is about
    pub fn window_id(&self) -> WindowId {
        match self {
            WindowEvent::Created(window) => window.id(),
            WindowEvent::FocusRequested(id) | WindowEvent::CloseRequested(id) => *id,
        }
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            WindowEvent::Created(_) => "created",
            WindowEvent::FocusRequested(_) => "focus_requested",
            WindowEvent::CloseRequested(_) => "close_requested",
        }
    }
}

impl<S: WindowSurface> fmt::Debug for WindowEvent<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(self.name()).field(&self.window_id()).finish()
    }
}

/// Single-threaded FIFO of window events
///
/// Cloning is cheap; every clone feeds the same queue. Events are handed
/// out in the order they were emitted.
pub struct EventBus<S: WindowSurface> {
    queue: Rc<RefCell<VecDeque<WindowEvent<S>>>>,
}

impl<S: WindowSurface> Clone for EventBus<S> {
    fn clone(&self) -> Self {
        Self {
            queue: Rc::clone(&self.queue),
        }
    }
}

impl<S: WindowSurface> Default for EventBus<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: WindowSurface> EventBus<S> {
    /// Create an empty bus
    pub fn new() -> Self {
        Self {
            queue: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Enqueue an event
    pub fn emit(&self, event: WindowEvent<S>) {
        tracing::trace!(event = event.name(), window = event.window_id(), "emit");
        self.queue.borrow_mut().push_back(event);
    }

    /// Take the oldest pending event
    pub fn next_event(&self) -> Option<WindowEvent<S>> {
        self.queue.borrow_mut().pop_front()
    }

    /// Number of pending events
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl<S: WindowSurface + 'static> EventBus<S> {
    /// Hook that requests focus for `id` whenever it fires
    ///
    /// Handed to the window's surface so interaction inside hosted content
    /// reaches the same `FocusRequested` path as a click on the window.
    pub fn focus_hook(&self, id: WindowId) -> InteractionHook {
        let bus = self.clone();
        InteractionHook::new(move || bus.emit(WindowEvent::FocusRequested(id)))
    }
}

/// "Notify on interaction" callback exposed to hosted content
#[derive(Clone)]
pub struct InteractionHook {
    notify: Rc<dyn Fn()>,
}

impl InteractionHook {
    /// Wrap a callback
    pub fn new(notify: impl Fn() + 'static) -> Self {
        Self {
            notify: Rc::new(notify),
        }
    }

    /// Report an interaction
    pub fn notify(&self) {
        (self.notify)();
    }
}

impl fmt::Debug for InteractionHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("InteractionHook")
    }
}
