//! Window stack and z-order
//!
//! The manager owns every live window in a single ordered sequence where
//! index 0 is the bottom of the stack. Stacking values are derived from
//! the index by [`WindowManager::restack`], which runs after every
//! structural change (add, remove, focus) and is the only writer of a
//! window's stacking value.

use tracing::{debug, warn};

use super::window::Window;
use crate::events::WindowEvent;
use crate::math::Vec2;
use crate::surface::WindowSurface;
use crate::types::WindowId;

/// Ordered collection of live windows
pub struct WindowManager<S: WindowSurface> {
    /// Bottom to top
    stack: Vec<Window<S>>,
    /// Region window panes are attached to
    desktop: S::Container,
    /// Region taskbar entries are attached to
    taskbar: S::Container,
    /// Per-window cascade step for windows without explicit position
    cascade_offset: Vec2,
    /// Stacking value of the bottom window
    stacking_base: u32,
}

impl<S: WindowSurface> WindowManager<S> {
    /// Create an empty manager bound to its desktop and taskbar regions
    pub fn new(
        desktop: S::Container,
        taskbar: S::Container,
        cascade_offset: Vec2,
        stacking_base: u32,
    ) -> Self {
        Self {
            stack: Vec::new(),
            desktop,
            taskbar,
            cascade_offset,
            stacking_base,
        }
    }

    /// Number of live windows
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Whether there are no live windows
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Whether `id` is in the stack
    pub fn contains(&self, id: WindowId) -> bool {
        self.position_of(id).is_some()
    }

    /// Get a window by id
    pub fn get(&self, id: WindowId) -> Option<&Window<S>> {
        self.stack.iter().find(|w| w.id() == id)
    }

    /// Get a window by id for interaction and toggles
    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut Window<S>> {
        self.stack.iter_mut().find(|w| w.id() == id)
    }

    /// Windows from bottom to top
    pub fn windows_by_z(&self) -> impl Iterator<Item = &Window<S>> {
        self.stack.iter()
    }

    /// Window ids from bottom to top
    pub fn ids(&self) -> Vec<WindowId> {
        self.stack.iter().map(|w| w.id()).collect()
    }

    /// Topmost window (the most recently added or focused)
    pub fn topmost(&self) -> Option<WindowId> {
        self.stack.last().map(|w| w.id())
    }

    /// Topmost window that is not minimized
    pub fn topmost_visible(&self) -> Option<WindowId> {
        self.stack
            .iter()
            .rev()
            .find(|w| !w.is_minimized())
            .map(|w| w.id())
    }

    /// Desktop region windows are attached to
    pub fn desktop(&self) -> &S::Container {
        &self.desktop
    }

    /// Taskbar region entries are attached to
    pub fn taskbar(&self) -> &S::Container {
        &self.taskbar
    }

    fn position_of(&self, id: WindowId) -> Option<usize> {
        self.stack.iter().position(|w| w.id() == id)
    }

    /// Register a window on top of the stack
    ///
    /// Windows created without an explicit position are cascaded: the
    /// centered default position plus the cascade offset times the number
    /// of windows already open. The pane is attached to the desktop region
    /// and the taskbar entry to the taskbar region.
    ///
    /// Returns `false` (and drops `window`) if its id is already present.
    pub fn add_window(&mut self, mut window: Window<S>) -> bool {
        let id = window.id();
        if self.contains(id) {
            warn!(window = id, "window already registered");
            return false;
        }

        if !window.has_explicit_position() {
            let count = self.stack.len() as f32;
            let pos = window.geometry().home().position() + self.cascade_offset * count;
            window.place_at(pos);
        }

        window.attach_to(&self.desktop);
        window.attach_taskbar_entry(&self.taskbar);
        self.stack.push(window);
        self.restack();

        debug!(window = id, count = self.stack.len(), "window added");
        true
    }

    /// Remove and detach a window
    ///
    /// Returns the detached window, or `None` if it was not present.
    pub fn remove_window(&mut self, id: WindowId) -> Option<Window<S>> {
        let Some(index) = self.position_of(id) else {
            warn!(window = id, "remove of unknown window ignored");
            return None;
        };

        let mut window = self.stack.remove(index);
        window.detach();
        self.restack();

        debug!(window = id, count = self.stack.len(), "window removed");
        Some(window)
    }

    /// Raise a window to the top of the stack
    ///
    /// Returns `false` if the window is not present. Focusing the topmost
    /// window leaves the stack unchanged.
    pub fn focus_window(&mut self, id: WindowId) -> bool {
        let Some(index) = self.position_of(id) else {
            warn!(window = id, "focus of unknown window ignored");
            return false;
        };

        if index + 1 != self.stack.len() {
            let window = self.stack.remove(index);
            self.stack.push(window);
            self.restack();
            debug!(window = id, "window focused");
        }
        true
    }

    /// Reassign stacking values from stack order
    ///
    /// Values strictly increase with position: `stacking_base + index`.
    /// They saturate at `u32::MAX` instead of wrapping.
    pub fn restack(&mut self) {
        let base = self.stacking_base;
        for (index, window) in self.stack.iter_mut().enumerate() {
            let offset = u32::try_from(index).unwrap_or(u32::MAX);
            window.set_stacking(base.saturating_add(offset));
        }
    }

    /// Apply one window event
    pub fn handle_event(&mut self, event: WindowEvent<S>) {
        match event {
            WindowEvent::Created(window) => {
                self.add_window(window);
            }
            WindowEvent::FocusRequested(id) => {
                self.focus_window(id);
            }
            WindowEvent::CloseRequested(id) => {
                self.remove_window(id);
            }
        }
    }

    /// Detach and drop every window (page teardown)
    ///
    /// Returns how many windows were closed.
    pub fn close_all(&mut self) -> usize {
        let count = self.stack.len();
        for mut window in self.stack.drain(..).rev() {
            window.detach();
        }
        debug!(count, "all windows closed");
        count
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::events::EventBus;
    use crate::math::Size;
    use crate::surface::HeadlessSurface;
    use crate::window::{WindowConfig, WindowDefaults};
    use proptest::prelude::*;

    #[derive(Clone, Debug)]
    enum Op {
        Add,
        Focus(usize),
        Remove(usize),
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Add),
            (0usize..16).prop_map(Op::Focus),
            (0usize..16).prop_map(Op::Remove),
        ]
    }

    proptest! {
        /// Stacking values stay strictly increasing and ids stay unique
        /// across any sequence of add/focus/remove
        #[test]
        fn stacking_is_monotonic(ops in prop::collection::vec(arb_op(), 1..40)) {
            let bus = EventBus::new();
            let defaults = WindowDefaults::centered(
                Size::new(1280.0, 720.0),
                Size::new(900.0, 600.0),
                Size::new(100.0, 60.0),
            );
            let mut wm: WindowManager<HeadlessSurface> =
                WindowManager::new("d".into(), "t".into(), Vec2::new(20.0, 20.0), 1);
            let mut next_id = 1;

            for op in ops {
                match op {
                    Op::Add => {
                        let w = Window::new(
                            next_id,
                            WindowConfig::new("/p", "P"),
                            &defaults,
                            HeadlessSurface::new(),
                            &bus,
                        );
                        prop_assert!(wm.add_window(w));
                        prop_assert_eq!(wm.topmost(), Some(next_id));
                        next_id += 1;
                    }
                    Op::Focus(n) => {
                        let id = n as WindowId;
                        let present = wm.contains(id);
                        prop_assert_eq!(wm.focus_window(id), present);
                        if present {
                            prop_assert_eq!(wm.topmost(), Some(id));
                        }
                    }
                    Op::Remove(n) => {
                        let id = n as WindowId;
                        let before = wm.len();
                        let removed = wm.remove_window(id).is_some();
                        prop_assert_eq!(wm.len(), if removed { before - 1 } else { before });
                    }
                }

                let values: Vec<u32> = wm.windows_by_z().filter_map(|w| w.stacking()).collect();
                prop_assert_eq!(values.len(), wm.len());
                prop_assert!(values.windows(2).all(|p| p[0] < p[1]));

                let mut ids = wm.ids();
                ids.sort_unstable();
                ids.dedup();
                prop_assert_eq!(ids.len(), wm.len());
            }
        }
    }
}
