//! Window state and lifecycle

use tracing::{debug, trace};

use super::config::{ContentRef, WindowConfig, WindowDefaults};
use crate::events::{EventBus, WindowEvent};
use crate::geometry::{Geometry, ResizeEdges};
use crate::input::{DragKind, Gesture, InteractionController};
use crate::math::Vec2;
use crate::surface::WindowSurface;
use crate::types::{PointerId, WindowId};

/// Maximize control label while the window is not maximized
pub const MAXIMIZE_LABEL: &str = "Maximize";

/// Maximize control label while the window is maximized
pub const RESTORE_LABEL: &str = "Restore";

/// One open pane hosting an embedded document
///
/// A window owns its geometry, its visibility state, its interaction
/// controller and its surface. It never reorders itself: focus and close
/// are requests emitted on the event bus for the `WindowManager` to act on.
pub struct Window<S: WindowSurface> {
    id: WindowId,
    content: ContentRef,
    geometry: Geometry,
    minimized: bool,
    /// Stacking value, written only by the window manager
    stacking: Option<u32>,
    /// Position was given at creation, so no cascade
    explicit_position: bool,
    interaction: InteractionController,
    surface: S,
    attached_to: Option<S::Container>,
    taskbar_attached: bool,
    events: EventBus<S>,
}

impl<S: WindowSurface + 'static> Window<S> {
    /// Build a window without announcing it
    ///
    /// Sets up the surface with the initial geometry, the maximize label
    /// and the hosted content. The content's interaction hook feeds the
    /// same `FocusRequested` path as a pointer-down on the window body.
    pub fn new(
        id: WindowId,
        config: WindowConfig,
        defaults: &WindowDefaults,
        mut surface: S,
        events: &EventBus<S>,
    ) -> Self {
        let bounds = defaults.initial_bounds(&config);
        let geometry = Geometry::new(bounds, defaults.home, defaults.min_size);

        surface.set_maximize_label(MAXIMIZE_LABEL);
        surface.apply_layout(&geometry.layout());
        surface.set_visible(true);
        surface.watch_content(&config.content, events.focus_hook(id));

        Self {
            id,
            content: config.content,
            geometry,
            minimized: false,
            stacking: None,
            explicit_position: config.position.is_some(),
            interaction: InteractionController::new(),
            surface,
            attached_to: None,
            taskbar_attached: false,
            events: events.clone(),
        }
    }

    /// Build a window and emit `Created` so the manager registers it
    pub fn create(
        id: WindowId,
        config: WindowConfig,
        defaults: &WindowDefaults,
        surface: S,
        events: &EventBus<S>,
    ) -> WindowId {
        let window = Self::new(id, config, defaults, surface, events);
        debug!(window = id, title = %window.content.title, "window created");
        events.emit(WindowEvent::Created(window));
        id
    }
}

impl<S: WindowSurface> Window<S> {
    /// Unique id, stable for the window's lifetime
    pub fn id(&self) -> WindowId {
        self.id
    }

    /// Hosted document
    pub fn content(&self) -> &ContentRef {
        &self.content
    }

    /// Display title
    pub fn title(&self) -> &str {
        &self.content.title
    }

    /// Current geometry
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn is_maximized(&self) -> bool {
        self.geometry.is_maximized()
    }

    /// Stacking value assigned by the manager (None until registered)
    pub fn stacking(&self) -> Option<u32> {
        self.stacking
    }

    /// Whether the position was given explicitly at creation
    pub fn has_explicit_position(&self) -> bool {
        self.explicit_position
    }

    /// Whether the pane is inserted into a container
    pub fn is_attached(&self) -> bool {
        self.attached_to.is_some()
    }

    /// Whether a drag or resize session is in progress
    pub fn is_interacting(&self) -> bool {
        self.interaction.is_tracking()
    }

    /// Interaction state machine
    pub fn interaction(&self) -> &InteractionController {
        &self.interaction
    }

    /// Host surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Insert the pane into `container`
    ///
    /// Attaching again to the same container does nothing; a different
    /// container reparents the pane.
    pub fn attach_to(&mut self, container: &S::Container) {
        if self.attached_to.as_ref() == Some(container) {
            return;
        }
        if self.attached_to.is_some() {
            trace!(window = self.id, "reparenting window");
            self.surface.unmount();
        }
        self.surface.mount(container);
        self.attached_to = Some(container.clone());
    }

    /// Insert the taskbar entry into `taskbar` (once)
    pub(crate) fn attach_taskbar_entry(&mut self, taskbar: &S::Container) {
        if self.taskbar_attached {
            return;
        }
        self.surface.mount_taskbar_entry(taskbar);
        self.taskbar_attached = true;
    }

    /// Remove the pane and its taskbar entry
    ///
    /// Ends any interaction session. Returns `false` if nothing was attached.
    pub fn detach(&mut self) -> bool {
        if self.attached_to.is_none() && !self.taskbar_attached {
            return false;
        }
        self.cancel_interaction();
        if self.attached_to.take().is_some() {
            self.surface.unmount();
        }
        if self.taskbar_attached {
            self.surface.unmount_taskbar_entry();
            self.taskbar_attached = false;
        }
        true
    }

    /// Hide or show the pane; geometry and z-order are untouched
    ///
    /// Returns the new minimized state.
    pub fn toggle_minimized(&mut self) -> bool {
        self.minimized = !self.minimized;
        self.surface.set_visible(!self.minimized);
        self.surface.set_taskbar_minimized(self.minimized);
        debug!(window = self.id, minimized = self.minimized, "toggle minimized");
        self.minimized
    }

    /// Fill the viewport, or go back to the remembered geometry
    ///
    /// Returns the new maximized state.
    pub fn toggle_maximized(&mut self) -> bool {
        if self.geometry.is_maximized() {
            self.geometry.to_restored();
            self.surface.set_maximize_label(MAXIMIZE_LABEL);
        } else {
            self.geometry.to_maximized();
            self.surface.set_maximize_label(RESTORE_LABEL);
        }
        self.surface.apply_layout(&self.geometry.layout());
        debug!(window = self.id, maximized = self.is_maximized(), "toggle maximized");
        self.is_maximized()
    }

    /// Ask the manager to raise this window
    pub fn request_focus(&self) {
        self.events.emit(WindowEvent::FocusRequested(self.id));
    }

    /// Ask the manager to close this window
    pub fn request_close(&self) {
        self.events.emit(WindowEvent::CloseRequested(self.id));
    }

    /// Start dragging the window from its status bar
    pub fn begin_move(&mut self, pointer: PointerId, at: Vec2) {
        self.begin_interaction(pointer, DragKind::Move, at);
    }

    /// Start resizing the window from a border region
    pub fn begin_resize(&mut self, pointer: PointerId, edges: ResizeEdges, at: Vec2) {
        self.begin_interaction(pointer, DragKind::Resize(edges), at);
    }

    fn begin_interaction(&mut self, pointer: PointerId, kind: DragKind, at: Vec2) {
        if let Some(previous) = self.interaction.begin(pointer, kind, at) {
            self.surface.release_pointer(previous);
        }
        self.surface.capture_pointer(pointer);
        debug!(window = self.id, pointer, ?kind, "interaction started");
    }

    /// Apply one pointer-move step of the current session
    ///
    /// Returns `true` if the geometry changed. Steps while maximized are
    /// absorbed, but the recorded pointer position still advances.
    pub fn pointer_move(&mut self, pointer: PointerId, at: Vec2) -> bool {
        let Some(gesture) = self.interaction.track(pointer, at) else {
            return false;
        };

        let applied = match gesture {
            Gesture::Move { dx, dy } => self.geometry.move_by(dx, dy),
            Gesture::Resize { edges, dx, dy } => self.geometry.resize(edges, dx, dy),
        };

        if applied {
            self.surface.apply_layout(&self.geometry.layout());
        }
        trace!(window = self.id, ?gesture, applied, "interaction step");
        applied
    }

    /// End the session owned by `pointer` and release its capture
    pub fn pointer_up(&mut self, pointer: PointerId) -> bool {
        if !self.interaction.end(pointer) {
            return false;
        }
        self.surface.release_pointer(pointer);
        debug!(window = self.id, pointer, "interaction ended");
        true
    }

    /// Drop any session (cancel or lost capture) and release its capture
    pub fn cancel_interaction(&mut self) -> bool {
        match self.interaction.cancel() {
            Some(pointer) => {
                self.surface.release_pointer(pointer);
                debug!(window = self.id, pointer, "interaction cancelled");
                true
            }
            None => false,
        }
    }

    /// Assign the stacking value; the window manager is the only caller
    pub(crate) fn set_stacking(&mut self, z: u32) {
        if self.stacking != Some(z) {
            self.stacking = Some(z);
            self.surface.set_stacking(z);
        }
    }

    /// Move the top-left corner to `pos` (cascade placement)
    pub(crate) fn place_at(&mut self, pos: Vec2) {
        self.geometry.set_position(pos);
        self.surface.apply_layout(&self.geometry.layout());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{LayoutBox, Length, Rect, Size};
    use crate::surface::HeadlessSurface;

    fn defaults() -> WindowDefaults {
        WindowDefaults::centered(
            Size::new(1920.0, 1080.0),
            Size::new(900.0, 600.0),
            Size::new(100.0, 60.0),
        )
    }

    fn window_at(bus: &EventBus<HeadlessSurface>, x: f32, y: f32) -> Window<HeadlessSurface> {
        let config = WindowConfig {
            position: Some(Vec2::new(x, y)),
            ..WindowConfig::new("/posts/hello", "Hello")
        };
        Window::new(1, config, &defaults(), HeadlessSurface::new(), bus)
    }

    #[test]
    fn test_new_prepares_surface() {
        let bus = EventBus::new();
        let w = Window::new(
            3,
            WindowConfig::new("/posts/hello", "Hello"),
            &defaults(),
            HeadlessSurface::new(),
            &bus,
        );

        assert_eq!(w.id(), 3);
        assert_eq!(w.title(), "Hello");
        assert!(!w.has_explicit_position());
        assert_eq!(w.surface().maximize_label, MAXIMIZE_LABEL);
        assert_eq!(
            w.surface().layout,
            Some(LayoutBox::from_rect(Rect::new(510.0, 240.0, 900.0, 600.0)))
        );
        assert_eq!(
            w.surface().content,
            Some(ContentRef::new("/posts/hello", "Hello"))
        );
        assert_eq!(bus.pending(), 0);
    }

    #[test]
    fn test_create_emits_created() {
        let bus = EventBus::new();
        let id = Window::create(
            5,
            WindowConfig::new("/a", "A"),
            &defaults(),
            HeadlessSurface::new(),
            &bus,
        );
        assert_eq!(id, 5);
        match bus.next_event() {
            Some(WindowEvent::Created(w)) => assert_eq!(w.id(), 5),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_attach_is_idempotent_and_reparents() {
        let bus = EventBus::new();
        let mut w = window_at(&bus, 0.0, 0.0);
        let desktop = "desktop".to_string();

        w.attach_to(&desktop);
        w.attach_to(&desktop);
        assert_eq!(w.surface().mount_count, 1);

        let other = "other".to_string();
        w.attach_to(&other);
        assert_eq!(w.surface().mount_count, 2);
        assert_eq!(w.surface().parent.as_deref(), Some("other"));
    }

    #[test]
    fn test_detach_removes_pane_and_taskbar_entry() {
        let bus = EventBus::new();
        let mut w = window_at(&bus, 0.0, 0.0);
        assert!(!w.detach());

        w.attach_to(&"desktop".to_string());
        w.attach_taskbar_entry(&"taskbar".to_string());
        assert!(w.detach());
        assert!(!w.is_attached());
        assert_eq!(w.surface().parent, None);
        assert_eq!(w.surface().taskbar, None);
        assert!(!w.detach());
    }

    #[test]
    fn test_toggle_minimized_only_affects_visibility() {
        let bus = EventBus::new();
        let mut w = window_at(&bus, 100.0, 50.0);
        let before = w.geometry().clone();

        assert!(w.toggle_minimized());
        assert!(!w.surface().visible);
        assert!(w.surface().taskbar_minimized);
        assert_eq!(w.geometry(), &before);

        assert!(!w.toggle_minimized());
        assert!(w.surface().visible);
        assert!(!w.surface().taskbar_minimized);
    }

    #[test]
    fn test_toggle_maximized_round_trip_and_labels() {
        let bus = EventBus::new();
        let mut w = window_at(&bus, 100.0, 50.0);

        assert!(w.toggle_maximized());
        assert_eq!(w.surface().maximize_label, RESTORE_LABEL);
        let layout = w.surface().layout.unwrap();
        assert_eq!(layout.left, Length::Px(0.0));
        assert_eq!(layout.width, Length::Percent(100.0));

        assert!(!w.toggle_maximized());
        assert_eq!(w.surface().maximize_label, MAXIMIZE_LABEL);
        assert_eq!(w.geometry().bounds(), Rect::new(100.0, 50.0, 900.0, 600.0));
    }

    #[test]
    fn test_minimized_and_maximized_are_independent() {
        let bus = EventBus::new();
        let mut w = window_at(&bus, 100.0, 50.0);
        w.toggle_maximized();
        w.toggle_minimized();
        assert!(w.is_maximized());
        assert!(w.is_minimized());
        assert_eq!(w.geometry().layout(), LayoutBox::MAXIMIZED);
    }

    #[test]
    fn test_requests_go_through_bus() {
        let bus = EventBus::new();
        let w = window_at(&bus, 0.0, 0.0);
        w.request_focus();
        w.request_close();
        assert!(matches!(bus.next_event(), Some(WindowEvent::FocusRequested(1))));
        assert!(matches!(bus.next_event(), Some(WindowEvent::CloseRequested(1))));
    }

    #[test]
    fn test_content_interaction_requests_focus() {
        let bus = EventBus::new();
        let w = window_at(&bus, 0.0, 0.0);
        assert!(w.surface().simulate_content_interaction());
        assert!(matches!(bus.next_event(), Some(WindowEvent::FocusRequested(1))));
    }

    #[test]
    fn test_drag_moves_and_releases_capture() {
        let bus = EventBus::new();
        let mut w = window_at(&bus, 100.0, 50.0);

        w.begin_move(1, Vec2::new(200.0, 60.0));
        assert_eq!(w.surface().captured, vec![1]);
        assert!(w.pointer_move(1, Vec2::new(230.0, 80.0)));
        assert!(w.pointer_move(1, Vec2::new(240.0, 80.0)));
        assert_eq!(w.geometry().bounds().position(), Vec2::new(140.0, 70.0));

        assert!(w.pointer_up(1));
        assert!(w.surface().captured.is_empty());
        assert!(!w.is_interacting());
        assert!(!w.pointer_move(1, Vec2::new(500.0, 500.0)));
        assert_eq!(w.geometry().bounds().position(), Vec2::new(140.0, 70.0));
    }

    #[test]
    fn test_drag_while_maximized_is_absorbed() {
        let bus = EventBus::new();
        let mut w = window_at(&bus, 100.0, 50.0);
        w.toggle_maximized();

        w.begin_move(1, Vec2::ZERO);
        assert!(!w.pointer_move(1, Vec2::new(40.0, 40.0)));
        assert_eq!(w.geometry().layout(), LayoutBox::MAXIMIZED);
        assert!(w.pointer_up(1));
    }

    #[test]
    fn test_cancel_interaction_returns_to_idle() {
        let bus = EventBus::new();
        let mut w = window_at(&bus, 100.0, 50.0);
        w.begin_resize(4, ResizeEdges::RIGHT, Vec2::ZERO);
        assert!(w.cancel_interaction());
        assert!(!w.is_interacting());
        assert!(w.surface().captured.is_empty());
        assert!(!w.cancel_interaction());
    }

    #[test]
    fn test_set_stacking_writes_surface() {
        let bus = EventBus::new();
        let mut w = window_at(&bus, 0.0, 0.0);
        assert_eq!(w.stacking(), None);
        w.set_stacking(4);
        assert_eq!(w.stacking(), Some(4));
        assert_eq!(w.surface().stacking, Some(4));
    }
}
