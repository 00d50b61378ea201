//! Pointer interaction state machine
//!
//! Each window owns one [`InteractionController`]. It has two states:
//!
//! - **Idle**: no gesture in progress
//! - **Tracking**: a move or resize session started by a pointer-down on
//!   the title bar or a resize border
//!
//! While tracking, every pointer-move produces an incremental delta
//! measured from the previous move (not from the initial pointer-down),
//! so deltas compose additively across steps. Pointer-up, cancel and lost
//! capture all return the controller to Idle.

use crate::geometry::ResizeEdges;
use crate::math::Vec2;
use crate::types::PointerId;

/// Result of routing an input event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    /// Event was consumed by the desktop
    Handled,
    /// Event did not target anything the desktop manages
    Unhandled,
}

impl InputResult {
    /// Whether the event was consumed
    pub fn is_handled(self) -> bool {
        matches!(self, InputResult::Handled)
    }
}

/// Kind of gesture being tracked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragKind {
    /// Dragging the title bar
    Move,
    /// Dragging a resize border with the given edges
    Resize(ResizeEdges),
}

/// An in-progress pointer session
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    /// Pointer that owns the session (captured)
    pub pointer: PointerId,
    /// What the drag does
    pub kind: DragKind,
    /// Pointer position at the previous step
    pub last: Vec2,
}

/// One incremental step to apply to the window geometry
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// Translate by the delta
    Move { dx: f32, dy: f32 },
    /// Resize the given edges by the delta
    Resize { edges: ResizeEdges, dx: f32, dy: f32 },
}

/// Per-window drag/resize state machine
#[derive(Clone, Debug, Default)]
pub struct InteractionController {
    state: Option<DragState>,
}

impl InteractionController {
    /// Create an idle controller
    pub fn new() -> Self {
        Self { state: None }
    }

    /// Whether a session is in progress
    pub fn is_tracking(&self) -> bool {
        self.state.is_some()
    }

    /// Current session, if any
    pub fn drag_state(&self) -> Option<&DragState> {
        self.state.as_ref()
    }

    /// Pointer owning the current session
    pub fn pointer(&self) -> Option<PointerId> {
        self.state.map(|s| s.pointer)
    }

    /// Start a session
    ///
    /// Returns the pointer of a session that was still open, so the
    /// caller can release its capture before capturing the new one.
    pub fn begin(&mut self, pointer: PointerId, kind: DragKind, at: Vec2) -> Option<PointerId> {
        let previous = self.state.take().map(|s| s.pointer);
        self.state = Some(DragState {
            pointer,
            kind,
            last: at,
        });
        previous
    }

    /// Feed a pointer position; returns the step to apply
    ///
    /// Positions from a pointer other than the session's are ignored.
    pub fn track(&mut self, pointer: PointerId, at: Vec2) -> Option<Gesture> {
        let state = self.state.as_mut().filter(|s| s.pointer == pointer)?;
        let delta = at - state.last;
        state.last = at;

        Some(match state.kind {
            DragKind::Move => Gesture::Move {
                dx: delta.x,
                dy: delta.y,
            },
            DragKind::Resize(edges) => Gesture::Resize {
                edges,
                dx: delta.x,
                dy: delta.y,
            },
        })
    }

    /// End the session owned by `pointer`
    ///
    /// Returns `true` if a session was ended.
    pub fn end(&mut self, pointer: PointerId) -> bool {
        if self.pointer() == Some(pointer) {
            self.state = None;
            true
        } else {
            false
        }
    }

    /// Drop any session regardless of pointer; returns the pointer it held
    pub fn cancel(&mut self) -> Option<PointerId> {
        self.state.take().map(|s| s.pointer)
    }
}
