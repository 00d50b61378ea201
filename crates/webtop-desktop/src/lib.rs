//! In-page desktop window manager
//!
//! This crate provides the core of a desktop environment emulated inside
//! a web page:
//! - Window lifecycle (create, attach, detach, minimize, maximize)
//! - Window stack with z-order and focus
//! - Move/resize geometry with a maximize/restore transformation
//! - Pointer drag state machine shared by move and resize gestures
//! - Event protocol decoupling windows from the manager
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                     DesktopEngine                      │
//! │  ┌──────────┐  ┌──────────┐  ┌──────────────────────┐  │
//! │  │ Viewport │  │ EventBus │─▶│    WindowManager     │  │
//! │  │  (size)  │  │  (FIFO)  │  │ (stack, z-order)     │  │
//! │  └──────────┘  └────▲─────┘  └──────────┬───────────┘  │
//! │                     │ emit              │ owns         │
//! │               ┌─────┴───────────────────▼────────┐     │
//! │               │ Window: Geometry + Interaction   │     │
//! │               │         Controller + Surface     │     │
//! │               └──────────────────────────────────┘     │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! - [`math`]: Value types (`Vec2`, `Size`, `Rect`, `Length`)
//! - [`geometry`]: Move/resize/maximize rules
//! - [`input`]: Interaction controller (Idle / Tracking)
//! - [`window`]: Window lifecycle and the window manager
//! - [`events`]: Created / FocusRequested / CloseRequested
//! - [`surface`]: Seam to the rendering host
//!
//! ## Example
//!
//! ```rust
//! use webtop_desktop::{DesktopConfig, DesktopEngine, HeadlessSurface, WindowRegion};
//!
//! let mut engine: DesktopEngine<HeadlessSurface> =
//!     DesktopEngine::new(DesktopConfig::default(), "desktop".into(), "taskbar".into());
//! engine.init(1920.0, 1080.0);
//!
//! let a = engine.open("/posts/hello", "Hello", HeadlessSurface::new());
//! let b = engine.open("/posts/world", "World", HeadlessSurface::new());
//! assert_eq!(engine.windows().topmost(), Some(b));
//!
//! engine.handle_pointer_down(a, WindowRegion::Content, 1, 600.0, 400.0);
//! assert_eq!(engine.windows().ids(), vec![b, a]);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Single Writer**: Only the window manager reorders windows or assigns stacking values
//! 3. **Injected Host**: Containers and surfaces are passed in, never looked up globally

pub mod events;
pub mod geometry;
pub mod input;
pub mod math;
pub mod surface;
pub mod window;

mod config;
mod engine;
mod error;
mod types;
mod viewport;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use events::{EventBus, InteractionHook, WindowEvent};
pub use geometry::{Geometry, ResizeEdges};
pub use input::{DragKind, DragState, Gesture, InputResult, InteractionController};
pub use math::{LayoutBox, Length, Rect, Size, Vec2};
pub use surface::{HeadlessSurface, WindowSurface};
pub use window::{
    ContentRef, ResizeHandle, Window, WindowConfig, WindowDefaults, WindowManager, WindowRegion,
};

pub use config::{DesktopConfig, MAX_STACKING_BASE};
pub use engine::{DesktopEngine, WindowSnapshot};
pub use error::{DesktopError, DesktopResult};
pub use types::{PointerId, WindowId};
pub use viewport::Viewport;
