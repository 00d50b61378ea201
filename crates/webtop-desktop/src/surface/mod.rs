//! Rendering surface seam
//!
//! The core never touches a DOM directly. Each window owns a
//! [`WindowSurface`]: the host-side handle for its visible pane, its status
//! bar controls, its hosted content and its taskbar entry. The browser
//! binding implements it over `web_sys` elements; [`HeadlessSurface`] records
//! the same calls for headless hosts and tests.

mod headless;

pub use headless::HeadlessSurface;

use std::fmt;

use crate::events::InteractionHook;
use crate::math::LayoutBox;
use crate::types::PointerId;
use crate::window::ContentRef;

/// Host-side handle for one window
pub trait WindowSurface {
    /// Opaque insertion target (desktop region or taskbar region)
    type Container: Clone + PartialEq + fmt::Debug;

    /// Insert the window pane into `parent`
    fn mount(&mut self, parent: &Self::Container);

    /// Remove the window pane from wherever it is inserted
    fn unmount(&mut self);

    /// Insert the taskbar entry into `taskbar`
    fn mount_taskbar_entry(&mut self, taskbar: &Self::Container);

    /// Remove the taskbar entry
    fn unmount_taskbar_entry(&mut self);

    /// Show or hide the window pane
    fn set_visible(&mut self, visible: bool);

    /// Reflect the minimized state on the taskbar entry
    fn set_taskbar_minimized(&mut self, minimized: bool);

    /// Set the label of the maximize control
    fn set_maximize_label(&mut self, label: &str);

    /// Position and size the pane
    fn apply_layout(&mut self, layout: &LayoutBox);

    /// Set the stacking value (z-index)
    fn set_stacking(&mut self, z: u32);

    /// Route all further events of `pointer` to this window
    fn capture_pointer(&mut self, pointer: PointerId);

    /// Undo [`WindowSurface::capture_pointer`]
    fn release_pointer(&mut self, pointer: PointerId);

    /// Load the hosted content and report interaction inside it to `hook`
    fn watch_content(&mut self, content: &ContentRef, hook: InteractionHook);
}
