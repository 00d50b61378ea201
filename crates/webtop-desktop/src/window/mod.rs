//! Window management module
//!
//! Provides the window lifecycle, the window stack with its z-order and
//! the regions a pointer can hit on a window.

mod config;
mod manager;
mod region;
#[allow(clippy::module_inception)]
mod window;

pub use config::{ContentRef, WindowConfig, WindowDefaults};
pub use manager::WindowManager;
pub use region::{ResizeHandle, WindowRegion};
pub use window::{Window, MAXIMIZE_LABEL, RESTORE_LABEL};

pub use crate::types::WindowId;
