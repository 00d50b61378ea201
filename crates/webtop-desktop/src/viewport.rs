//! Viewport size provider
//!
//! Simple state holder for the size of the desktop region. The host keeps
//! it current through `DesktopEngine::init` / `DesktopEngine::resize`;
//! the core consults it for centering and for resolving maximized layout.

use crate::math::Size;

/// Size of the region windows live in
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Region size in layout pixels
    pub size: Size,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            size: Size::new(1920.0, 1080.0),
        }
    }
}

impl Viewport {
    /// Create a viewport of the given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_and_new() {
        assert_eq!(Viewport::default().size, Size::new(1920.0, 1080.0));
        assert_eq!(Viewport::new(1000.0, 800.0).size, Size::new(1000.0, 800.0));
    }
}
