//! Window configuration for creation

use serde::{Deserialize, Serialize};

use crate::math::{LayoutBox, Rect, Size, Vec2};

/// Address and display title of the document hosted in a window
///
/// Immutable once the window exists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRef {
    /// URL loaded into the window
    pub address: String,
    /// Title shown in the status bar and taskbar entry
    pub title: String,
}

impl ContentRef {
    /// Create a content reference
    pub fn new(address: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            title: title.into(),
        }
    }
}

/// Configuration for creating a window
#[derive(Clone, Debug, Default)]
pub struct WindowConfig {
    /// Hosted document
    pub content: ContentRef,
    /// Initial position (None = cascade from the centered default)
    pub position: Option<Vec2>,
    /// Initial size (None = default size)
    pub size: Option<Size>,
}

impl WindowConfig {
    /// Configuration with default geometry
    pub fn new(address: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            content: ContentRef::new(address, title),
            ..Default::default()
        }
    }

    /// Place the window at `(x, y)` instead of cascading it
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = Some(Vec2::new(x, y));
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = Some(Size::new(width, height));
        self
    }

    /// Place and size the window from style values resolved in `viewport`
    pub fn with_layout(mut self, layout: &LayoutBox, viewport: Size) -> Self {
        let rect = layout.resolve(viewport);
        self.position = Some(rect.position());
        self.size = Some(rect.size());
        self
    }

    /// Whether the caller placed the window explicitly
    pub fn has_explicit_position(&self) -> bool {
        self.position.is_some()
    }
}

/// Geometry defaults resolved against the current viewport
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowDefaults {
    /// Default size centered in the viewport
    pub home: Rect,
    /// Minimum size enforced by resize
    pub min_size: Size,
}

impl WindowDefaults {
    /// Defaults for a viewport of `viewport` size
    pub fn centered(viewport: Size, size: Size, min_size: Size) -> Self {
        Self {
            home: Rect::centered_in(viewport, size),
            min_size,
        }
    }

    /// Initial geometry for a window created with `config`
    ///
    /// A requested size below the minimum is raised to the minimum.
    pub fn initial_bounds(&self, config: &WindowConfig) -> Rect {
        Rect::from_pos_size(
            config.position.unwrap_or_else(|| self.home.position()),
            config
                .size
                .unwrap_or_else(|| self.home.size())
                .at_least(self.min_size),
        )
    }
}
