//! Core geometry value types for the desktop
//!
//! Plain 2D values used for window positions, sizes and pointer
//! coordinates, plus [`Length`] for CSS-style layout values.

mod length;
mod rect;
mod size;
mod vec2;

pub use length::{LayoutBox, Length};
pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;
