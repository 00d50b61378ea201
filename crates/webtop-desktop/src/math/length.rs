//! Layout lengths: absolute pixels or a percentage of the viewport
//!
//! Window geometry is rendered as CSS-style values. A normal window is
//! always in pixels; a maximized window uses the `(0, 0, 100%, 100%)`
//! sentinel. Reading a value back never falls back to zero: anything that
//! is not a finite number is an [`DesktopError::InvalidGeometryValue`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Rect, Size};
use crate::error::{DesktopError, DesktopResult};

/// A single layout value
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "lowercase")]
pub enum Length {
    /// Absolute layout pixels
    Px(f32),
    /// Percentage of the containing viewport extent
    Percent(f32),
}

impl Length {
    /// 100% of the containing extent
    pub const FULL: Length = Length::Percent(100.0);

    /// Parse a value, naming the field in the error
    ///
    /// Accepts `"120"`, `"120px"`, `"-4.5px"` and `"100%"`.
    pub fn parse(field: &'static str, text: &str) -> DesktopResult<Self> {
        let invalid = || DesktopError::InvalidGeometryValue {
            field,
            value: text.to_string(),
        };

        let trimmed = text.trim();
        let (number, percent) = match trimmed.strip_suffix('%') {
            Some(n) => (n, true),
            None => (trimmed.strip_suffix("px").unwrap_or(trimmed), false),
        };

        let value: f32 = number.trim().parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }

        Ok(if percent {
            Length::Percent(value)
        } else {
            Length::Px(value)
        })
    }

    /// Resolve to layout pixels against the containing extent
    pub fn to_px(self, extent: f32) -> f32 {
        match self {
            Length::Px(px) => px,
            Length::Percent(pct) => extent * pct / 100.0,
        }
    }
}

impl FromStr for Length {
    type Err = DesktopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Length::parse("value", s)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(px) => write!(f, "{}px", px),
            Length::Percent(pct) => write!(f, "{}%", pct),
        }
    }
}

/// Position and size of a window as layout values
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutBox {
    pub left: Length,
    pub top: Length,
    pub width: Length,
    pub height: Length,
}

impl LayoutBox {
    /// Full-viewport sentinel used while a window is maximized
    pub const MAXIMIZED: LayoutBox = LayoutBox {
        left: Length::Px(0.0),
        top: Length::Px(0.0),
        width: Length::FULL,
        height: Length::FULL,
    };

    /// Pixel layout for a rectangle
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            left: Length::Px(rect.x),
            top: Length::Px(rect.y),
            width: Length::Px(rect.width),
            height: Length::Px(rect.height),
        }
    }

    /// Parse four style values (as read back from a host element)
    pub fn parse(left: &str, top: &str, width: &str, height: &str) -> DesktopResult<Self> {
        Ok(Self {
            left: Length::parse("left", left)?,
            top: Length::parse("top", top)?,
            width: Length::parse("width", width)?,
            height: Length::parse("height", height)?,
        })
    }

    /// Resolve to a pixel rectangle inside a viewport
    pub fn resolve(&self, viewport: Size) -> Rect {
        Rect::new(
            self.left.to_px(viewport.width),
            self.top.to_px(viewport.height),
            self.width.to_px(viewport.width),
            self.height.to_px(viewport.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pixels() {
        assert_eq!(Length::from_str("120").unwrap(), Length::Px(120.0));
        assert_eq!(Length::from_str("120px").unwrap(), Length::Px(120.0));
        assert_eq!(Length::from_str(" -4.5px ").unwrap(), Length::Px(-4.5));
    }

    #[test]
    fn test_parse_percent() {
        assert_eq!(Length::from_str("100%").unwrap(), Length::FULL);
        assert_eq!(Length::from_str("12.5%").unwrap(), Length::Percent(12.5));
    }

    #[test]
    fn test_parse_rejects_unset_values() {
        for text in ["", "px", "%", "auto", "NaN", "inf", "10em", "ten"] {
            let err = Length::parse("width", text).unwrap_err();
            assert_eq!(
                err,
                DesktopError::InvalidGeometryValue {
                    field: "width",
                    value: text.to_string(),
                },
                "{:?} should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_display_matches_css() {
        assert_eq!(Length::Px(510.0).to_string(), "510px");
        assert_eq!(Length::Px(-2.5).to_string(), "-2.5px");
        assert_eq!(Length::FULL.to_string(), "100%");
    }

    #[test]
    fn test_maximized_resolves_to_viewport() {
        let rect = LayoutBox::MAXIMIZED.resolve(Size::new(1280.0, 720.0));
        assert_eq!(rect, Rect::new(0.0, 0.0, 1280.0, 720.0));
    }

    #[test]
    fn test_layout_box_parse_names_field() {
        let err = LayoutBox::parse("10px", "20px", "", "600px").unwrap_err();
        assert!(matches!(
            err,
            DesktopError::InvalidGeometryValue { field: "width", .. }
        ));

        let layout = LayoutBox::parse("10px", "20px", "900px", "50%").unwrap();
        assert_eq!(
            layout.resolve(Size::new(1000.0, 1000.0)),
            Rect::new(10.0, 20.0, 900.0, 500.0)
        );
    }
}
