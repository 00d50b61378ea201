//! Window regions for pointer hit targets

use std::str::FromStr;

use crate::error::DesktopError;
use crate::geometry::ResizeEdges;

/// One of the eight resize border regions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl ResizeHandle {
    /// All handles, edges first
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::N,
        ResizeHandle::S,
        ResizeHandle::E,
        ResizeHandle::W,
        ResizeHandle::NE,
        ResizeHandle::NW,
        ResizeHandle::SE,
        ResizeHandle::SW,
    ];

    /// Edges moved by this handle; corners are the union of two edges
    pub fn edges(self) -> ResizeEdges {
        match self {
            ResizeHandle::N => ResizeEdges::TOP,
            ResizeHandle::S => ResizeEdges::BOTTOM,
            ResizeHandle::E => ResizeEdges::RIGHT,
            ResizeHandle::W => ResizeEdges::LEFT,
            ResizeHandle::NE => ResizeEdges::TOP | ResizeEdges::RIGHT,
            ResizeHandle::NW => ResizeEdges::TOP | ResizeEdges::LEFT,
            ResizeHandle::SE => ResizeEdges::BOTTOM | ResizeEdges::RIGHT,
            ResizeHandle::SW => ResizeEdges::BOTTOM | ResizeEdges::LEFT,
        }
    }

    /// Direction string used on DOM handles (`"n"`, `"ne"`, ...)
    pub fn as_str(self) -> &'static str {
        match self {
            ResizeHandle::N => "n",
            ResizeHandle::S => "s",
            ResizeHandle::E => "e",
            ResizeHandle::W => "w",
            ResizeHandle::NE => "ne",
            ResizeHandle::NW => "nw",
            ResizeHandle::SE => "se",
            ResizeHandle::SW => "sw",
        }
    }
}

impl FromStr for ResizeHandle {
    type Err = DesktopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "n" => Ok(ResizeHandle::N),
            "s" => Ok(ResizeHandle::S),
            "e" => Ok(ResizeHandle::E),
            "w" => Ok(ResizeHandle::W),
            "ne" => Ok(ResizeHandle::NE),
            "nw" => Ok(ResizeHandle::NW),
            "se" => Ok(ResizeHandle::SE),
            "sw" => Ok(ResizeHandle::SW),
            _ => Err(DesktopError::InvalidResizeHandle(s.to_string())),
        }
    }
}

/// What a pointer-down landed on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowRegion {
    /// Window body or hosted content
    Content,
    /// Status bar drag handle
    TitleBar,
    MinimizeButton,
    MaximizeButton,
    CloseButton,
    /// One of the eight resize borders
    Resize(ResizeHandle),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_parse_round_trip() {
        for handle in ResizeHandle::ALL {
            assert_eq!(handle.as_str().parse::<ResizeHandle>().unwrap(), handle);
        }
    }

    #[test]
    fn test_handle_parse_rejects_unknown() {
        assert_eq!(
            "north".parse::<ResizeHandle>(),
            Err(DesktopError::InvalidResizeHandle("north".to_string()))
        );
    }

    #[test]
    fn test_corners_are_edge_unions() {
        assert_eq!(
            ResizeHandle::NW.edges(),
            ResizeHandle::N.edges() | ResizeHandle::W.edges()
        );
        assert_eq!(
            ResizeHandle::SE.edges(),
            ResizeHandle::S.edges() | ResizeHandle::E.edges()
        );
        let union = ResizeHandle::ALL
            .iter()
            .fold(ResizeEdges::empty(), |acc, h| acc | h.edges());
        assert_eq!(union, ResizeEdges::all());
    }
}
