//! Error types for the desktop window manager
//!
//! Most precondition failures (unknown window, duplicate registration, a
//! drag step on a maximized window) are absorbed as silent no-ops and never
//! reach this type. What remains are programming defects that must surface
//! immediately: unparsable geometry values, bad configuration and DOM
//! failures in the browser binding.

use crate::types::WindowId;

/// Errors that can occur in desktop operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// Window with the given ID was not found
    WindowNotFound(WindowId),

    /// A width/height/position value could not be read as a number
    InvalidGeometryValue {
        /// Which value was being read (`"left"`, `"width"`, ...)
        field: &'static str,
        /// The raw text that failed to parse
        value: String,
    },

    /// A resize direction string did not name one of the eight handles
    InvalidResizeHandle(String),

    /// Configuration failed validation
    InvalidConfig(String),

    /// JSON serialization or deserialization failed
    SerializationError(String),

    /// A DOM operation failed in the browser binding
    DomError(String),
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WindowNotFound(id) => write!(f, "window not found: {}", id),
            Self::InvalidGeometryValue { field, value } => {
                write!(f, "invalid geometry value for {}: {:?}", field, value)
            }
            Self::InvalidResizeHandle(dir) => write!(f, "invalid resize handle: {:?}", dir),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
            Self::DomError(msg) => write!(f, "dom error: {}", msg),
        }
    }
}

impl std::error::Error for DesktopError {}

impl From<serde_json::Error> for DesktopError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Result type alias for desktop operations
pub type DesktopResult<T> = Result<T, DesktopError>;
