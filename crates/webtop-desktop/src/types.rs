//! Core type definitions for the desktop
//!
//! This module centralizes type aliases used throughout the crate
//! for consistency and discoverability.

/// Unique window identifier
///
/// Windows are identified by a monotonically increasing 64-bit integer
/// allocated by the owning `DesktopEngine`. An id is never reused within
/// an engine, so a reopened window always gets a fresh one.
pub type WindowId = u64;

/// Pointer identifier as reported by `PointerEvent.pointerId`
///
/// Interaction sessions are keyed by pointer so that two pointers dragging
/// two different windows never interfere.
pub type PointerId = i32;
