//! Window geometry model
//!
//! Position and size of a window, with move/resize semantics and the
//! maximize/restore transformation.
//!
//! ## Resize rules
//!
//! Each active edge applies its own rule and edges compose independently,
//! so a corner handle is just the union of its two edges:
//!
//! | Edge   | Effect                          |
//! |--------|---------------------------------|
//! | top    | `y += dy`, `height -= dy`       |
//! | left   | `x += dx`, `width -= dx`        |
//! | right  | `width += dx`                   |
//! | bottom | `height += dy`                  |
//!
//! Width and height never shrink below the minimum size. When a top or
//! left edge hits the minimum, the positional delta is limited by the same
//! amount so the opposite edge stays where it was.

use bitflags::bitflags;

use crate::math::{LayoutBox, Rect, Size, Vec2};

bitflags! {
    /// Set of window edges taking part in a resize
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ResizeEdges: u8 {
        const TOP = 0b0001;
        const BOTTOM = 0b0010;
        const LEFT = 0b0100;
        const RIGHT = 0b1000;
    }
}

/// Position and size of one window
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    /// Geometry while not maximized
    bounds: Rect,
    /// Default centered geometry, the origin of the cascade
    home: Rect,
    /// Geometry recorded by the most recent maximize
    restore: Option<Rect>,
    maximized: bool,
    min_size: Size,
}

impl Geometry {
    /// Create a geometry at `bounds`, falling back to `home` on restore
    pub fn new(bounds: Rect, home: Rect, min_size: Size) -> Self {
        Self {
            bounds,
            home,
            restore: None,
            maximized: false,
            min_size,
        }
    }

    /// Whether the window currently fills the viewport
    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    /// Geometry used while not maximized
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Default centered geometry
    pub fn home(&self) -> Rect {
        self.home
    }

    /// Geometry remembered by the last maximize, if any
    pub fn restore_bounds(&self) -> Option<Rect> {
        self.restore
    }

    /// Minimum size enforced by resize
    pub fn min_size(&self) -> Size {
        self.min_size
    }

    /// Current layout values; the full-viewport sentinel while maximized
    pub fn layout(&self) -> LayoutBox {
        if self.maximized {
            LayoutBox::MAXIMIZED
        } else {
            LayoutBox::from_rect(self.bounds)
        }
    }

    /// Current geometry in pixels inside a viewport
    pub fn resolve(&self, viewport: Size) -> Rect {
        self.layout().resolve(viewport)
    }

    /// Place the top-left corner directly (cascade placement)
    pub(crate) fn set_position(&mut self, pos: Vec2) {
        self.bounds = self.bounds.with_position(pos);
    }

    /// Translate by the given deltas
    ///
    /// Returns `false` and leaves the geometry untouched while maximized.
    /// Otherwise always succeeds; there is no clamping to the viewport.
    pub fn move_by(&mut self, dx: f32, dy: f32) -> bool {
        if self.maximized {
            return false;
        }
        self.bounds = self.bounds.translate(Vec2::new(dx, dy));
        true
    }

    /// Apply directional deltas for the active edges
    ///
    /// Returns `false` and leaves the geometry untouched while maximized.
    pub fn resize(&mut self, edges: ResizeEdges, dx: f32, dy: f32) -> bool {
        if self.maximized {
            return false;
        }

        let Rect {
            mut x,
            mut y,
            mut width,
            mut height,
        } = self.bounds;
        let min = self.min_size;

        // A window already below the minimum may grow but never shrink
        let floor_width = min.width.min(width);
        let floor_height = min.height.min(height);

        if edges.contains(ResizeEdges::LEFT) {
            // Never let the left edge cross past the minimum width
            let dx = dx.min(width - floor_width);
            x += dx;
            width -= dx;
        }
        if edges.contains(ResizeEdges::RIGHT) {
            width = (width + dx).max(floor_width);
        }
        if edges.contains(ResizeEdges::TOP) {
            let dy = dy.min(height - floor_height);
            y += dy;
            height -= dy;
        }
        if edges.contains(ResizeEdges::BOTTOM) {
            height = (height + dy).max(floor_height);
        }

        self.bounds = Rect::new(x, y, width, height);
        true
    }

    /// Remember the current geometry and fill the viewport
    ///
    /// Calling this while already maximized keeps the first remembered
    /// geometry.
    pub fn to_maximized(&mut self) {
        if self.maximized {
            return;
        }
        self.restore = Some(self.bounds);
        self.maximized = true;
    }

    /// Leave the maximized state
    ///
    /// Returns to the geometry remembered by the most recent maximize.
    /// Does nothing while not maximized.
    pub fn to_restored(&mut self) {
        if !self.maximized {
            return;
        }
        self.bounds = self.restore.unwrap_or(self.home);
        self.maximized = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Length;

    fn geometry(x: f32, y: f32, w: f32, h: f32) -> Geometry {
        Geometry::new(
            Rect::new(x, y, w, h),
            Rect::new(510.0, 240.0, 900.0, 600.0),
            Size::new(100.0, 60.0),
        )
    }

    #[test]
    fn test_move_by_translates_without_clamping() {
        let mut g = geometry(100.0, 50.0, 900.0, 600.0);
        assert!(g.move_by(-300.0, -80.0));
        assert_eq!(g.bounds(), Rect::new(-200.0, -30.0, 900.0, 600.0));
        assert!(g.move_by(0.0, 0.0));
        assert_eq!(g.bounds(), Rect::new(-200.0, -30.0, 900.0, 600.0));
    }

    #[test]
    fn test_right_edge_grows_width_only() {
        let mut g = geometry(100.0, 50.0, 900.0, 600.0);
        assert!(g.resize(ResizeEdges::RIGHT, 50.0, 999.0));
        assert_eq!(g.bounds(), Rect::new(100.0, 50.0, 950.0, 600.0));
    }

    #[test]
    fn test_left_edge_moves_x_and_shrinks_width() {
        let mut g = geometry(100.0, 50.0, 900.0, 600.0);
        assert!(g.resize(ResizeEdges::LEFT, 50.0, 0.0));
        assert_eq!(g.bounds(), Rect::new(150.0, 50.0, 850.0, 600.0));
    }

    #[test]
    fn test_top_and_bottom_edges() {
        let mut g = geometry(100.0, 50.0, 900.0, 600.0);
        assert!(g.resize(ResizeEdges::TOP, 0.0, -20.0));
        assert_eq!(g.bounds(), Rect::new(100.0, 30.0, 900.0, 620.0));
        assert!(g.resize(ResizeEdges::BOTTOM, 0.0, 30.0));
        assert_eq!(g.bounds(), Rect::new(100.0, 30.0, 900.0, 650.0));
    }

    #[test]
    fn test_corner_is_union_of_edges() {
        let mut corner = geometry(100.0, 50.0, 900.0, 600.0);
        corner.resize(ResizeEdges::TOP | ResizeEdges::LEFT, -5.0, -5.0);

        let mut edges = geometry(100.0, 50.0, 900.0, 600.0);
        edges.resize(ResizeEdges::TOP, -5.0, -5.0);
        edges.resize(ResizeEdges::LEFT, -5.0, -5.0);

        assert_eq!(corner.bounds(), edges.bounds());
        assert_eq!(corner.bounds(), Rect::new(95.0, 45.0, 905.0, 605.0));
    }

    #[test]
    fn test_resize_clamps_to_minimum() {
        let mut g = geometry(100.0, 50.0, 300.0, 200.0);
        g.resize(ResizeEdges::RIGHT | ResizeEdges::BOTTOM, -1000.0, -1000.0);
        assert_eq!(g.bounds(), Rect::new(100.0, 50.0, 100.0, 60.0));
    }

    #[test]
    fn test_left_clamp_keeps_right_edge_fixed() {
        let mut g = geometry(100.0, 50.0, 300.0, 200.0);
        let right = g.bounds().right();
        let bottom = g.bounds().bottom();
        g.resize(ResizeEdges::LEFT | ResizeEdges::TOP, 1000.0, 1000.0);
        assert_eq!(g.bounds().size(), Size::new(100.0, 60.0));
        assert_eq!(g.bounds().right(), right);
        assert_eq!(g.bounds().bottom(), bottom);
    }

    #[test]
    fn test_move_and_resize_fail_while_maximized() {
        let mut g = geometry(100.0, 50.0, 900.0, 600.0);
        g.to_maximized();
        assert!(!g.move_by(10.0, 10.0));
        assert!(!g.resize(ResizeEdges::all(), 10.0, 10.0));
        assert_eq!(g.layout(), LayoutBox::MAXIMIZED);
        g.to_restored();
        assert_eq!(g.bounds(), Rect::new(100.0, 50.0, 900.0, 600.0));
    }

    #[test]
    fn test_maximize_sentinel_and_round_trip() {
        let mut g = geometry(100.0, 50.0, 900.0, 600.0);
        g.to_maximized();
        let layout = g.layout();
        assert_eq!(layout.left, Length::Px(0.0));
        assert_eq!(layout.top, Length::Px(0.0));
        assert_eq!(layout.width, Length::Percent(100.0));
        assert_eq!(layout.height, Length::Percent(100.0));
        assert_eq!(g.restore_bounds(), Some(Rect::new(100.0, 50.0, 900.0, 600.0)));

        g.to_restored();
        assert!(!g.is_maximized());
        assert_eq!(g.layout(), LayoutBox::from_rect(Rect::new(100.0, 50.0, 900.0, 600.0)));
    }

    #[test]
    fn test_double_maximize_keeps_first_restore() {
        let mut g = geometry(100.0, 50.0, 900.0, 600.0);
        g.to_maximized();
        g.to_maximized();
        g.to_restored();
        assert_eq!(g.bounds(), Rect::new(100.0, 50.0, 900.0, 600.0));
    }

    #[test]
    fn test_restore_while_not_maximized_is_noop() {
        let mut g = geometry(100.0, 50.0, 300.0, 200.0);
        g.to_restored();
        assert_eq!(g.bounds(), Rect::new(100.0, 50.0, 300.0, 200.0));

        // Moves after a maximize round trip are not undone
        g.to_maximized();
        g.to_restored();
        assert!(g.move_by(40.0, 0.0));
        g.to_restored();
        assert_eq!(g.bounds(), Rect::new(140.0, 50.0, 300.0, 200.0));
    }

    #[test]
    fn test_undersized_window_never_jumps() {
        let mut g = geometry(100.0, 50.0, 50.0, 30.0);
        assert!(g.resize(ResizeEdges::all(), 0.0, 0.0));
        assert_eq!(g.bounds(), Rect::new(100.0, 50.0, 50.0, 30.0));

        // Shrinking further is refused, growing works from the current size
        assert!(g.resize(ResizeEdges::TOP | ResizeEdges::LEFT, 10.0, 10.0));
        assert_eq!(g.bounds(), Rect::new(100.0, 50.0, 50.0, 30.0));
        assert!(g.resize(ResizeEdges::RIGHT | ResizeEdges::BOTTOM, 5.0, 5.0));
        assert_eq!(g.bounds(), Rect::new(100.0, 50.0, 55.0, 35.0));
    }

    #[test]
    fn test_resolve_while_maximized_fills_viewport() {
        let mut g = geometry(100.0, 50.0, 900.0, 600.0);
        g.to_maximized();
        assert_eq!(
            g.resolve(Size::new(1600.0, 900.0)),
            Rect::new(0.0, 0.0, 1600.0, 900.0)
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_edges() -> impl Strategy<Value = ResizeEdges> {
        (0u8..16).prop_map(ResizeEdges::from_bits_truncate)
    }

    proptest! {
        /// Maximize followed by restore returns exactly to the prior geometry
        #[test]
        fn maximize_restore_round_trip(
            x in -2000.0f32..2000.0,
            y in -2000.0f32..2000.0,
            w in 100.0f32..3000.0,
            h in 60.0f32..3000.0,
        ) {
            let rect = Rect::new(x, y, w, h);
            let mut g = Geometry::new(rect, Rect::default(), Size::new(100.0, 60.0));
            g.to_maximized();
            g.to_restored();
            prop_assert_eq!(g.bounds(), rect);
        }

        /// Nothing changes geometry while maximized
        #[test]
        fn maximized_rejects_move_and_resize(
            dx in -500.0f32..500.0,
            dy in -500.0f32..500.0,
            edges in arb_edges(),
        ) {
            let rect = Rect::new(100.0, 50.0, 900.0, 600.0);
            let mut g = Geometry::new(rect, rect, Size::new(100.0, 60.0));
            g.to_maximized();
            prop_assert!(!g.move_by(dx, dy));
            prop_assert!(!g.resize(edges, dx, dy));
            prop_assert_eq!(g.layout(), LayoutBox::MAXIMIZED);
            prop_assert_eq!(g.bounds(), rect);
        }

        /// Resize never produces a size below the minimum
        #[test]
        fn resize_respects_minimum(
            dx in -5000.0f32..5000.0,
            dy in -5000.0f32..5000.0,
            edges in arb_edges(),
        ) {
            let min = Size::new(100.0, 60.0);
            let start = Rect::new(0.0, 0.0, 400.0, 300.0);
            let mut g = Geometry::new(start, start, min);
            g.resize(edges, dx, dy);
            prop_assert!(g.bounds().width >= min.width);
            prop_assert!(g.bounds().height >= min.height);
        }
    }
}
