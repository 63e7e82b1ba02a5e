use glam::IVec2;

/// Pixels kept free between the shape and the shorter window edge.
pub const DRAW_MARGIN: i32 = 10;

/// Drawable area in physical pixels.
///
/// The draw center and draw radius are derived on demand, so updating the size
/// after a resize is all that is needed to re-center the shape.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Initial window canvas.
    pub const INITIAL: Viewport = Viewport::new(400, 400);

    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Screen-space origin the shape is centered on: `(w/2, h/2)` rounded down.
    #[inline]
    pub fn draw_center(self) -> IVec2 {
        IVec2::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Radius of the disc the shape is drawn into. May be zero or negative for
    /// windows smaller than the margin, in which case nothing is drawn.
    #[inline]
    pub fn draw_radius(self) -> i32 {
        (self.width.min(self.height) / 2) as i32 - DRAW_MARGIN
    }

    /// Number of pixels (`w * h`).
    #[inline]
    pub fn area(self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_viewport_center_and_radius() {
        let vp = Viewport::INITIAL;
        assert_eq!(vp.draw_center(), IVec2::new(200, 200));
        assert_eq!(vp.draw_radius(), 190);
    }

    #[test]
    fn odd_sizes_round_center_down() {
        let vp = Viewport::new(401, 257);
        assert_eq!(vp.draw_center(), IVec2::new(200, 128));
        assert_eq!(vp.draw_radius(), 128 - DRAW_MARGIN);
    }

    #[test]
    fn radius_uses_shorter_edge() {
        assert_eq!(Viewport::new(800, 100).draw_radius(), 40);
        assert_eq!(Viewport::new(100, 800).draw_radius(), 40);
    }

    #[test]
    fn tiny_window_has_non_positive_radius() {
        assert!(Viewport::new(12, 12).draw_radius() <= 0);
        assert!(Viewport::new(0, 0).is_empty());
    }
}
