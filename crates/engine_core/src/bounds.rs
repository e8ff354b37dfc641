//! Screen-space rectangles and interpolation along them.

use glam::Vec2;

/// Linear interpolation between `from` and `to`. `t` is not clamped.
#[inline]
pub fn lerp(t: f32, from: f32, to: f32) -> f32 {
    from + (to - from) * t
}

/// Axis-aligned screen rectangle, in pixels, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl ScreenRect {
    pub fn new(x: f32, y: f32, wide: f32, tall: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(wide, tall),
        }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn wide(&self) -> f32 {
        self.size.x
    }

    /// X coordinate at `fraction` of the way across the rectangle.
    ///
    /// Fractions outside `[0, 1]` extrapolate past the edges.
    pub fn x_at(&self, fraction: f32) -> f32 {
        lerp(fraction, self.origin.x, self.origin.x + self.size.x)
    }

    /// Left edge for a marker of `marker_wide` pixels centred on `fraction`.
    pub fn centered_marker_x(&self, fraction: f32, marker_wide: f32) -> f32 {
        self.x_at(fraction) - marker_wide / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(0.0, 100.0, 300.0), 100.0);
        assert_eq!(lerp(1.0, 100.0, 300.0), 300.0);
        assert_eq!(lerp(0.5, 100.0, 300.0), 200.0);
    }

    #[test]
    fn lerp_extrapolates_without_clamping() {
        assert_eq!(lerp(-1.0, 100.0, 300.0), -100.0);
        assert_eq!(lerp(1.5, 100.0, 300.0), 400.0);
    }

    #[test]
    fn centered_marker_subtracts_half_width() {
        let bar = ScreenRect::new(100.0, 40.0, 200.0, 8.0);
        assert_eq!(bar.centered_marker_x(0.5, 20.0), 190.0);
        assert_eq!(bar.centered_marker_x(0.0, 20.0), 90.0);
        assert_eq!(bar.centered_marker_x(1.0, 20.0), 290.0);
    }
}
