//! Layout position hints.
//!
//! Pins carry surface coordinates in radians. Renderers place nodes at those
//! coordinates multiplied by a display scale and keep them fixed there.

/// A 2D point in display units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x coordinate.
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y coordinate.
    pub fn y(self) -> f64 {
        self.y
    }

    /// Returns this point with both coordinates multiplied by `factor`.
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

/// Where a renderer should place a node.
///
/// A pinned hint asks the layout engine not to move the node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionHint {
    point: Point,
    pinned: bool,
}

impl PositionHint {
    /// Creates a pinned hint from surface coordinates scaled by `scale`.
    ///
    /// Latitude maps onto x and longitude onto y.
    pub fn from_surface(latitude: f64, longitude: f64, scale: f64) -> Self {
        Self {
            point: Point::new(latitude, longitude).scale(scale),
            pinned: true,
        }
    }

    /// Returns the target point.
    pub fn point(&self) -> Point {
        self.point
    }

    /// Returns whether the node should stay at [`Self::point`].
    pub fn is_pinned(&self) -> bool {
        self.pinned
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_scale() {
        let p = Point::new(1.5, -2.0).scale(300.0);
        assert_approx_eq!(f64, p.x(), 450.0);
        assert_approx_eq!(f64, p.y(), -600.0);
    }

    #[test]
    fn test_surface_hint_is_pinned_and_scaled() {
        let hint = PositionHint::from_surface(0.25, 1.0, 300.0);
        assert!(hint.is_pinned());
        assert_approx_eq!(f64, hint.point().x(), 75.0);
        assert_approx_eq!(f64, hint.point().y(), 300.0);
    }
}
