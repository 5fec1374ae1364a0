//! Sampled motion paths and value capability
//!
//! A [`SampledPath`] is an ordered point sequence some path source has
//! already flattened; the bridge never samples curves itself. The
//! [`TweenableValue`] trait carries the capability check that decides
//! whether a tween output type can be built from path points: an explicit,
//! typed replacement for pointer-cast narrowing.

use crate::error::UnsupportedTypeError;

/// A 2D point in the host coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An ordered sequence of points sampled along a motion path.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampledPath {
    pub points: Vec<Point>,
}

impl SampledPath {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// The point the path ends on, if the path is non-empty.
    pub fn terminal(&self) -> Option<Point> {
        self.points.last().copied()
    }
}

impl From<Vec<Point>> for SampledPath {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

/// A value a tween can animate.
///
/// `from_path_point` is the capability check for path-mode tweens: types
/// that can be built from a 2D sample point override it. The check is
/// type-level — if it succeeds for one point it succeeds for all — so the
/// bridge probes once per path emission.
pub trait TweenableValue: Clone + PartialEq + Send + Sync + 'static {
    /// Build a value from a path sample point. `None` means this type has
    /// no point capability and path mode is unsupported for it.
    fn from_path_point(_point: Point) -> Option<Self> {
        None
    }

    /// The capability failure for this type, for logging and assertions.
    fn unsupported() -> UnsupportedTypeError {
        UnsupportedTypeError {
            requested: std::any::type_name::<Self>(),
        }
    }
}

impl TweenableValue for f32 {}
impl TweenableValue for f64 {}

impl TweenableValue for Point {
    fn from_path_point(point: Point) -> Option<Self> {
        Some(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_point() {
        let path = SampledPath::new(vec![Point::new(0.0, 0.0), Point::new(4.0, 2.0)]);
        assert_eq!(path.terminal(), Some(Point::new(4.0, 2.0)));
        assert_eq!(SampledPath::default().terminal(), None);
    }

    #[test]
    fn test_point_has_path_capability() {
        let point = Point::new(1.0, 2.0);
        assert_eq!(Point::from_path_point(point), Some(point));
    }

    #[test]
    fn test_scalars_lack_path_capability() {
        assert_eq!(f64::from_path_point(Point::new(1.0, 2.0)), None);
        assert!(f64::unsupported().requested.contains("f64"));
    }
}
