//! Timing-curve descriptors
//!
//! [`TimingFunction`] is pure data: the animation runtime that receives a
//! descriptor decides how to evaluate it. The cubic control points mirror
//! the standard compositor presets so a sink can hand them straight to a
//! platform timing curve.

/// Describes how an animation segment progresses over normalized time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimingFunction {
    /// Constant velocity.
    Linear,
    /// Starts slow, finishes fast.
    EaseIn,
    /// Starts fast, finishes slow.
    EaseOut,
    /// Slow at both ends.
    EaseInOut,
    /// Custom cubic bezier (x1, y1, x2, y2).
    Bezier(f32, f32, f32, f32),
}

impl TimingFunction {
    /// Control points of the equivalent cubic bezier, as (x1, y1, x2, y2).
    pub fn control_points(&self) -> [f32; 4] {
        match *self {
            TimingFunction::Linear => [0.0, 0.0, 1.0, 1.0],
            TimingFunction::EaseIn => [0.42, 0.0, 1.0, 1.0],
            TimingFunction::EaseOut => [0.0, 0.0, 0.58, 1.0],
            TimingFunction::EaseInOut => [0.42, 0.0, 0.58, 1.0],
            TimingFunction::Bezier(x1, y1, x2, y2) => [x1, y1, x2, y2],
        }
    }
}

impl Default for TimingFunction {
    fn default() -> Self {
        TimingFunction::EaseInOut
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_control_points() {
        assert_eq!(TimingFunction::Linear.control_points(), [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(
            TimingFunction::EaseInOut.control_points(),
            [0.42, 0.0, 0.58, 1.0]
        );
    }

    #[test]
    fn test_bezier_passes_points_through() {
        let curve = TimingFunction::Bezier(0.2, 0.1, 0.8, 0.9);
        assert_eq!(curve.control_points(), [0.2, 0.1, 0.8, 0.9]);
    }
}
