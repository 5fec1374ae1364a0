//! Animation descriptors
//!
//! The tagged variants a bridge hands to an [`AnimationSink`]: either a
//! keyframe sequence or a single-segment animation toward one target value.
//! Descriptors carry no clocking of their own; the materialized duration and
//! delay travel alongside in [`PropertyAnimation`].
//!
//! [`AnimationSink`]: crate::sink::AnimationSink

use std::time::Duration;

use crate::timing::TimingFunction;

/// What an animation interpolates.
#[derive(Clone, Debug, PartialEq)]
pub enum AnimationDescriptor<T> {
    /// Interpolate through an ordered value sequence.
    Keyframe {
        /// Values in playback order (at least two).
        values: Vec<T>,
        /// Normalized key times in [0, 1], same length as `values`.
        /// The sink distributes keyframes uniformly when absent.
        key_times: Option<Vec<f32>>,
        /// Per-segment timing curves.
        timing_functions: Vec<TimingFunction>,
    },
    /// Interpolate from the property's current value to one target.
    Basic {
        to_value: T,
        timing_function: TimingFunction,
    },
}

impl<T: Clone> AnimationDescriptor<T> {
    /// The value the animation lands on.
    pub fn terminal_value(&self) -> T {
        match self {
            AnimationDescriptor::Keyframe { values, .. } => values
                .last()
                .expect("keyframe descriptor requires at least one value")
                .clone(),
            AnimationDescriptor::Basic { to_value, .. } => to_value.clone(),
        }
    }
}

/// One complete animation unit: a descriptor plus materialized clocking.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyAnimation<T> {
    pub descriptor: AnimationDescriptor<T>,
    pub duration: Duration,
    /// Offset applied as the animation's start time.
    pub delay: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyframe_terminal_value() {
        let descriptor = AnimationDescriptor::Keyframe {
            values: vec![0.0f64, 0.5, 1.0],
            key_times: None,
            timing_functions: vec![TimingFunction::Linear],
        };
        assert_eq!(descriptor.terminal_value(), 1.0);
    }

    #[test]
    fn test_basic_terminal_value() {
        let descriptor = AnimationDescriptor::Basic {
            to_value: 3.0f64,
            timing_function: TimingFunction::EaseOut,
        };
        assert_eq!(descriptor.terminal_value(), 3.0);
    }
}
