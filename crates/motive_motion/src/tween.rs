//! Declarative tween descriptions
//!
//! A [`Tween<T>`] describes *what* to animate — a value sequence or a motion
//! path, plus timing metadata — without running anything. The
//! [`TweenAnimationBridge`] turns it into imperative animations when a
//! subscriber shows up and `enabled` holds true.
//!
//! [`TweenAnimationBridge`]: crate::bridge::TweenAnimationBridge

use std::time::Duration;

use motive_core::ReactiveValue;

use crate::path::{SampledPath, TweenableValue};
use crate::sink::TimelineHandle;
use crate::timing::TimingFunction;

/// Whether a tween currently drives any in-flight animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TweenState {
    /// No animation spawned by the current enabled-session is in flight.
    #[default]
    AtRest,
    /// At least one spawned animation has not yet completed.
    Active,
}

/// The value source of a tween.
#[derive(Clone)]
pub enum TweenMode<T> {
    /// An ordered value sequence, at least one entry.
    Values(Vec<T>),
    /// A reactive source of sampled motion paths.
    Path(ReactiveValue<SampledPath>),
}

/// A declarative description of a value-producing animation.
///
/// The reactive fields (`duration`, `enabled`, `state`) are shared handles:
/// cloning a tween clones the description but keeps pointing at the same
/// slots, so every session of a bridged stream observes the same toggles.
///
/// Construction preconditions (the producer's responsibility, not checked
/// here): a `Values` sequence is non-empty, `key_positions` when present is
/// monotonically non-decreasing with the same length as the values, and
/// `timing_functions` is non-empty.
#[derive(Clone)]
pub struct Tween<T> {
    pub mode: TweenMode<T>,
    /// Normalized key times in [0, 1] for a `Values` sequence.
    pub key_positions: Option<Vec<f32>>,
    pub timing_functions: Vec<TimingFunction>,
    /// Materialized animation duration. Emission is dropped while absent.
    pub duration: ReactiveValue<Duration>,
    /// Offset applied as the animation's start time.
    pub delay: Duration,
    /// External clock to attach animations to, instead of the wall clock.
    pub timeline: Option<TimelineHandle>,
    /// Toggling drives emission (true) and cancellation (false).
    pub enabled: ReactiveValue<bool>,
    /// Written by the bridge: whether any spawned animation is in flight.
    pub state: ReactiveValue<TweenState>,
}

impl<T: TweenableValue> Tween<T> {
    fn with_mode(mode: TweenMode<T>) -> Self {
        Self {
            mode,
            key_positions: None,
            timing_functions: vec![TimingFunction::default()],
            duration: ReactiveValue::new(),
            delay: Duration::ZERO,
            timeline: None,
            enabled: ReactiveValue::with(true),
            state: ReactiveValue::with(TweenState::AtRest),
        }
    }

    /// A tween animating through `values` in order.
    pub fn to_values(values: Vec<T>) -> Self {
        debug_assert!(!values.is_empty(), "a values tween requires at least one value");
        Self::with_mode(TweenMode::Values(values))
    }

    /// A tween following sampled paths from `source`.
    pub fn along_path(source: ReactiveValue<SampledPath>) -> Self {
        Self::with_mode(TweenMode::Path(source))
    }

    /// Set normalized key times for the value sequence.
    pub fn key_positions(mut self, positions: Vec<f32>) -> Self {
        self.key_positions = Some(positions);
        self
    }

    /// Replace the timing curves.
    pub fn timing(mut self, timing_functions: Vec<TimingFunction>) -> Self {
        self.timing_functions = timing_functions;
        self
    }

    /// Materialize the duration immediately.
    pub fn duration(self, duration: Duration) -> Self {
        self.duration.set(duration);
        self
    }

    /// Set the start-time offset.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Attach spawned animations to an external timeline.
    pub fn timeline(mut self, timeline: TimelineHandle) -> Self {
        self.timeline = Some(timeline);
        self
    }

    /// Set the initial enabled value.
    pub fn enabled(self, enabled: bool) -> Self {
        self.enabled.set(enabled);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let tween = Tween::to_values(vec![1.0f64]);
        assert_eq!(tween.timing_functions, vec![TimingFunction::EaseInOut]);
        assert_eq!(tween.duration.get(), None);
        assert_eq!(tween.delay, Duration::ZERO);
        assert_eq!(tween.enabled.get(), Some(true));
        assert_eq!(tween.state.get(), Some(TweenState::AtRest));
    }

    #[test]
    fn test_builder_overrides() {
        let tween = Tween::to_values(vec![0.0f64, 1.0])
            .key_positions(vec![0.0, 1.0])
            .timing(vec![TimingFunction::Linear])
            .duration(Duration::from_millis(300))
            .delay(Duration::from_millis(50))
            .timeline(TimelineHandle(9))
            .enabled(false);

        assert_eq!(tween.key_positions, Some(vec![0.0, 1.0]));
        assert_eq!(tween.timing_functions, vec![TimingFunction::Linear]);
        assert_eq!(tween.duration.get(), Some(Duration::from_millis(300)));
        assert_eq!(tween.delay, Duration::from_millis(50));
        assert_eq!(tween.timeline, Some(TimelineHandle(9)));
        assert_eq!(tween.enabled.get(), Some(false));
    }

    #[test]
    fn test_clones_share_reactive_slots() {
        let tween = Tween::to_values(vec![1.0f64]);
        let clone = tween.clone();

        tween.enabled.set(false);
        assert_eq!(clone.enabled.get(), Some(false));

        clone.state.set(TweenState::Active);
        assert_eq!(tween.state.get(), Some(TweenState::Active));
    }
}
