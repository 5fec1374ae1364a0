//! Tween Bridge Demo
//!
//! Drives a values tween and a path tween through the bridge against an
//! in-memory sink, logging every lifecycle step:
//! - enable/disable toggles with de-duplication
//! - keyframe and basic animation emission
//! - active/at-rest state transitions on completion and cancellation
//!
//! Run with: cargo run -p motive_motion --example tween_demo

use std::sync::Arc;
use std::time::Duration;

use motive_core::ReactiveValue;
use motive_motion::{
    Point, RecordingSink, SampledPath, TimingFunction, Tween, TweenAnimationBridge,
};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let sink = Arc::new(RecordingSink::new());
    let bridge = TweenAnimationBridge::new(Arc::clone(&sink));

    // A fade: two keyframes over 300ms, enabled from the start.
    let fade = Tween::to_values(vec![0.0f64, 1.0])
        .timing(vec![TimingFunction::Linear])
        .duration(Duration::from_millis(300));

    let _state_sub = fade
        .state
        .subscribe(|state| tracing::info!(?state, "fade state"));

    let sub = bridge
        .stream(&fade)
        .subscribe(|value| tracing::info!(value, "fade target"));

    // The sink decides when animations finish; here we finish them by hand.
    sink.complete_all();

    // Toggling re-emits; disabling cancels whatever is still in flight.
    fade.enabled.set(false);
    fade.enabled.set(true);
    fade.enabled.set(false);
    sub.unsubscribe();

    // A path tween over a point sink.
    let point_sink = Arc::new(RecordingSink::new());
    let point_bridge = TweenAnimationBridge::new(Arc::clone(&point_sink));

    let source = ReactiveValue::with(SampledPath::new(vec![
        Point::new(0.0, 0.0),
        Point::new(40.0, 12.0),
        Point::new(80.0, 0.0),
    ]));
    let arc = Tween::along_path(source.clone()).duration(Duration::from_millis(500));

    let _sub = point_bridge
        .stream(&arc)
        .subscribe(|point: Point| tracing::info!(x = point.x, y = point.y, "path target"));

    // A new path while the first is in flight spawns a coexisting animation.
    source.set(SampledPath::new(vec![
        Point::new(80.0, 0.0),
        Point::new(120.0, -8.0),
    ]));
    tracing::info!(pending = point_sink.pending_count(), "path animations in flight");
    point_sink.complete_all();
}
