//! Motive Motion Toolkit
//!
//! Declarative tweens bridged onto an imperative animation runtime.
//!
//! # Features
//!
//! - **Tween**: declarative description of a value sequence or motion path
//!   to animate, with timing metadata and reactive enable/disable
//! - **TweenAnimationBridge**: converts a tween into one-shot property
//!   animations, tracks their lifecycle, and republishes an active/at-rest
//!   state into the reactive graph
//! - **AnimationDescriptor**: tagged keyframe/basic variants handed to the
//!   animation runtime
//! - **AnimationSink**: the compositor-side runtime boundary, with an
//!   in-memory [`RecordingSink`] for tests and demos
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use motive_motion::{RecordingSink, Tween, TweenAnimationBridge, TweenState};
//!
//! let sink = Arc::new(RecordingSink::new());
//! let bridge = TweenAnimationBridge::new(Arc::clone(&sink));
//!
//! let tween = Tween::to_values(vec![0.0f64, 1.0]).duration(Duration::from_millis(300));
//! let _sub = bridge.stream(&tween).subscribe(|value| {
//!     // The terminal value arrives synchronously at enable time.
//!     assert_eq!(value, 1.0);
//! });
//!
//! assert_eq!(tween.state.get(), Some(TweenState::Active));
//! sink.complete_all();
//! assert_eq!(tween.state.get(), Some(TweenState::AtRest));
//! ```

pub mod bridge;
pub mod descriptor;
pub mod error;
pub mod path;
pub mod sink;
pub mod timing;
pub mod tween;

pub use bridge::TweenAnimationBridge;
pub use descriptor::{AnimationDescriptor, PropertyAnimation};
pub use error::UnsupportedTypeError;
pub use path::{Point, SampledPath, TweenableValue};
pub use sink::{
    AddedAnimation, AnimationKey, AnimationSink, CompletionHandler, RecordingSink, TimelineHandle,
};
pub use timing::TimingFunction;
pub use tween::{Tween, TweenMode, TweenState};
