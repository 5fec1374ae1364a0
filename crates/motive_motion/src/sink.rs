//! The imperative animation runtime boundary
//!
//! An [`AnimationSink`] is the compositor-side collaborator that actually
//! renders animations over time. The bridge only registers and removes
//! one-shot animations; it never ticks them.
//!
//! Sink contract:
//! - `on_complete` fires at most once per key.
//! - `on_complete` never fires after a matching `remove(key)`.
//! - Callbacks are delivered on the same logical execution context that
//!   registered the animation.
//!
//! [`RecordingSink`] is an in-memory implementation of that contract for
//! tests and demos; completions are fired manually.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use rustc_hash::FxHashMap;

use crate::descriptor::PropertyAnimation;

/// Opaque key identifying one in-flight animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationKey(u64);

static NEXT_ANIMATION_KEY: AtomicU64 = AtomicU64::new(1);

impl AnimationKey {
    /// Generate a fresh, process-unique key.
    pub fn next() -> Self {
        Self(NEXT_ANIMATION_KEY.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw key value, for logging and FFI-style storage.
    pub fn to_raw(self) -> u64 {
        self.0
    }
}

/// Opaque reference to an external clock/timeline the sink can attach
/// animations to instead of the host's wall clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimelineHandle(pub u64);

/// Completion callback registered alongside an animation.
pub type CompletionHandler = Box<dyn FnOnce() + Send>;

/// The imperative animation runtime.
pub trait AnimationSink<T> {
    /// Register a one-shot animation under `key`. `on_complete` fires at
    /// most once, and never after `remove(key)`.
    fn add(
        &self,
        animation: PropertyAnimation<T>,
        key: AnimationKey,
        initial_velocity: Option<f64>,
        on_complete: CompletionHandler,
    );

    /// Cancel the animation registered under `key`. Its completion handler
    /// must not fire afterwards. Unknown keys are ignored.
    fn remove(&self, key: AnimationKey);

    /// Attach subsequently added animations to an external timeline.
    fn set_timeline(&self, timeline: TimelineHandle);
}

impl<T, S: AnimationSink<T> + ?Sized> AnimationSink<T> for Arc<S> {
    fn add(
        &self,
        animation: PropertyAnimation<T>,
        key: AnimationKey,
        initial_velocity: Option<f64>,
        on_complete: CompletionHandler,
    ) {
        (**self).add(animation, key, initial_velocity, on_complete);
    }

    fn remove(&self, key: AnimationKey) {
        (**self).remove(key);
    }

    fn set_timeline(&self, timeline: TimelineHandle) {
        (**self).set_timeline(timeline);
    }
}

/// One recorded `add()` call.
#[derive(Clone, Debug)]
pub struct AddedAnimation<T> {
    pub animation: PropertyAnimation<T>,
    pub key: AnimationKey,
    pub initial_velocity: Option<f64>,
}

struct RecordingSinkInner<T> {
    added: Vec<AddedAnimation<T>>,
    removed: Vec<AnimationKey>,
    pending: FxHashMap<AnimationKey, CompletionHandler>,
    timeline: Option<TimelineHandle>,
}

/// An in-memory [`AnimationSink`] that records every call and lets the
/// caller fire completions by hand. Honors the cancel-then-no-callback
/// contract: `remove()` drops the pending completion handler.
pub struct RecordingSink<T> {
    inner: Arc<Mutex<RecordingSinkInner<T>>>,
}

impl<T> Clone for RecordingSink<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> RecordingSink<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(RecordingSinkInner {
                added: Vec::new(),
                removed: Vec::new(),
                pending: FxHashMap::default(),
                timeline: None,
            })),
        }
    }

    /// Fire the completion handler for `key`, if it is still pending.
    /// Returns whether a handler ran.
    pub fn complete(&self, key: AnimationKey) -> bool {
        let handler = self.inner.lock().unwrap().pending.remove(&key);
        match handler {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    /// Fire every pending completion handler, in registration order.
    pub fn complete_all(&self) {
        let keys: Vec<AnimationKey> = {
            let inner = self.inner.lock().unwrap();
            inner
                .added
                .iter()
                .map(|a| a.key)
                .filter(|key| inner.pending.contains_key(key))
                .collect()
        };
        for key in keys {
            self.complete(key);
        }
    }

    /// Every `add()` call recorded so far.
    pub fn added(&self) -> Vec<AddedAnimation<T>>
    where
        T: Clone,
    {
        self.inner.lock().unwrap().added.clone()
    }

    /// Every `remove()` call recorded so far.
    pub fn removed(&self) -> Vec<AnimationKey> {
        self.inner.lock().unwrap().removed.clone()
    }

    /// Animations added but neither completed nor removed.
    pub fn pending_count(&self) -> usize {
        self.inner.lock().unwrap().pending.len()
    }

    /// The most recently adopted timeline, if any.
    pub fn timeline(&self) -> Option<TimelineHandle> {
        self.inner.lock().unwrap().timeline
    }
}

impl<T> Default for RecordingSink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AnimationSink<T> for RecordingSink<T> {
    fn add(
        &self,
        animation: PropertyAnimation<T>,
        key: AnimationKey,
        initial_velocity: Option<f64>,
        on_complete: CompletionHandler,
    ) {
        let mut inner = self.inner.lock().unwrap();
        inner.added.push(AddedAnimation {
            animation,
            key,
            initial_velocity,
        });
        inner.pending.insert(key, on_complete);
    }

    fn remove(&self, key: AnimationKey) {
        let mut inner = self.inner.lock().unwrap();
        inner.removed.push(key);
        inner.pending.remove(&key);
    }

    fn set_timeline(&self, timeline: TimelineHandle) {
        self.inner.lock().unwrap().timeline = Some(timeline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::AnimationDescriptor;
    use crate::timing::TimingFunction;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    fn animation(to_value: f64) -> PropertyAnimation<f64> {
        PropertyAnimation {
            descriptor: AnimationDescriptor::Basic {
                to_value,
                timing_function: TimingFunction::Linear,
            },
            duration: Duration::from_millis(100),
            delay: Duration::ZERO,
        }
    }

    #[test]
    fn test_animation_keys_are_unique() {
        let a = AnimationKey::next();
        let b = AnimationKey::next();
        assert_ne!(a, b);
    }

    #[test]
    fn test_complete_fires_handler_once() {
        let sink = RecordingSink::new();
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_clone = fired.clone();

        let key = AnimationKey::next();
        sink.add(
            animation(1.0),
            key,
            None,
            Box::new(move || {
                fired_clone.fetch_add(1, Ordering::SeqCst);
            }),
        );

        assert!(sink.complete(key));
        assert!(!sink.complete(key));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_remove_suppresses_completion() {
        let sink = RecordingSink::new();
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_clone = fired.clone();

        let key = AnimationKey::next();
        sink.add(
            animation(1.0),
            key,
            None,
            Box::new(move || {
                fired_clone.fetch_add(1, Ordering::SeqCst);
            }),
        );

        sink.remove(key);
        assert!(!sink.complete(key));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert_eq!(sink.removed(), vec![key]);
    }

    #[test]
    fn test_complete_all_runs_in_registration_order() {
        let sink = RecordingSink::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for tag in [1, 2, 3] {
            let order = order.clone();
            sink.add(
                animation(tag as f64),
                AnimationKey::next(),
                None,
                Box::new(move || order.lock().unwrap().push(tag)),
            );
        }

        sink.complete_all();
        assert_eq!(*order.lock().unwrap(), vec![1, 2, 3]);
        assert_eq!(sink.pending_count(), 0);
    }
}
