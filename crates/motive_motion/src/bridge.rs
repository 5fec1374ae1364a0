//! Tween-to-animation bridge
//!
//! [`TweenAnimationBridge`] is a reactive operator: given a [`Tween`], it
//! produces a lazy stream of interpolated target values while registering
//! imperative one-shot animations with an [`AnimationSink`] and publishing
//! a synthetic active/at-rest state back into the reactive graph.
//!
//! Each stream subscription is one *session* with its own active-animation
//! set. A session reacts to exactly three callback sources — `enabled`
//! toggles, path emissions, and sink completions — all delivered on the
//! host execution context, so session state needs no locking discipline
//! beyond a single mutex.
//!
//! The bridge publishes a tween's *terminal* value downstream synchronously
//! at emission time; it never waits for the sink to finish rendering.
//! Consumers that need the visual value over time must read it from the
//! sink directly.

use std::marker::PhantomData;
use std::sync::{Arc, Mutex};

use motive_core::{Observer, Stream, Subscription};
use rustc_hash::FxHashSet;

use crate::descriptor::{AnimationDescriptor, PropertyAnimation};
use crate::path::{SampledPath, TweenableValue};
use crate::sink::{AnimationKey, AnimationSink};
use crate::tween::{Tween, TweenMode, TweenState};

/// Per-session bookkeeping. Mutated only from the three callback sources;
/// the `cancelled` flag makes late sink completions no-ops after teardown.
struct SessionState {
    active: FxHashSet<AnimationKey>,
    path_subs: Vec<Subscription>,
    cancelled: bool,
}

impl SessionState {
    fn new() -> Self {
        Self {
            active: FxHashSet::default(),
            path_subs: Vec::new(),
            cancelled: false,
        }
    }
}

/// Converts declarative tweens into imperative property animations.
pub struct TweenAnimationBridge<T, S> {
    sink: Arc<S>,
    _value: PhantomData<fn() -> T>,
}

impl<T, S> TweenAnimationBridge<T, S>
where
    T: TweenableValue,
    S: AnimationSink<T> + Send + Sync + 'static,
{
    pub fn new(sink: Arc<S>) -> Self {
        Self {
            sink,
            _value: PhantomData,
        }
    }

    /// Bridge `tween` into a value stream.
    ///
    /// Subscribing starts a session: the session subscribes to
    /// `tween.enabled` with de-duplication and holds that subscription until
    /// the stream is canceled. While enabled, emissions register animations
    /// with the sink and publish the tween's terminal value downstream.
    /// Disabling cancels every in-flight animation and rests the state;
    /// canceling the stream additionally releases all subscriptions and
    /// stops state updates for good.
    pub fn stream(&self, tween: &Tween<T>) -> Stream<T> {
        let sink = Arc::clone(&self.sink);
        let tween = tween.clone();

        Stream::new(move |observer| {
            let session = Arc::new(Mutex::new(SessionState::new()));

            let enabled = tween.enabled.clone();
            let enabled_sub = {
                let tween = tween.clone();
                let sink = Arc::clone(&sink);
                let session = Arc::clone(&session);
                let observer = observer.clone();
                enabled.subscribe_dedupe(move |&enabled| {
                    if enabled {
                        activate(&tween, &sink, &session, &observer);
                    } else {
                        deactivate(&tween, &sink, &session);
                    }
                })
            };

            let sink = Arc::clone(&sink);
            let session = Arc::clone(&session);
            Subscription::new(move || {
                let (keys, path_subs) = {
                    let mut state = session.lock().unwrap();
                    state.cancelled = true;
                    let keys: Vec<AnimationKey> = state.active.drain().collect();
                    let path_subs: Vec<Subscription> = state.path_subs.drain(..).collect();
                    (keys, path_subs)
                };
                for key in keys {
                    sink.remove(key);
                }
                for sub in path_subs {
                    sub.unsubscribe();
                }
                enabled_sub.unsubscribe();
                tracing::debug!("TweenAnimationBridge: session torn down");
            })
        })
    }
}

/// Enabled went true: build a descriptor and emit, or start following paths.
fn activate<T, S>(
    tween: &Tween<T>,
    sink: &Arc<S>,
    session: &Arc<Mutex<SessionState>>,
    observer: &Observer<T>,
) where
    T: TweenableValue,
    S: AnimationSink<T> + Send + Sync + 'static,
{
    match &tween.mode {
        TweenMode::Values(values) => {
            let descriptor = if values.len() > 1 {
                AnimationDescriptor::Keyframe {
                    values: values.clone(),
                    key_times: tween.key_positions.clone(),
                    timing_functions: tween.timing_functions.clone(),
                }
            } else {
                let to_value = values
                    .last()
                    .cloned()
                    .expect("a values tween requires at least one value");
                let timing_function = *tween
                    .timing_functions
                    .first()
                    .expect("a tween requires at least one timing function");
                AnimationDescriptor::Basic {
                    to_value,
                    timing_function,
                }
            };

            // Terminal value goes downstream synchronously, even when the
            // emission below drops for lack of a materialized duration.
            observer.next(descriptor.terminal_value());
            emit(tween, sink, session, descriptor);
        }
        TweenMode::Path(source) => {
            // Every enable adds a fresh path subscription; they are released
            // only at stream cancellation, never on disable.
            let sub = {
                let tween = tween.clone();
                let sink = Arc::clone(sink);
                let session = Arc::clone(session);
                let observer = observer.clone();
                source.subscribe(move |path: &SampledPath| {
                    emit_path(&tween, &sink, &session, &observer, path);
                })
            };
            session.lock().unwrap().path_subs.push(sub);
        }
    }
}

/// Enabled went false: cancel every tracked animation and rest the state,
/// synchronously and unconditionally.
fn deactivate<T, S>(tween: &Tween<T>, sink: &Arc<S>, session: &Arc<Mutex<SessionState>>)
where
    T: TweenableValue,
    S: AnimationSink<T>,
{
    let keys: Vec<AnimationKey> = session.lock().unwrap().active.drain().collect();
    if !keys.is_empty() {
        tracing::debug!(
            count = keys.len(),
            "TweenAnimationBridge: cancelling active animations"
        );
    }
    for key in keys {
        sink.remove(key);
    }
    tween.state.set(TweenState::AtRest);
}

/// One path emission: capability-check the output type, build a keyframe
/// descriptor over the sampled points, publish the terminal point, emit.
/// Emissions for earlier paths keep running; they are not cancelled.
fn emit_path<T, S>(
    tween: &Tween<T>,
    sink: &Arc<S>,
    session: &Arc<Mutex<SessionState>>,
    observer: &Observer<T>,
    path: &SampledPath,
) where
    T: TweenableValue,
    S: AnimationSink<T> + Send + Sync + 'static,
{
    if path.points.is_empty() {
        tracing::trace!("TweenAnimationBridge: ignoring empty sampled path");
        return;
    }

    let converted: Option<Vec<T>> = path.points.iter().copied().map(T::from_path_point).collect();
    let Some(values) = converted else {
        let err = T::unsupported();
        tracing::error!("TweenAnimationBridge: {err}");
        debug_assert!(false, "{err}");
        return;
    };

    let descriptor = AnimationDescriptor::Keyframe {
        values,
        key_times: None,
        timing_functions: tween.timing_functions.clone(),
    };
    observer.next(descriptor.terminal_value());
    emit(tween, sink, session, descriptor);
}

/// Shared emission routine: materialize the duration, track a fresh key,
/// flip the state active, and register with the sink.
fn emit<T, S>(
    tween: &Tween<T>,
    sink: &Arc<S>,
    session: &Arc<Mutex<SessionState>>,
    descriptor: AnimationDescriptor<T>,
) where
    T: TweenableValue,
    S: AnimationSink<T>,
{
    // A duration that materializes later does not retroactively emit; the
    // caller has to re-trigger.
    let Some(duration) = tween.duration.get() else {
        tracing::trace!("TweenAnimationBridge: duration not materialized, dropping animation");
        return;
    };

    let key = AnimationKey::next();
    {
        let mut state = session.lock().unwrap();
        if state.cancelled {
            return;
        }
        state.active.insert(key);
    }
    tween.state.set(TweenState::Active);

    if let Some(timeline) = tween.timeline {
        sink.set_timeline(timeline);
    }

    tracing::debug!(key = key.to_raw(), "TweenAnimationBridge: adding animation");
    let animation = PropertyAnimation {
        descriptor,
        duration,
        delay: tween.delay,
    };

    let session = Arc::clone(session);
    let state_out = tween.state.clone();
    sink.add(
        animation,
        key,
        None,
        Box::new(move || {
            let at_rest = {
                let mut state = session.lock().unwrap();
                if state.cancelled {
                    return;
                }
                state.active.remove(&key);
                state.active.is_empty()
            };
            if at_rest {
                state_out.set(TweenState::AtRest);
            }
        }),
    );
}
