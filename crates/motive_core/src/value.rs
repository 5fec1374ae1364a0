//! Single-slot reactive value container
//!
//! [`ReactiveValue<T>`] is a possibly-absent slot with push notification.
//! Subscribers receive the current value synchronously at subscribe time
//! (when one is present) and every subsequent `set()`. A subscriber may opt
//! into de-duplicated delivery, in which case a `set()` carrying a value
//! equal to the last one that subscriber observed is skipped for it.
//!
//! Delivery happens after the slot's own lock is released, so a callback is
//! free to read or write *other* reactive values. Re-entering the same value
//! from inside its own callback is not supported.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::sync::{Arc, Mutex, Weak};

use crate::subscription::Subscription;

new_key_type! {
    /// Unique identifier for a value subscriber
    pub struct SubscriberKey;
}

type SharedCallback<T> = Arc<Mutex<dyn FnMut(&T) + Send>>;

struct Subscriber<T> {
    callback: SharedCallback<T>,
    dedupe: bool,
    /// Last value delivered to this subscriber, for de-duplication.
    last_seen: Option<T>,
}

struct ValueInner<T> {
    value: Option<T>,
    subscribers: SlotMap<SubscriberKey, Subscriber<T>>,
}

/// A single-slot, possibly-absent reactive container.
///
/// Cloning produces another handle to the same slot (cheap, `Arc`-backed).
pub struct ReactiveValue<T> {
    inner: Arc<Mutex<ValueInner<T>>>,
}

impl<T> Clone for ReactiveValue<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + PartialEq + Send + 'static> ReactiveValue<T> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(ValueInner {
                value: None,
                subscribers: SlotMap::with_key(),
            })),
        }
    }

    /// Create a slot holding `value`.
    pub fn with(value: T) -> Self {
        let slot = Self::new();
        slot.inner.lock().unwrap().value = Some(value);
        slot
    }

    /// Read the current value, if any.
    pub fn get(&self) -> Option<T> {
        self.inner.lock().unwrap().value.clone()
    }

    /// Store a new value and notify subscribers.
    ///
    /// Subscribers registered with [`subscribe_dedupe`](Self::subscribe_dedupe)
    /// are skipped when `value` equals the last value they observed.
    pub fn set(&self, value: T) {
        let pending: SmallVec<[(SubscriberKey, SharedCallback<T>); 4]> = {
            let mut inner = self.inner.lock().unwrap();
            inner.value = Some(value.clone());
            inner
                .subscribers
                .iter_mut()
                .filter_map(|(key, sub)| {
                    if sub.dedupe && sub.last_seen.as_ref() == Some(&value) {
                        return None;
                    }
                    sub.last_seen = Some(value.clone());
                    Some((key, Arc::clone(&sub.callback)))
                })
                .collect()
        };

        for (key, callback) in pending {
            // An earlier callback in this loop may have unsubscribed a later one.
            let live = self.inner.lock().unwrap().subscribers.contains_key(key);
            if live {
                (&mut *callback.lock().unwrap())(&value);
            }
        }
    }

    /// Clear the slot without notifying subscribers.
    ///
    /// Subsequent subscribers receive no initial value until the next `set()`.
    pub fn clear(&self) {
        self.inner.lock().unwrap().value = None;
    }

    /// Subscribe to value changes. The current value, when present, is
    /// delivered synchronously before this returns.
    pub fn subscribe(&self, on_value: impl FnMut(&T) + Send + 'static) -> Subscription {
        self.subscribe_inner(false, on_value)
    }

    /// Subscribe with de-duplication: consecutive equal values are delivered
    /// only once to this subscriber.
    pub fn subscribe_dedupe(&self, on_value: impl FnMut(&T) + Send + 'static) -> Subscription {
        self.subscribe_inner(true, on_value)
    }

    fn subscribe_inner(
        &self,
        dedupe: bool,
        on_value: impl FnMut(&T) + Send + 'static,
    ) -> Subscription {
        let callback: SharedCallback<T> = Arc::new(Mutex::new(on_value));

        let (key, current) = {
            let mut inner = self.inner.lock().unwrap();
            let current = inner.value.clone();
            let key = inner.subscribers.insert(Subscriber {
                callback: Arc::clone(&callback),
                dedupe,
                last_seen: current.clone(),
            });
            (key, current)
        };

        // Initial delivery outside the slot lock.
        if let Some(value) = current {
            (&mut *callback.lock().unwrap())(&value);
        }

        let weak: Weak<Mutex<ValueInner<T>>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.lock().unwrap().subscribers.remove(key);
            }
        })
    }

    /// Number of live subscribers (diagnostics and tests).
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().unwrap().subscribers.len()
    }
}

impl<T: Clone + PartialEq + Send + 'static> Default for ReactiveValue<T> {
    fn default() -> Self {
        Self::new()
    }
}
