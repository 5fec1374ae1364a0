//! Lazy, cancelable push streams
//!
//! A [`Stream<T>`] holds a connect closure that runs once per subscriber.
//! Nothing happens until `subscribe()` is called; each call produces an
//! independent session with its own resources, torn down when the returned
//! [`Subscription`] is released.

use std::sync::{Arc, Mutex};

use crate::subscription::Subscription;

/// The receiving side of one stream session.
///
/// Cloneable so a connect closure can hand it to several upstream callbacks;
/// all clones forward into the same subscriber.
pub struct Observer<T> {
    on_next: Arc<Mutex<dyn FnMut(T) + Send>>,
}

impl<T> Clone for Observer<T> {
    fn clone(&self) -> Self {
        Self {
            on_next: Arc::clone(&self.on_next),
        }
    }
}

impl<T> Observer<T> {
    /// Wrap a subscriber callback.
    pub fn new(on_next: impl FnMut(T) + Send + 'static) -> Self {
        Self {
            on_next: Arc::new(Mutex::new(on_next)),
        }
    }

    /// Forward a value to the subscriber.
    pub fn next(&self, value: T) {
        (&mut *self.on_next.lock().unwrap())(value);
    }
}

type ConnectFn<T> = dyn Fn(Observer<T>) -> Subscription + Send + Sync;

/// A lazy stream of values.
///
/// The connect closure is invoked once per `subscribe()` call and returns
/// the subscription that tears the session down.
pub struct Stream<T> {
    connect: Arc<ConnectFn<T>>,
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Self {
            connect: Arc::clone(&self.connect),
        }
    }
}

impl<T> Stream<T> {
    /// Create a stream from a connect closure.
    pub fn new(connect: impl Fn(Observer<T>) -> Subscription + Send + Sync + 'static) -> Self {
        Self {
            connect: Arc::new(connect),
        }
    }

    /// Start a session. Values are pushed into `on_next` until the returned
    /// subscription is released.
    pub fn subscribe(&self, on_next: impl FnMut(T) + Send + 'static) -> Subscription {
        (self.connect)(Observer::new(on_next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_connect_runs_per_subscriber() {
        let connects = Arc::new(AtomicUsize::new(0));
        let connects_clone = connects.clone();

        let stream = Stream::new(move |observer: Observer<i32>| {
            connects_clone.fetch_add(1, Ordering::SeqCst);
            observer.next(1);
            Subscription::empty()
        });

        assert_eq!(connects.load(Ordering::SeqCst), 0);

        let _a = stream.subscribe(|_| {});
        let _b = stream.subscribe(|_| {});
        assert_eq!(connects.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_values_reach_subscriber() {
        let stream = Stream::new(|observer: Observer<i32>| {
            observer.next(1);
            observer.next(2);
            Subscription::empty()
        });

        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        let _sub = stream.subscribe(move |v| seen_clone.lock().unwrap().push(v));

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_unsubscribe_runs_session_teardown() {
        let torn_down = Arc::new(AtomicUsize::new(0));
        let torn_down_clone = torn_down.clone();

        let stream = Stream::new(move |_observer: Observer<i32>| {
            let torn_down = torn_down_clone.clone();
            Subscription::new(move || {
                torn_down.fetch_add(1, Ordering::SeqCst);
            })
        });

        let sub = stream.subscribe(|_| {});
        assert_eq!(torn_down.load(Ordering::SeqCst), 0);
        sub.unsubscribe();
        assert_eq!(torn_down.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cloned_observers_share_subscriber() {
        let stream = Stream::new(|observer: Observer<i32>| {
            let second = observer.clone();
            observer.next(1);
            second.next(2);
            Subscription::empty()
        });

        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        let _sub = stream.subscribe(move |v| seen_clone.lock().unwrap().push(v));

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }
}
