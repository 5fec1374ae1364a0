//! Owned unsubscribe handles
//!
//! A [`Subscription`] represents one live registration against a reactive
//! source. It detaches when `unsubscribe()` is called or when the handle is
//! dropped, whichever comes first. Detaching twice is a no-op.

/// An owned handle to a live subscription.
///
/// Dropping the handle releases the subscription, so holders that want a
/// subscription to outlive the current scope must keep the handle alive.
pub struct Subscription {
    detach: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Create a subscription that runs `detach` when released.
    pub fn new(detach: impl FnOnce() + Send + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// A subscription that does nothing when released.
    pub fn empty() -> Self {
        Self { detach: None }
    }

    /// Explicitly release the subscription.
    pub fn unsubscribe(mut self) {
        self.run_detach();
    }

    fn run_detach(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_detach();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("live", &self.detach.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_unsubscribe_runs_detach_once() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();

        let sub = Subscription::new(move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        sub.unsubscribe();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_runs_detach() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();

        {
            let _sub = Subscription::new(move || {
                count_clone.fetch_add(1, Ordering::SeqCst);
            });
        }

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_is_noop() {
        Subscription::empty().unsubscribe();
    }
}
