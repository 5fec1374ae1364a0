//! Motive Core Runtime
//!
//! This crate provides the foundational reactive primitives for the Motive
//! motion toolkit:
//!
//! - **Reactive Values**: single-slot, possibly-absent containers with
//!   push notification and optional de-duplicated delivery
//! - **Subscriptions**: owned unsubscribe handles with RAII release
//! - **Streams**: lazy, cancelable push streams where every subscriber gets
//!   an independent session
//!
//! All delivery is synchronous and callback-driven. Values are expected to
//! arrive on a single logical execution context (the host UI thread); the
//! types are `Send` so handles can be moved across threads, but no internal
//! scheduling ever happens.
//!
//! # Example
//!
//! ```rust
//! use motive_core::ReactiveValue;
//!
//! let value = ReactiveValue::with(1i32);
//!
//! let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
//! let seen_clone = seen.clone();
//! let sub = value.subscribe(move |v| seen_clone.lock().unwrap().push(*v));
//!
//! value.set(2);
//! assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
//! sub.unsubscribe();
//! ```

pub mod stream;
pub mod subscription;
pub mod value;

pub use stream::{Observer, Stream};
pub use subscription::Subscription;
pub use value::{ReactiveValue, SubscriberKey};
