//! Object pool for recyclable instances.
//!
//! The pool keeps dispatch hot paths allocation-free: instead of constructing
//! a fresh event per raise, the manager checks instances out of a [`Pool`] and
//! returns them once handlers have run. Any type can be pooled as long as it
//! implements the [`Poolable`] reset contract.

use crossbeam::queue::SegQueue;
use std::fmt;
use std::sync::Mutex;

/// Reset contract a pooled type must expose.
///
/// `reset` restores the instance to its blank state before it becomes
/// available to the next `get` caller; no instance re-enters circulation
/// un-reset.
pub trait Poolable {
    /// Clears all instance state back to its post-construction defaults.
    fn reset(&mut self);
}

/// A bounded or unbounded recycler of reusable instances.
///
/// Free instances live in a lock-free queue, so `free` may run concurrently
/// with `get` from any number of threads. `get` calls are mutually exclusive
/// with each other: the size check and conditional construction happen under
/// one lock.
///
/// The optional capacity bounds *total constructed* instances (outstanding
/// plus free). It is enforced only inside `get`; `free` performs no check, so
/// returning instances can never fail.
pub struct Pool<T: Poolable> {
    free: SegQueue<T>,
    factory: Box<dyn Fn() -> T + Send + Sync>,
    capacity: Option<usize>,
    constructed: Mutex<usize>,
}

impl<T: Poolable> Pool<T> {
    /// Creates an unbounded pool. `get` always succeeds, constructing on
    /// demand when the free queue is empty.
    pub fn new(factory: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self::with_capacity(factory, None)
    }

    /// Creates a pool that will never construct more than `capacity` total
    /// instances. Once the cap is reached and no freed instance is available,
    /// `get` reports exhaustion by returning `None`.
    pub fn bounded(factory: impl Fn() -> T + Send + Sync + 'static, capacity: usize) -> Self {
        Self::with_capacity(factory, Some(capacity))
    }

    fn with_capacity(
        factory: impl Fn() -> T + Send + Sync + 'static,
        capacity: Option<usize>,
    ) -> Self {
        Self {
            free: SegQueue::new(),
            factory: Box::new(factory),
            capacity,
            constructed: Mutex::new(0),
        }
    }

    /// Gets an instance from the pool.
    ///
    /// Returns a previously freed instance when one is available, otherwise
    /// constructs a new one via the factory. `None` is the explicit
    /// capacity-exhaustion result for bounded pools; callers should treat it
    /// as a recoverable condition and retry after a `free`.
    pub fn get(&self) -> Option<T> {
        let mut constructed = self
            .constructed
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(instance) = self.free.pop() {
            return Some(instance);
        }
        if let Some(capacity) = self.capacity {
            if *constructed >= capacity {
                return None;
            }
        }
        *constructed += 1;
        Some((self.factory)())
    }

    /// Resets the instance and places it back into the pool.
    ///
    /// The free queue is uncapped: instances handed out before a capacity was
    /// reached can always be returned.
    pub fn free(&self, mut instance: T) {
        instance.reset();
        self.free.push(instance);
    }

    /// The configured capacity, or `None` for an unbounded pool.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Number of instances currently waiting in the free queue.
    pub fn idle(&self) -> usize {
        self.free.len()
    }
}

impl<T: Poolable> fmt::Debug for Pool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("capacity", &self.capacity)
            .field("idle", &self.free.len())
            .finish()
    }
}

mod tests;
