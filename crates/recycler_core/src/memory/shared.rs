//! # Shared Pool
//!
//! [`ObjectPool`] behind a mutex, for pools fed from several threads.
//!
//! The lock is held only for a single push or pop. Construction of fresh
//! instances and the reset hook both run under the lock, so keep
//! `T::default()` and the hook cheap.

use std::fmt;
use std::ops::{Deref, DerefMut};

use parking_lot::Mutex;

use crate::config::PoolConfig;
use crate::error::PoolResult;
use crate::memory::pool::ObjectPool;
use crate::memory::stats::PoolStats;

/// A thread-safe object pool.
///
/// Same contract as [`ObjectPool`], with `&self` methods. Share it through
/// an `Arc` or a `&'static`.
///
/// # Example
///
/// ```rust
/// use recycler_core::SharedPool;
///
/// let pool: SharedPool<String> = SharedPool::new();
/// {
///     let mut name = pool.checkout();
///     name.push_str("player-1");
///     // Returned to the pool here.
/// }
/// assert_eq!(pool.idle_count(), 1);
/// ```
pub struct SharedPool<T> {
    inner: Mutex<ObjectPool<T>>,
}

impl<T> SharedPool<T> {
    /// Creates an empty, unbounded shared pool.
    #[must_use]
    pub fn new() -> Self {
        Self::from_pool(ObjectPool::new())
    }

    /// Creates an empty shared pool tuned by `config`.
    #[must_use]
    pub fn with_config(config: &PoolConfig) -> Self {
        Self::from_pool(ObjectPool::with_config(config))
    }

    /// Validates `config`, then creates the shared pool.
    ///
    /// # Errors
    ///
    /// Same as [`ObjectPool::try_with_config`].
    pub fn try_with_config(config: &PoolConfig) -> PoolResult<Self> {
        ObjectPool::try_with_config(config).map(Self::from_pool)
    }

    /// Wraps an existing pool, keeping its idle instances and counters.
    #[must_use]
    pub fn from_pool(pool: ObjectPool<T>) -> Self {
        Self {
            inner: Mutex::new(pool),
        }
    }

    /// Returns an instance to the pool. See [`ObjectPool::release`].
    pub fn release<I: Into<Option<T>>>(&self, instance: I) {
        self.inner.lock().release(instance);
    }

    /// Returns the number of idle instances.
    #[must_use]
    pub fn idle_count(&self) -> usize {
        self.inner.lock().idle_count()
    }

    /// Returns a snapshot of the traffic counters.
    #[must_use]
    pub fn stats(&self) -> PoolStats {
        self.inner.lock().stats()
    }

    /// Drops every idle instance.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Unwraps the pool.
    #[must_use]
    pub fn into_inner(self) -> ObjectPool<T> {
        self.inner.into_inner()
    }
}

impl<T: Default> SharedPool<T> {
    /// Checks out an instance. See [`ObjectPool::acquire`].
    pub fn acquire(&self) -> T {
        self.inner.lock().acquire()
    }

    /// Checks out an instance wrapped in a guard that returns it on drop.
    pub fn checkout(&self) -> Pooled<'_, T> {
        Pooled {
            value: Some(self.acquire()),
            pool: self,
        }
    }
}

impl<T> Default for SharedPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedPool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedPool").field("inner", &self.inner).finish()
    }
}

/// A checked-out instance that goes back to its [`SharedPool`] on drop.
pub struct Pooled<'a, T> {
    /// Always `Some` until `detach` or `drop`.
    value: Option<T>,
    pool: &'a SharedPool<T>,
}

impl<T> Pooled<'_, T> {
    /// Takes the instance out of the guard. It will not be returned.
    #[must_use]
    pub fn detach(mut self) -> T {
        match self.value.take() {
            Some(value) => value,
            None => unreachable!("pooled value already taken"),
        }
    }
}

impl<T> Deref for Pooled<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match &self.value {
            Some(value) => value,
            None => unreachable!("pooled value already taken"),
        }
    }
}

impl<T> DerefMut for Pooled<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        match &mut self.value {
            Some(value) => value,
            None => unreachable!("pooled value already taken"),
        }
    }
}

impl<T> Drop for Pooled<'_, T> {
    fn drop(&mut self) {
        // None once detached.
        if let Some(value) = self.value.take() {
            self.pool.release(value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Pooled<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pooled").field(&self.value).finish()
    }
}
