//! # Object Pool
//!
//! Free list of idle instances for objects that are checked out and
//! returned every frame.

use crate::config::PoolConfig;
use crate::error::PoolResult;
use crate::memory::stats::PoolStats;

/// A pool of reusable `T` instances.
///
/// Idle instances sit on a stack. [`acquire`](Self::acquire) pops one if
/// available and only constructs a fresh `T::default()` when the stack is
/// empty. [`release`](Self::release) pushes the instance back. Once the pool
/// is warm, a checkout/return cycle performs no heap allocation.
///
/// The pool never shrinks on its own. Instances that are acquired and never
/// released are simply dropped by their owner; the pool does not track them.
///
/// # Thread Safety
///
/// This pool is NOT thread-safe. Use one pool per thread or a
/// [`SharedPool`](crate::SharedPool).
///
/// # Example
///
/// ```rust
/// use recycler_core::ObjectPool;
///
/// let mut pool: ObjectPool<Vec<u8>> = ObjectPool::new().with_reset(Vec::clear);
///
/// // Frame loop
/// for _ in 0..3 {
///     let mut scratch = pool.acquire();
///     scratch.extend_from_slice(b"per-frame data");
///     pool.release(scratch);
/// }
///
/// // Only the first frame constructed a buffer.
/// assert_eq!(pool.stats().created, 1);
/// ```
#[derive(Debug)]
pub struct ObjectPool<T> {
    /// Idle instances. The top of the stack is handed out first.
    idle: Vec<T>,
    /// Cap on `idle.len()`.
    max_idle: Option<usize>,
    /// Hook run on instances entering the idle set.
    reset: Option<fn(&mut T)>,
    /// Traffic counters.
    stats: PoolStats,
    /// Label for log output.
    name: String,
}

impl<T> ObjectPool<T> {
    /// Creates an empty, unbounded pool.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&PoolConfig::default())
    }

    /// Creates an empty pool tuned by `config`.
    ///
    /// `initial_capacity` reserves free-list slots only; no `T` is
    /// constructed until the first [`acquire`](Self::acquire).
    ///
    /// Never panics on an unvalidated config: a zero `max_idle` is raised
    /// to one, and the reservation is clamped to
    /// [`PoolConfig::MAX_INITIAL_CAPACITY`] and `max_idle`. A reservation
    /// the allocator refuses leaves the free list empty. Use
    /// [`try_with_config`](Self::try_with_config) to reject such configs.
    #[must_use]
    pub fn with_config(config: &PoolConfig) -> Self {
        let max_idle = match config.max_idle {
            Some(0) => {
                tracing::warn!(name = %config.name, "max_idle of zero raised to one");
                Some(1)
            }
            other => other,
        };
        let reserve = config
            .initial_capacity
            .min(PoolConfig::MAX_INITIAL_CAPACITY)
            .min(max_idle.unwrap_or(usize::MAX));

        let mut idle = Vec::new();
        if idle.try_reserve_exact(reserve).is_err() {
            tracing::warn!(name = %config.name, reserve, "could not reserve free list");
        }

        tracing::debug!(
            name = %config.name,
            initial_capacity = reserve,
            max_idle = ?max_idle,
            "creating object pool"
        );

        Self {
            idle,
            max_idle,
            reset: None,
            stats: PoolStats::default(),
            name: config.name.clone(),
        }
    }

    /// Validates `config`, then creates the pool.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`](crate::PoolError::InvalidConfig)
    /// if [`PoolConfig::validate`] fails.
    pub fn try_with_config(config: &PoolConfig) -> PoolResult<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// Installs a hook that runs on every instance retained by
    /// [`release`](Self::release), e.g. `Vec::clear`.
    #[must_use]
    pub fn with_reset(mut self, reset: fn(&mut T)) -> Self {
        self.reset = Some(reset);
        self
    }

    /// Returns an instance to the pool.
    ///
    /// Accepts a `T` or an `Option<T>`. `None` is ignored. If the idle set is
    /// already at `max_idle`, the instance is dropped instead of retained.
    ///
    /// The pool does not check where `instance` came from; returning an
    /// instance that was never acquired from this pool is allowed and
    /// simply grows the idle set.
    pub fn release<I: Into<Option<T>>>(&mut self, instance: I) {
        let Some(mut instance) = instance.into() else {
            self.stats.rejected += 1;
            return;
        };

        self.stats.released += 1;

        if let Some(max_idle) = self.max_idle {
            if self.idle.len() >= max_idle {
                self.stats.discarded += 1;
                tracing::debug!(name = %self.name, max_idle, "idle set full, dropping instance");
                return;
            }
        }

        if let Some(reset) = self.reset {
            reset(&mut instance);
        }
        self.idle.push(instance);
    }

    /// Returns the number of idle instances.
    #[inline]
    #[must_use]
    pub fn idle_count(&self) -> usize {
        self.idle.len()
    }

    /// Returns true if no instance is idle.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.idle.is_empty()
    }

    /// Returns the idle cap, if any.
    #[inline]
    #[must_use]
    pub const fn max_idle(&self) -> Option<usize> {
        self.max_idle
    }

    /// Returns the pool's label.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a snapshot of the traffic counters.
    #[inline]
    #[must_use]
    pub const fn stats(&self) -> PoolStats {
        self.stats
    }

    /// Drops every idle instance. Counters are kept.
    pub fn clear(&mut self) {
        self.idle.clear();
    }

    /// Drops idle instances until at most `len` remain.
    pub fn shrink_to(&mut self, len: usize) {
        self.idle.truncate(len);
    }
}

impl<T: Default> ObjectPool<T> {
    /// Checks out an instance.
    ///
    /// Pops the most recently released idle instance, or constructs
    /// `T::default()` when none is idle. Never fails; running out of memory
    /// while constructing aborts the process.
    pub fn acquire(&mut self) -> T {
        self.stats.acquired += 1;

        if let Some(instance) = self.idle.pop() {
            self.stats.reused += 1;
            instance
        } else {
            self.stats.created += 1;
            tracing::trace!(
                name = %self.name,
                created = self.stats.created,
                "pool empty, constructing"
            );
            T::default()
        }
    }
}

impl<T> Default for ObjectPool<T> {
    fn default() -> Self {
        Self::new()
    }
}
